//! Parallel boolean sparse matrix multiplication
//!
//! Rows of the output are independent, so the contraction fans out across
//! a rayon pool. The per-row kernels are the same ones the sequential
//! multiply uses, and the assembled coordinate set is identical to the
//! sequential definition: parallelism is an optimization, never a
//! behavioral variation.

use rayon::prelude::*;

use crate::accumulator::{multiply_row_dense, multiply_row_sort};
use crate::error::{Error, Result};
use crate::matrix::{multiply_with_config, BoolMatrixCSR, BooleConfig};
use crate::utils::exclusive_scan;

/// Computes the boolean matrix product A × B with parallel row processing
///
/// With `config.n_threads` of 0 or 1 this degrades to the sequential
/// kernel. The result is always equal to [`multiply`](crate::multiply).
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] unless `a.n_cols == b.n_rows`.
pub fn multiply_parallel(
    a: &BoolMatrixCSR,
    b: &BoolMatrixCSR,
    config: &BooleConfig,
) -> Result<BoolMatrixCSR> {
    if a.n_cols != b.n_rows {
        return Err(Error::ShapeMismatch {
            op: "multiply",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    if config.n_threads <= 1 {
        return multiply_with_config(a, b, config);
    }

    let use_dense = b.n_cols <= config.dense_accum_threshold;

    // Each row is produced independently, then stitched into CSR form.
    let rows: Vec<Vec<usize>> = (0..a.n_rows)
        .into_par_iter()
        .map(|i| {
            if use_dense {
                multiply_row_dense(i, a, b)
            } else {
                multiply_row_sort(i, a, b)
            }
        })
        .collect();

    let counts: Vec<usize> = rows.iter().map(|row| row.len()).collect();
    let row_ptr = exclusive_scan(&counts);

    let mut col_idx = Vec::with_capacity(row_ptr[a.n_rows]);
    for row in rows {
        col_idx.extend(row);
    }

    Ok(BoolMatrixCSR {
        n_rows: a.n_rows,
        n_cols: b.n_cols,
        row_ptr,
        col_idx,
    })
}
