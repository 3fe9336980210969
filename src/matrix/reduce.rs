//! Row reduction over the boolean semiring
//!
//! Reducing a row with OR collapses it to a single boolean: "does this row
//! hold at least one entry". The result is a one-column matrix.

use crate::matrix::BoolMatrixCSR;

/// Reduces each row of the matrix to a single boolean
///
/// Returns a column vector of shape (rows, 1) whose row i is present iff
/// row i of the input has any entry.
pub fn reduce(a: &BoolMatrixCSR) -> BoolMatrixCSR {
    let mut row_ptr = Vec::with_capacity(a.n_rows + 1);
    row_ptr.push(0);
    let mut col_idx = Vec::new();

    for i in 0..a.n_rows {
        if a.row_ptr[i + 1] > a.row_ptr[i] {
            col_idx.push(0);
        }
        row_ptr.push(col_idx.len());
    }

    BoolMatrixCSR {
        n_rows: a.n_rows,
        n_cols: 1,
        row_ptr,
        col_idx,
    }
}
