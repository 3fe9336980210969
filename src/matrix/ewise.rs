//! Element-wise addition over the boolean semiring
//!
//! Addition is logical OR, so element-wise addition of two matrices is the
//! union of their coordinate sets. The operation is commutative,
//! associative and idempotent.

use crate::error::{Error, Result};
use crate::matrix::BoolMatrixCSR;

/// Computes the element-wise sum (set union) of two matrices
///
/// Rows are merged pairwise; both operand rows are sorted, so a single
/// two-pointer pass produces the canonical union row.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] unless the shapes are identical.
pub fn ewise_add(a: &BoolMatrixCSR, b: &BoolMatrixCSR) -> Result<BoolMatrixCSR> {
    if a.shape() != b.shape() {
        return Err(Error::ShapeMismatch {
            op: "ewise_add",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    let mut row_ptr = Vec::with_capacity(a.n_rows + 1);
    row_ptr.push(0);
    let mut col_idx = Vec::with_capacity(a.nnz().max(b.nnz()));

    for i in 0..a.n_rows {
        merge_union(a.row(i), b.row(i), &mut col_idx);
        row_ptr.push(col_idx.len());
    }

    Ok(BoolMatrixCSR {
        n_rows: a.n_rows,
        n_cols: a.n_cols,
        row_ptr,
        col_idx,
    })
}

/// Appends the sorted union of two sorted runs to `out`
fn merge_union(left: &[usize], right: &[usize], out: &mut Vec<usize>) {
    let mut l = 0;
    let mut r = 0;

    while l < left.len() && r < right.len() {
        match left[l].cmp(&right[r]) {
            std::cmp::Ordering::Less => {
                out.push(left[l]);
                l += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(right[r]);
                r += 1;
            }
            std::cmp::Ordering::Equal => {
                out.push(left[l]);
                l += 1;
                r += 1;
            }
        }
    }
    out.extend_from_slice(&left[l..]);
    out.extend_from_slice(&right[r..]);
}
