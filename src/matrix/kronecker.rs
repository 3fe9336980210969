//! Kronecker product over the boolean semiring
//!
//! The result is a block matrix: every entry (i, j) of A stamps a copy of
//! B's pattern into block (i, j). An output entry exists at
//! (i·B.rows + p, j·B.cols + q) iff (i, j) is in A and (p, q) is in B.

use crate::matrix::BoolMatrixCSR;

/// Computes the Kronecker product A ⊗ B
///
/// The result has shape (A.rows·B.rows, A.cols·B.cols) and exactly
/// nnz(A)·nnz(B) entries. There is no shape precondition.
///
/// Output row i·B.rows + p is the concatenation over A's row i of B's row
/// p shifted into block position, so walking A's rows outer and B's rows
/// inner emits the CSR arrays already in canonical order.
pub fn kronecker(a: &BoolMatrixCSR, b: &BoolMatrixCSR) -> BoolMatrixCSR {
    let n_rows = a.n_rows * b.n_rows;
    let n_cols = a.n_cols * b.n_cols;
    let nnz = a.nnz() * b.nnz();

    let mut row_ptr = Vec::with_capacity(n_rows + 1);
    row_ptr.push(0);
    let mut col_idx = Vec::with_capacity(nnz);

    for i in 0..a.n_rows {
        for p in 0..b.n_rows {
            for j in a.row_iter(i) {
                let block_base = j * b.n_cols;
                for q in b.row_iter(p) {
                    col_idx.push(block_base + q);
                }
            }
            row_ptr.push(col_idx.len());
        }
    }

    BoolMatrixCSR {
        n_rows,
        n_cols,
        row_ptr,
        col_idx,
    }
}
