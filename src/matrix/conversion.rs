//! Conversion routines: transposition and dense interop

use ndarray::Array2;

use crate::matrix::BoolMatrixCSR;
use crate::utils::exclusive_scan;

impl BoolMatrixCSR {
    /// Returns the transpose as a new matrix of shape (cols, rows)
    ///
    /// Pure: the source is not mutated. Implemented as a count-sort
    /// scatter; scanning the source in row-major order fills each output
    /// row with ascending column indices, so the result is canonical
    /// without a sorting pass.
    pub fn transpose(&self) -> Self {
        // Count entries per column
        let mut col_counts = vec![0; self.n_cols];
        for &col in &self.col_idx {
            col_counts[col] += 1;
        }

        let row_ptr = exclusive_scan(&col_counts);

        // Scatter row indices into the transposed layout
        let mut col_idx = vec![0; self.nnz()];
        let mut next = row_ptr.clone();

        for (row, col) in self.iter() {
            col_idx[next[col]] = row;
            next[col] += 1;
        }

        Self {
            n_rows: self.n_cols,
            n_cols: self.n_rows,
            row_ptr,
            col_idx,
        }
    }

    /// Converts to a dense boolean array
    pub fn to_dense(&self) -> Array2<bool> {
        let mut dense = Array2::from_elem((self.n_rows, self.n_cols), false);
        for (row, col) in self.iter() {
            dense[[row, col]] = true;
        }
        dense
    }

    /// Builds a sparse matrix from a dense boolean array
    pub fn from_dense(dense: &Array2<bool>) -> Self {
        let (n_rows, n_cols) = dense.dim();

        let mut row_ptr = Vec::with_capacity(n_rows + 1);
        row_ptr.push(0);
        let mut col_idx = Vec::new();

        for i in 0..n_rows {
            for j in 0..n_cols {
                if dense[[i, j]] {
                    col_idx.push(j);
                }
            }
            row_ptr.push(col_idx.len());
        }

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose() {
        // [x x .]      [x . x]
        // [. x .]  ->  [x x .]
        // [x . x]      [. . x]
        let m = BoolMatrixCSR::new(3, 3, vec![0, 2, 3, 5], vec![0, 1, 1, 0, 2]);
        let t = m.transpose();

        assert_eq!(t.shape(), (3, 3));
        assert_eq!(t.to_list(), vec![(0, 0), (0, 2), (1, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_transpose_rectangular() {
        let m = BoolMatrixCSR::from_lists(2, 4, &[0, 0, 1], &[3, 1, 0]).unwrap();
        let t = m.transpose();

        assert_eq!(t.shape(), (4, 2));
        assert_eq!(t.to_list(), vec![(0, 1), (1, 0), (3, 0)]);
    }

    #[test]
    fn test_double_transpose_roundtrip() {
        let m = BoolMatrixCSR::from_lists(3, 5, &[0, 1, 2, 2], &[4, 2, 0, 3]).unwrap();
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_dense_roundtrip() {
        let m = BoolMatrixCSR::from_lists(3, 3, &[0, 1, 2], &[2, 0, 1]).unwrap();
        let dense = m.to_dense();

        assert!(dense[[0, 2]]);
        assert!(!dense[[0, 0]]);
        assert_eq!(BoolMatrixCSR::from_dense(&dense), m);
    }
}
