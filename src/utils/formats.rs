//! Conversions between boole matrices and external sparse formats

use num_traits::Num;
use sprs::CsMat;

use crate::matrix::BoolMatrixCSR;

/// Converts a boolean matrix to a sprs CsMat, mapping presence to `T::one()`
pub fn to_sprs<T>(matrix: &BoolMatrixCSR) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    CsMat::new(
        (matrix.n_rows, matrix.n_cols),
        matrix.row_ptr.clone(),
        matrix.col_idx.clone(),
        vec![T::one(); matrix.nnz()],
    )
}

/// Converts a sprs CsMat to a boolean matrix
///
/// Nonzero values become present entries; explicitly stored zeros are
/// dropped, since the boolean matrix has no way to represent them.
pub fn from_sprs<T>(matrix: CsMat<T>) -> BoolMatrixCSR
where
    T: Copy + Num + Default,
{
    // Ensure matrix is in CSR format
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let (n_rows, n_cols) = matrix.shape();
    let (indptr, indices, data) = matrix.into_raw_storage();

    let mut row_ptr = Vec::with_capacity(n_rows + 1);
    row_ptr.push(0);
    let mut col_idx = Vec::with_capacity(indices.len());

    for i in 0..n_rows {
        for k in indptr[i]..indptr[i + 1] {
            if !data[k].is_zero() {
                col_idx.push(indices[k]);
            }
        }
        row_ptr.push(col_idx.len());
    }

    BoolMatrixCSR {
        n_rows,
        n_cols,
        row_ptr,
        col_idx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprs_roundtrip() {
        let original =
            BoolMatrixCSR::from_lists(3, 3, &[0, 0, 1, 2], &[0, 1, 1, 2]).unwrap();

        let sprs_mat: CsMat<u8> = to_sprs(&original);
        assert_eq!(sprs_mat.nnz(), original.nnz());

        let roundtrip = from_sprs(sprs_mat);
        assert_eq!(roundtrip, original);
    }

    #[test]
    fn test_from_sprs_drops_explicit_zeros() {
        let sprs_mat = CsMat::new((2, 2), vec![0, 2, 3], vec![0, 1, 0], vec![1i32, 0, 2]);

        let m = from_sprs(sprs_mat);
        assert_eq!(m.to_list(), vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn test_to_sprs_f64() {
        let m = BoolMatrixCSR::identity(3);
        let sprs_mat: CsMat<f64> = to_sprs(&m);

        assert_eq!(sprs_mat.shape(), (3, 3));
        assert_eq!(sprs_mat.nnz(), 3);
        assert_eq!(sprs_mat.get(1, 1), Some(&1.0));
    }
}
