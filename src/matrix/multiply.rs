//! Boolean sparse matrix multiplication
//!
//! Row-by-row Gustavson multiplication over the OR/AND semiring: an output
//! entry (i, j) is present iff some k has (i, k) in A and (k, j) in B.
//! There is nothing to sum, so the per-row work is pure set collection,
//! delegated to the accumulator module.
//!
//! Two forms are exposed: the pure [`multiply`] allocates a fresh result,
//! and [`multiply_into`] unions the product into an existing target matrix
//! (the accumulate form the transitive closure loop is built on).

use crate::accumulator::{accumulate_row, create_accumulator};
use crate::error::{Error, Result};
use crate::matrix::config::BooleConfig;
use crate::matrix::BoolMatrixCSR;

/// Computes the boolean matrix product A × B
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] unless `a.n_cols == b.n_rows`.
pub fn multiply(a: &BoolMatrixCSR, b: &BoolMatrixCSR) -> Result<BoolMatrixCSR> {
    multiply_with_config(a, b, &BooleConfig::default())
}

/// Computes the boolean matrix product A × B with explicit tuning
///
/// The accumulator strategy is chosen once from the output width against
/// `config.dense_accum_threshold` and reused across rows. Every
/// configuration computes the same coordinate set.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] unless `a.n_cols == b.n_rows`.
pub fn multiply_with_config(
    a: &BoolMatrixCSR,
    b: &BoolMatrixCSR,
    config: &BooleConfig,
) -> Result<BoolMatrixCSR> {
    check_inner_dim(a, b)?;

    let mut accumulator = create_accumulator(b.n_cols, config.dense_accum_threshold);

    let mut row_ptr = Vec::with_capacity(a.n_rows + 1);
    row_ptr.push(0);
    let mut col_idx = Vec::new();

    for i in 0..a.n_rows {
        accumulate_row(accumulator.as_mut(), i, a, b);
        col_idx.extend(accumulator.extract());
        row_ptr.push(col_idx.len());
    }

    Ok(BoolMatrixCSR {
        n_rows: a.n_rows,
        n_cols: b.n_cols,
        row_ptr,
        col_idx,
    })
}

/// Computes A × B and unions the product into `acc`
///
/// Accumulate form: entries already present in `acc` are kept, entries of
/// the product are added. Each output row seeds its accumulator with the
/// target's existing row before the contraction, so the union costs no
/// extra pass. The operands are read-only; `acc` is only replaced after
/// every shape check has passed, so a failed call leaves it untouched.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] unless `a.n_cols == b.n_rows` and
/// `acc` has shape `(a.n_rows, b.n_cols)`.
pub fn multiply_into(a: &BoolMatrixCSR, b: &BoolMatrixCSR, acc: &mut BoolMatrixCSR) -> Result<()> {
    multiply_into_with_config(a, b, acc, &BooleConfig::default())
}

/// [`multiply_into`] with explicit tuning
pub fn multiply_into_with_config(
    a: &BoolMatrixCSR,
    b: &BoolMatrixCSR,
    acc: &mut BoolMatrixCSR,
    config: &BooleConfig,
) -> Result<()> {
    check_inner_dim(a, b)?;
    if acc.shape() != (a.n_rows, b.n_cols) {
        return Err(Error::ShapeMismatch {
            op: "multiply_into",
            lhs: (a.n_rows, b.n_cols),
            rhs: acc.shape(),
        });
    }

    let mut accumulator = create_accumulator(b.n_cols, config.dense_accum_threshold);

    let mut row_ptr = Vec::with_capacity(a.n_rows + 1);
    row_ptr.push(0);
    let mut col_idx = Vec::with_capacity(acc.nnz());

    for i in 0..a.n_rows {
        for col in acc.row_iter(i) {
            accumulator.accumulate(col);
        }
        accumulate_row(accumulator.as_mut(), i, a, b);
        col_idx.extend(accumulator.extract());
        row_ptr.push(col_idx.len());
    }

    acc.row_ptr = row_ptr;
    acc.col_idx = col_idx;
    Ok(())
}

fn check_inner_dim(a: &BoolMatrixCSR, b: &BoolMatrixCSR) -> Result<()> {
    if a.n_cols != b.n_rows {
        return Err(Error::ShapeMismatch {
            op: "multiply",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_against_relation_composition() {
        // A relates 0->1, 1->2; B relates 1->0, 2->2.
        // Composition: 0->0 (via 1), 1->2 (via 2).
        let a = BoolMatrixCSR::from_lists(3, 3, &[0, 1], &[1, 2]).unwrap();
        let b = BoolMatrixCSR::from_lists(3, 3, &[1, 2], &[0, 2]).unwrap();

        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.to_list(), vec![(0, 0), (1, 2)]);
    }

    #[test]
    fn test_identity_multiplication() {
        let identity = BoolMatrixCSR::identity(4);
        let m = BoolMatrixCSR::from_lists(4, 4, &[0, 2, 3], &[3, 1, 0]).unwrap();

        assert_eq!(multiply(&identity, &m).unwrap(), m);
        assert_eq!(multiply(&m, &identity).unwrap(), m);
    }

    #[test]
    fn test_multiply_rectangular() {
        // (2x3) × (3x2)
        let a = BoolMatrixCSR::from_lists(2, 3, &[0, 0, 1], &[0, 2, 1]).unwrap();
        let b = BoolMatrixCSR::from_lists(3, 2, &[0, 1, 2], &[1, 0, 1]).unwrap();

        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.to_list(), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_both_accumulator_paths_agree() {
        let a = BoolMatrixCSR::from_lists(4, 4, &[0, 0, 1, 2, 3], &[1, 3, 2, 0, 3]).unwrap();
        let b = BoolMatrixCSR::from_lists(4, 4, &[0, 1, 2, 3, 3], &[2, 0, 1, 1, 3]).unwrap();

        let dense_path = BooleConfig {
            dense_accum_threshold: usize::MAX,
            ..BooleConfig::default()
        };
        let sort_path = BooleConfig {
            dense_accum_threshold: 0,
            ..BooleConfig::default()
        };

        assert_eq!(
            multiply_with_config(&a, &b, &dense_path).unwrap(),
            multiply_with_config(&a, &b, &sort_path).unwrap(),
        );
    }

    #[test]
    fn test_multiply_into_unions_existing_entries() {
        let a = BoolMatrixCSR::from_lists(2, 2, &[0], &[1]).unwrap();
        let b = BoolMatrixCSR::from_lists(2, 2, &[1], &[0]).unwrap();

        // Product is {(0,0)}; acc already holds {(1,1)}.
        let mut acc = BoolMatrixCSR::from_lists(2, 2, &[1], &[1]).unwrap();
        multiply_into(&a, &b, &mut acc).unwrap();

        assert_eq!(acc.to_list(), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_multiply_into_zero_target_equals_multiply() {
        let a = BoolMatrixCSR::from_lists(3, 3, &[0, 1, 2], &[1, 2, 0]).unwrap();
        let b = BoolMatrixCSR::from_lists(3, 3, &[0, 1, 2], &[2, 0, 1]).unwrap();

        let mut acc = BoolMatrixCSR::zeros(3, 3);
        multiply_into(&a, &b, &mut acc).unwrap();

        assert_eq!(acc, multiply(&a, &b).unwrap());
    }

    #[test]
    fn test_shape_mismatch_errors() {
        let a = BoolMatrixCSR::zeros(2, 3);
        let b = BoolMatrixCSR::zeros(2, 3);
        assert!(matches!(
            multiply(&a, &b),
            Err(Error::ShapeMismatch { op: "multiply", .. })
        ));

        let b = BoolMatrixCSR::zeros(3, 4);
        let mut acc = BoolMatrixCSR::zeros(2, 2);
        let before = acc.clone();
        assert!(matches!(
            multiply_into(&a, &b, &mut acc),
            Err(Error::ShapeMismatch {
                op: "multiply_into",
                ..
            })
        ));
        // Failed accumulate leaves the target untouched
        assert_eq!(acc, before);
    }
}
