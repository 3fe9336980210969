//! Transitive closure by repeated squaring
//!
//! The closure of an adjacency matrix is computed as a fixpoint of the
//! engine's own primitives: square the current reachability matrix, union
//! the product back in, and stop when nothing new appears. Reachable-pair
//! count can double per iteration, so convergence typically takes
//! O(log diameter) rounds and is hard-bounded by rows·cols growth.

use crate::error::{Error, Result};
use crate::matrix::{multiply_into, BoolMatrixCSR};

/// Computes the transitive closure of a square adjacency matrix
///
/// The driver closes over exactly what multiplication and union produce:
/// it adds no self-loops of its own, so the result is reflexive only where
/// the input already was.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the matrix is not square. Closure
/// of a square matrix cannot fail; the loop always converges.
pub fn transitive_closure(a: &BoolMatrixCSR) -> Result<BoolMatrixCSR> {
    if a.n_rows != a.n_cols {
        return Err(Error::ShapeMismatch {
            op: "transitive_closure",
            lhs: a.shape(),
            rhs: a.shape(),
        });
    }

    let mut closure = a.clone();
    loop {
        // next = closure ∪ closure²
        let mut next = closure.clone();
        multiply_into(&closure, &closure, &mut next)?;

        // The union only ever grows, so an unchanged entry count means an
        // unchanged coordinate set: the fixpoint.
        if next.nnz() == closure.nnz() {
            return Ok(closure);
        }
        closure = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_with_self_loop() {
        // Cycle 0 -> 1 -> 2 -> 0 plus a self-loop at 3: the closure holds
        // all 9 pairs among {0, 1, 2} plus (3, 3) and nothing else.
        let a =
            BoolMatrixCSR::from_lists(4, 4, &[0, 1, 2, 3], &[1, 2, 0, 3]).unwrap();
        let t = transitive_closure(&a).unwrap();

        let mut expected = vec![(3, 3)];
        for i in 0..3 {
            for j in 0..3 {
                expected.push((i, j));
            }
        }
        expected.sort_unstable();

        assert_eq!(t.to_list(), expected);
    }

    #[test]
    fn test_chain_reaches_forward_only() {
        // 0 -> 1 -> 2: closure adds 0 -> 2, nothing points backwards.
        let a = BoolMatrixCSR::from_lists(3, 3, &[0, 1], &[1, 2]).unwrap();
        let t = transitive_closure(&a).unwrap();

        assert_eq!(t.to_list(), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_closure_is_idempotent() {
        let a =
            BoolMatrixCSR::from_lists(5, 5, &[0, 1, 3, 4], &[1, 2, 4, 0]).unwrap();
        let once = transitive_closure(&a).unwrap();
        let twice = transitive_closure(&once).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_matrix_is_its_own_closure() {
        let a = BoolMatrixCSR::zeros(4, 4);
        assert_eq!(transitive_closure(&a).unwrap(), a);
    }

    #[test]
    fn test_non_square_rejected() {
        let a = BoolMatrixCSR::zeros(3, 4);
        assert!(matches!(
            transitive_closure(&a),
            Err(Error::ShapeMismatch {
                op: "transitive_closure",
                ..
            })
        ));
    }
}
