//! Sort-based accumulator for boolean sparse matrix multiplication
//!
//! Collects raw column hits in an unsorted list, then sorts and
//! deduplicates at extraction. Preferable to the dense accumulator when
//! the output is wide and the expected row population is low.

use crate::accumulator::Accumulator;
use crate::matrix::BoolMatrixCSR;

/// Sort-based accumulator for a single row of a boolean multiply
pub struct SortAccumulator {
    /// Unsorted column hits for the current row, duplicates included
    cols: Vec<usize>,
}

impl SortAccumulator {
    /// Create a new sort-based accumulator
    ///
    /// # Arguments
    ///
    /// * `initial_capacity` - Initial capacity for the hit list
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            cols: Vec::with_capacity(initial_capacity),
        }
    }
}

impl Accumulator for SortAccumulator {
    fn reset(&mut self) {
        self.cols.clear();
    }

    fn accumulate(&mut self, col: usize) {
        self.cols.push(col);
    }

    fn extract(&mut self) -> Vec<usize> {
        self.cols.sort_unstable();
        self.cols.dedup();
        std::mem::take(&mut self.cols)
    }
}

/// Multiply a single row of matrix A with matrix B using a sort-based
/// accumulator
///
/// Returns the sorted column indices of the result row.
pub fn multiply_row_sort(a_row: usize, a: &BoolMatrixCSR, b: &BoolMatrixCSR) -> Vec<usize> {
    // Conservative capacity estimate from the operand row population
    let nnz_a_row = a.row_ptr[a_row + 1] - a.row_ptr[a_row];
    let mut accumulator = SortAccumulator::new(nnz_a_row * 2);

    crate::accumulator::accumulate_row(&mut accumulator, a_row, a, b);
    accumulator.extract()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_accumulator_empty() {
        let mut accumulator = SortAccumulator::new(5);
        assert_eq!(accumulator.extract(), Vec::<usize>::new());
    }

    #[test]
    fn test_sort_accumulator_sorts_and_dedups() {
        let mut accumulator = SortAccumulator::new(5);

        accumulator.accumulate(4);
        accumulator.accumulate(1);
        accumulator.accumulate(4);
        accumulator.accumulate(1);
        accumulator.accumulate(0);

        assert_eq!(accumulator.extract(), vec![0, 1, 4]);
    }

    #[test]
    fn test_sort_accumulator_reset() {
        let mut accumulator = SortAccumulator::new(5);

        accumulator.accumulate(1);
        accumulator.reset();

        accumulator.accumulate(3);
        assert_eq!(accumulator.extract(), vec![3]);
    }

    #[test]
    fn test_multiply_row_sort_matches_dense() {
        let a = BoolMatrixCSR::from_lists(2, 3, &[0, 0, 1], &[0, 2, 1]).unwrap();
        let b =
            BoolMatrixCSR::from_lists(3, 4, &[0, 1, 2, 2], &[3, 0, 1, 3]).unwrap();

        for row in 0..2 {
            assert_eq!(
                multiply_row_sort(row, &a, &b),
                crate::accumulator::multiply_row_dense(row, &a, &b),
            );
        }
    }
}
