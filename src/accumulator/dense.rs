//! Dense accumulator for boolean sparse matrix multiplication
//!
//! Uses an occupancy bitmap sized to the output width. Because the
//! semiring's addition is OR, marking a column twice changes nothing and
//! no values array exists to update.

use crate::accumulator::Accumulator;
use crate::matrix::BoolMatrixCSR;

/// Dense accumulator for a single row of a boolean multiply
///
/// Tracks which output columns have been hit with a flag array, plus the
/// list of touched columns so reset and extraction cost is proportional to
/// the row's population rather than the matrix width.
pub struct DenseAccumulator {
    /// Flags marking which columns are present in the current row
    occupied: Vec<bool>,

    /// Columns touched since the last reset, in hit order
    touched: Vec<usize>,
}

impl DenseAccumulator {
    /// Create a new dense accumulator for the given output width
    pub fn new(n_cols: usize) -> Self {
        Self {
            occupied: vec![false; n_cols],
            touched: Vec::new(),
        }
    }
}

impl Accumulator for DenseAccumulator {
    fn reset(&mut self) {
        for &col in &self.touched {
            self.occupied[col] = false;
        }
        self.touched.clear();
    }

    fn accumulate(&mut self, col: usize) {
        if !self.occupied[col] {
            self.occupied[col] = true;
            self.touched.push(col);
        }
    }

    fn extract(&mut self) -> Vec<usize> {
        self.touched.sort_unstable();
        for &col in &self.touched {
            self.occupied[col] = false;
        }
        std::mem::take(&mut self.touched)
    }
}

/// Multiply a single row of matrix A with matrix B using a dense accumulator
///
/// Returns the sorted column indices of the result row.
pub fn multiply_row_dense(a_row: usize, a: &BoolMatrixCSR, b: &BoolMatrixCSR) -> Vec<usize> {
    let mut accumulator = DenseAccumulator::new(b.n_cols);
    crate::accumulator::accumulate_row(&mut accumulator, a_row, a, b);
    accumulator.extract()
}
