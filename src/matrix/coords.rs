//! Coordinate-list normalization for matrix construction
//!
//! A [`CoordList`] is the validated, canonical form of caller-supplied
//! (row, column) index pairs: bounds-checked against a shape, deduplicated,
//! and sorted by row then column. It is consumed by
//! [`BoolMatrixCSR::from_coords`](crate::matrix::BoolMatrixCSR::from_coords)
//! and discarded; it is not a matrix representation of its own.

use crate::error::{Error, Result};

/// A canonical, deduplicated coordinate set for a fixed shape
///
/// Invariant: pairs are sorted by row then column with no duplicates, and
/// every pair is within the shape bounds.
#[derive(Debug, Clone)]
pub struct CoordList {
    n_rows: usize,
    n_cols: usize,
    pairs: Vec<(usize, usize)>,
}

impl CoordList {
    /// Normalizes raw row/column index lists into a canonical coordinate set
    ///
    /// Bounds checking is always performed; the two flags are performance
    /// escape hatches that let a caller skip work it has already done:
    ///
    /// * `no_duplicates` - the caller asserts the pairs are duplicate-free,
    ///   so the deduplication pass is skipped. The assertion is trusted.
    /// * `is_sorted` - the caller asserts the pairs are already sorted by
    ///   row then column. A linear verification pass replaces the sort; if
    ///   the assertion turns out to be false the pairs are sorted anyway,
    ///   so the resulting set is identical either way.
    ///
    /// # Arguments
    ///
    /// * `n_rows`, `n_cols` - The target shape
    /// * `rows`, `cols` - Equal-length index lists; `(rows[i], cols[i])` is
    ///   one coordinate
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if any pair violates the shape.
    ///
    /// # Panics
    ///
    /// Panics if `rows` and `cols` have different lengths.
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        rows: &[usize],
        cols: &[usize],
        no_duplicates: bool,
        is_sorted: bool,
    ) -> Result<Self> {
        assert_eq!(
            rows.len(),
            cols.len(),
            "rows.len() must equal cols.len()"
        );

        for (&row, &col) in rows.iter().zip(cols) {
            if row >= n_rows {
                return Err(Error::OutOfBounds {
                    axis: "row",
                    index: row,
                    size: n_rows,
                });
            }
            if col >= n_cols {
                return Err(Error::OutOfBounds {
                    axis: "column",
                    index: col,
                    size: n_cols,
                });
            }
        }

        let mut pairs: Vec<(usize, usize)> =
            rows.iter().copied().zip(cols.iter().copied()).collect();

        let sorted = is_sorted && pairs.windows(2).all(|w| w[0] <= w[1]);
        if !sorted {
            pairs.sort_unstable();
        }
        if !no_duplicates {
            pairs.dedup();
        }

        Ok(Self {
            n_rows,
            n_cols,
            pairs,
        })
    }

    /// The shape the coordinates were validated against, (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Number of coordinates in the canonical set
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if the set holds no coordinates
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The canonical pairs, sorted by row then column
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Consumes the list, returning the canonical pairs
    pub fn into_pairs(self) -> Vec<(usize, usize)> {
        self.pairs
    }
}
