//! Compressed Sparse Row (CSR) boolean matrix implementation
//!
//! Over the OR/AND semiring a stored entry can only be `true`, so the CSR
//! layout drops the values array entirely: a column index being present in
//! a row is the entry. Absent means `false`.

use std::fmt;
use std::ops::{Bound, RangeBounds};

use rand::Rng;

use crate::error::{Error, Result};
use crate::matrix::coords::CoordList;

/// A sparse boolean matrix in Compressed Sparse Row (CSR) format
///
/// The format stores the matrix using two arrays:
/// - row_ptr: Array of size n_rows + 1 containing indices into col_idx
/// - col_idx: Array of size nnz containing column indices of present entries
///
/// Canonical invariant: `row_ptr` is monotone with `row_ptr[n_rows] == nnz`,
/// and column indices are strictly increasing within each row. Every
/// constructor and operation in this crate maintains the invariant, which
/// makes derived equality coincide with set equality of coordinates.
#[derive(Clone, PartialEq, Eq)]
pub struct BoolMatrixCSR {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row pointers (size: n_rows + 1)
    /// row_ptr[i] is the index in col_idx where row i starts
    /// row_ptr[n_rows] is equal to nnz
    pub row_ptr: Vec<usize>,

    /// Column indices of present entries (size: nnz), strictly increasing
    /// within each row
    pub col_idx: Vec<usize>,
}

impl BoolMatrixCSR {
    /// Creates a new CSR matrix from raw arrays
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - row_ptr.len() must be n_rows + 1
    /// - row_ptr must be monotone with row_ptr[n_rows] == col_idx.len()
    /// - column indices must be in bounds and strictly increasing per row
    pub fn new(n_rows: usize, n_cols: usize, row_ptr: Vec<usize>, col_idx: Vec<usize>) -> Self {
        assert_eq!(row_ptr.len(), n_rows + 1, "row_ptr.len() must be n_rows + 1");
        assert_eq!(
            row_ptr[n_rows],
            col_idx.len(),
            "row_ptr[n_rows] must equal col_idx.len()"
        );
        assert!(
            row_ptr.windows(2).all(|w| w[0] <= w[1]),
            "row_ptr must be monotone"
        );

        for i in 0..n_rows {
            let row = &col_idx[row_ptr[i]..row_ptr[i + 1]];
            for &col in row {
                assert!(col < n_cols, "Column index {} out of bounds (n_cols = {})", col, n_cols);
            }
            assert!(
                row.windows(2).all(|w| w[0] < w[1]),
                "column indices must be strictly increasing within row {}",
                i
            );
        }

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
        }
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            row_ptr: vec![0; n_rows + 1],
            col_idx: Vec::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        Self {
            n_rows: n,
            n_cols: n,
            row_ptr: (0..=n).collect(),
            col_idx: (0..n).collect(),
        }
    }

    /// Builds a matrix from a normalized coordinate set
    ///
    /// The [`CoordList`] is already validated, deduplicated and sorted, so
    /// construction is a single linear fill.
    pub fn from_coords(coords: CoordList) -> Self {
        let (n_rows, n_cols) = coords.shape();
        let pairs = coords.into_pairs();

        let mut row_counts = vec![0; n_rows];
        for &(row, _) in &pairs {
            row_counts[row] += 1;
        }

        let row_ptr = crate::utils::exclusive_scan(&row_counts);
        let col_idx = pairs.into_iter().map(|(_, col)| col).collect();

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
        }
    }

    /// Builds a matrix from raw row/column index lists
    ///
    /// Convenience over [`CoordList::new`] + [`from_coords`](Self::from_coords)
    /// with neither caller assertion: the lists are deduplicated and sorted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if any pair violates the shape.
    pub fn from_lists(
        n_rows: usize,
        n_cols: usize,
        rows: &[usize],
        cols: &[usize],
    ) -> Result<Self> {
        let coords = CoordList::new(n_rows, n_cols, rows, cols, false, false)?;
        Ok(Self::from_coords(coords))
    }

    /// Generates a random matrix with roughly the given entry density
    ///
    /// Samples `density * n_rows * n_cols` coordinates uniformly; collisions
    /// are merged, so the realized nnz can fall short of the target.
    pub fn random<R: Rng>(n_rows: usize, n_cols: usize, density: f64, rng: &mut R) -> Self {
        if n_rows == 0 || n_cols == 0 {
            return Self::zeros(n_rows, n_cols);
        }

        let target = (density * (n_rows * n_cols) as f64).round() as usize;
        let mut pairs = Vec::with_capacity(target);
        for _ in 0..target {
            pairs.push((rng.gen_range(0..n_rows), rng.gen_range(0..n_cols)));
        }
        pairs.sort_unstable();
        pairs.dedup();

        let mut row_counts = vec![0; n_rows];
        for &(row, _) in &pairs {
            row_counts[row] += 1;
        }

        Self {
            n_rows,
            n_cols,
            row_ptr: crate::utils::exclusive_scan(&row_counts),
            col_idx: pairs.into_iter().map(|(_, col)| col).collect(),
        }
    }

    /// Returns the shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns the number of present entries in the matrix
    pub fn nnz(&self) -> usize {
        self.col_idx.len()
    }

    /// Tests whether the entry at (row, col) is present
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] on indices outside the shape.
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        self.check_index(row, col)?;
        Ok(self.row(row).binary_search(&col).is_ok())
    }

    /// Sets or clears the entry at (row, col)
    ///
    /// `value = true` inserts the entry if absent; `value = false` removes
    /// it if present. Both directions are idempotent. A failed call leaves
    /// the matrix untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] on indices outside the shape.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        self.check_index(row, col)?;

        let start = self.row_ptr[row];
        match self.col_idx[start..self.row_ptr[row + 1]].binary_search(&col) {
            Ok(pos) if !value => {
                self.col_idx.remove(start + pos);
                for ptr in &mut self.row_ptr[row + 1..] {
                    *ptr -= 1;
                }
            }
            Err(pos) if value => {
                self.col_idx.insert(start + pos, col);
                for ptr in &mut self.row_ptr[row + 1..] {
                    *ptr += 1;
                }
            }
            _ => {} // Already in the requested state
        }
        Ok(())
    }

    /// Returns an iterator over the column indices of present entries in
    /// row i, in ascending order
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        assert!(i < self.n_rows, "Row index out of bounds");
        self.row(i).iter().copied()
    }

    /// Returns a lazy, restartable iterator over all present (row, col)
    /// pairs in canonical order: ascending row, then ascending column
    pub fn iter(&self) -> Nonzeros<'_> {
        Nonzeros {
            matrix: self,
            row: 0,
            idx: 0,
        }
    }

    /// Returns the coordinate set as (row, col) pairs in canonical order
    pub fn to_list(&self) -> Vec<(usize, usize)> {
        self.iter().collect()
    }

    /// Returns the coordinate set as parallel row/column lists in canonical
    /// order
    pub fn to_lists(&self) -> (Vec<usize>, Vec<usize>) {
        let mut rows = Vec::with_capacity(self.nnz());
        let mut cols = Vec::with_capacity(self.nnz());
        for (row, col) in self.iter() {
            rows.push(row);
            cols.push(col);
        }
        (rows, cols)
    }

    /// Extracts the induced sub-matrix over the given row and column ranges
    ///
    /// Ranges may be partial (`..`, `2..`, `..3`); coordinates in the result
    /// are re-based so the range origin becomes (0, 0). An end bound before
    /// the start yields an empty axis rather than an error, matching slice
    /// semantics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if either range reaches outside the
    /// shape.
    pub fn extract<R, C>(&self, row_range: R, col_range: C) -> Result<Self>
    where
        R: RangeBounds<usize>,
        C: RangeBounds<usize>,
    {
        let (row_start, row_end) = resolve_range(&row_range, self.n_rows, "row")?;
        let (col_start, col_end) = resolve_range(&col_range, self.n_cols, "column")?;

        let n_rows = row_end.saturating_sub(row_start);
        let n_cols = col_end.saturating_sub(col_start);

        let mut row_ptr = Vec::with_capacity(n_rows + 1);
        row_ptr.push(0);
        let mut col_idx = Vec::new();

        for i in row_start..row_start + n_rows {
            let row = self.row(i);
            let lo = row.partition_point(|&c| c < col_start);
            let hi = row.partition_point(|&c| c < col_end);
            col_idx.extend(row[lo..hi].iter().map(|&c| c - col_start));
            row_ptr.push(col_idx.len());
        }

        Ok(Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
        })
    }

    /// The column indices of row i as a slice
    pub(crate) fn row(&self, i: usize) -> &[usize] {
        &self.col_idx[self.row_ptr[i]..self.row_ptr[i + 1]]
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.n_rows {
            return Err(Error::OutOfBounds {
                axis: "row",
                index: row,
                size: self.n_rows,
            });
        }
        if col >= self.n_cols {
            return Err(Error::OutOfBounds {
                axis: "column",
                index: col,
                size: self.n_cols,
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BoolMatrixCSR {
    type Item = (usize, usize);
    type IntoIter = Nonzeros<'a>;

    fn into_iter(self) -> Nonzeros<'a> {
        self.iter()
    }
}

/// Lazy iterator over the present (row, col) pairs of a [`BoolMatrixCSR`]
/// in canonical order
pub struct Nonzeros<'a> {
    matrix: &'a BoolMatrixCSR,
    row: usize,
    idx: usize,
}

impl Iterator for Nonzeros<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.idx >= self.matrix.col_idx.len() {
            return None;
        }
        // Skip over empty rows until idx falls inside the current row.
        while self.idx >= self.matrix.row_ptr[self.row + 1] {
            self.row += 1;
        }
        let item = (self.row, self.matrix.col_idx[self.idx]);
        self.idx += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.matrix.col_idx.len() - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Nonzeros<'_> {}

fn resolve_range<R: RangeBounds<usize>>(
    range: &R,
    size: usize,
    axis: &'static str,
) -> Result<(usize, usize)> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s + 1,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e + 1,
        Bound::Excluded(&e) => e,
        Bound::Unbounded => size,
    };

    if start > size {
        return Err(Error::OutOfBounds {
            axis,
            index: start,
            size,
        });
    }
    if end > size {
        return Err(Error::OutOfBounds {
            axis,
            index: end,
            size,
        });
    }
    Ok((start, end))
}

impl fmt::Debug for BoolMatrixCSR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BoolMatrixCSR {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let max_rows_to_print = 5.min(self.n_rows);

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let row = self.row(i);

                if row.is_empty() {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 8.min(row.len());

                    for &col in &row[..max_elements] {
                        write!(f, "{} ", col)?;
                    }

                    if row.len() > max_elements {
                        write!(f, "... ({} more)", row.len() - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n_rows > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
