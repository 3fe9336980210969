//! Plain-text exchange format for boolean sparse matrices
//!
//! The format is a coordinate listing: a header line `rows cols nnz`
//! followed by one `row col` line per present entry, rows ascending then
//! columns ascending, 0-based. Blank lines and `%`-prefixed comment lines
//! are tolerated on import, matching the matrix-market files the fixture
//! corpus was recorded in.
//!
//! Round-trip law: `from_text(&to_text(&m))` reproduces `m` exactly for
//! any matrix.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::matrix::{BoolMatrixCSR, CoordList};

/// Serializes a matrix to the exchange text format
///
/// The output is deterministic: entries are emitted in canonical order.
pub fn to_text(matrix: &BoolMatrixCSR) -> String {
    // Header plus roughly 2 digits-and-separator per coordinate line
    let mut out = String::with_capacity(16 + matrix.nnz() * 8);

    // Writes into a String are infallible
    let _ = writeln!(out, "{} {} {}", matrix.n_rows, matrix.n_cols, matrix.nnz());

    for (row, col) in matrix.iter() {
        let _ = writeln!(out, "{} {}", row, col);
    }

    out
}

/// Parses a matrix from the exchange text format
///
/// # Errors
///
/// Returns [`Error::Format`] on a malformed header, a malformed coordinate
/// line, an entry count that disagrees with the header, or coordinates
/// outside the declared shape.
pub fn from_text(text: &str) -> Result<BoolMatrixCSR> {
    let mut lines = content_lines(text);

    let (line_no, header) = lines.next().ok_or_else(|| Error::Format {
        line: 1,
        reason: "missing header line".into(),
    })?;

    let header_fields = parse_fields(header, 3, line_no, "rows cols nnz")?;
    let (n_rows, n_cols, nnz) = (header_fields[0], header_fields[1], header_fields[2]);

    let mut rows = Vec::with_capacity(nnz);
    let mut cols = Vec::with_capacity(nnz);

    for (line_no, line) in lines {
        if rows.len() == nnz {
            return Err(Error::Format {
                line: line_no,
                reason: format!("trailing data after {} declared entries", nnz),
            });
        }

        let fields = parse_fields(line, 2, line_no, "row col")?;
        let (row, col) = (fields[0], fields[1]);

        if row >= n_rows || col >= n_cols {
            return Err(Error::Format {
                line: line_no,
                reason: format!(
                    "coordinate ({}, {}) outside declared shape {} x {}",
                    row, col, n_rows, n_cols
                ),
            });
        }
        rows.push(row);
        cols.push(col);
    }

    if rows.len() != nnz {
        return Err(Error::Format {
            line: 1,
            reason: format!("header declares {} entries, found {}", nnz, rows.len()),
        });
    }

    let coords = CoordList::new(n_rows, n_cols, &rows, &cols, false, false)?;
    Ok(BoolMatrixCSR::from_coords(coords))
}

/// Writes a matrix to a file in the exchange text format
pub fn write_text_file<P: AsRef<Path>>(matrix: &BoolMatrixCSR, path: P) -> Result<()> {
    fs::write(path, to_text(matrix))?;
    Ok(())
}

/// Reads a matrix from a file in the exchange text format
pub fn read_text_file<P: AsRef<Path>>(path: P) -> Result<BoolMatrixCSR> {
    from_text(&fs::read_to_string(path)?)
}

/// Yields (1-based line number, trimmed content) for lines that carry data
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('%'))
}

fn parse_fields(line: &str, expected: usize, line_no: usize, shape: &str) -> Result<Vec<usize>> {
    let fields: Vec<usize> = line
        .split_whitespace()
        .map(|tok| {
            tok.parse().map_err(|_| Error::Format {
                line: line_no,
                reason: format!("expected unsigned integer, found {:?}", tok),
            })
        })
        .collect::<Result<_>>()?;

    if fields.len() != expected {
        return Err(Error::Format {
            line: line_no,
            reason: format!("expected \"{}\", found {} fields", shape, fields.len()),
        });
    }
    Ok(fields)
}
