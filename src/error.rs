//! Error types for boole operations

use thiserror::Error;

/// Result type alias using boole's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in boole operations
///
/// Every failure is synchronous and atomic: a failed call leaves all
/// matrices involved exactly as they were before the call.
#[derive(Error, Debug)]
pub enum Error {
    /// Index outside the matrix shape
    #[error("{axis} index {index} out of bounds (size {size})")]
    OutOfBounds {
        /// Axis the index refers to, "row" or "column"
        axis: &'static str,
        /// The offending index
        index: usize,
        /// Size of that axis
        size: usize,
    },

    /// Operand shapes incompatible for the requested operation
    #[error("{op}: operand shapes {lhs:?} and {rhs:?} are incompatible")]
    ShapeMismatch {
        /// The operation that rejected the operands
        op: &'static str,
        /// Shape of the left operand, (rows, cols)
        lhs: (usize, usize),
        /// Shape of the right operand, (rows, cols)
        rhs: (usize, usize),
    },

    /// Malformed exchange-format text
    #[error("malformed matrix text at line {line}: {reason}")]
    Format {
        /// 1-based line number in the input text
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// I/O failure while reading or writing an exchange file
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
