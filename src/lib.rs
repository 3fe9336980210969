//! # boole: Sparse Boolean Linear Algebra
//!
//! boole is a sparse matrix engine over the boolean semiring, where
//! addition is logical OR and multiplication is logical AND. Matrices
//! store only their `true` entries; absence means `false`, which makes
//! the additive identity free and every operation a set computation.
//!
//! ## Overview
//!
//! The engine provides the GraphBLAS-style core for working with boolean
//! relations and graph adjacency:
//!
//! - Construction from coordinate lists, with bounds checking and
//!   deduplication handled by [`CoordList`]
//! - Element-wise addition (set union), matrix multiplication with an
//!   accumulate form, Kronecker product and row reduction
//! - Transpose, sub-matrix extraction, canonical-order iteration and set
//!   equality on the store itself
//! - Transitive closure of an adjacency matrix by repeated squaring
//! - A plain-text coordinate exchange format for fixtures
//!
//! Rows of a multiply are independent, so a parallel variant
//! ([`multiply_parallel`]) fans the contraction out with rayon; its result
//! is identical to the sequential definition.
//!
//! ## Usage
//!
//! Build two relations and compose them:
//!
//! ```
//! use boole::{multiply, BoolMatrixCSR};
//!
//! let a = BoolMatrixCSR::from_lists(3, 3, &[0, 1], &[1, 2]).unwrap();
//! let b = BoolMatrixCSR::from_lists(3, 3, &[1, 2], &[2, 0]).unwrap();
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c.to_list(), vec![(0, 2), (1, 0)]);
//! ```
//!
//! Close an adjacency matrix over reachability:
//!
//! ```
//! use boole::{transitive_closure, BoolMatrixCSR};
//!
//! let cycle = BoolMatrixCSR::from_lists(3, 3, &[0, 1, 2], &[1, 2, 0]).unwrap();
//! let reachable = transitive_closure(&cycle).unwrap();
//! assert_eq!(reachable.nnz(), 9);
//! ```

pub mod accumulator;
pub mod closure;
pub mod error;
pub mod io;
pub mod matrix;
pub mod parallel;
pub mod utils;

// Re-export primary components
pub use accumulator::{create_accumulator, multiply_row_dense, multiply_row_sort, Accumulator};
pub use closure::transitive_closure;
pub use error::{Error, Result};
pub use io::{from_text, read_text_file, to_text, write_text_file};
pub use matrix::{
    ewise_add, kronecker, multiply, multiply_into, multiply_into_with_config,
    multiply_with_config, reduce, BoolMatrixCSR, BooleConfig, CoordList, Nonzeros,
    DEFAULT_DENSE_ACCUM_THRESHOLD,
};
pub use parallel::multiply_parallel;
pub use utils::{from_sprs, to_sprs};

/// Version information for the boole library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
