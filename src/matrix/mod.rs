// Matrix data structures and operations

pub mod config;
pub mod conversion;
pub mod coords;
pub mod csr;
pub mod ewise;
pub mod kronecker;
pub mod multiply;
pub mod reduce;

pub use config::{BooleConfig, DEFAULT_DENSE_ACCUM_THRESHOLD};
pub use coords::CoordList;
pub use csr::{BoolMatrixCSR, Nonzeros};
pub use ewise::ewise_add;
pub use kronecker::kronecker;
pub use multiply::{multiply, multiply_into, multiply_into_with_config, multiply_with_config};
pub use reduce::reduce;
