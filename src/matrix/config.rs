//! Configuration for the boole engine

/// Default output width up to which the dense accumulator is used
///
/// A flag array of this size stays comfortably inside L1/L2 on every
/// target we care about.
pub const DEFAULT_DENSE_ACCUM_THRESHOLD: usize = 4096;

/// Tuning knobs for multiplication
///
/// The engine behaves identically under every configuration; only the
/// work performed per row differs. `BooleConfig::default()` is always
/// usable; no global setup of any kind is required.
#[derive(Debug, Clone)]
pub struct BooleConfig {
    /// Output widths up to this use the dense accumulator; wider outputs
    /// fall back to the sort-based accumulator
    pub dense_accum_threshold: usize,

    /// Number of worker threads the parallel multiply may use; values of
    /// 0 or 1 make [`multiply_parallel`](crate::parallel::multiply_parallel)
    /// run the sequential kernel
    pub n_threads: usize,
}

impl Default for BooleConfig {
    fn default() -> Self {
        Self {
            dense_accum_threshold: DEFAULT_DENSE_ACCUM_THRESHOLD,
            n_threads: num_cpus::get(),
        }
    }
}

impl BooleConfig {
    /// A configuration that keeps every operation on the calling thread
    pub fn sequential() -> Self {
        Self {
            n_threads: 1,
            ..Self::default()
        }
    }
}
