//! Error types for cacheprobe-core.
//!
//! Configuration mistakes (sizes that are not powers of two, zero thread
//! counts, malformed sweeps) are programmer errors and must surface before
//! any measurement starts, so every validating constructor in this crate
//! returns one of these values instead of failing mid-run.

use thiserror::Error;

/// The main error type for cacheprobe configuration and setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A size parameter was expected to be a power of two but is not.
    #[error("size {value} is not a power of two")]
    NotPowerOfTwo {
        /// The offending value.
        value: usize,
    },

    /// A sequence length falls outside the supported range.
    ///
    /// Comparison groups are calibrated for working sets between `min` and
    /// `max` elements; anything else would measure a different regime than
    /// the one the experiment is designed for.
    #[error("sequence length {len} outside supported range [{min}, {max}]")]
    LengthOutOfRange {
        /// The requested length.
        len: usize,
        /// Smallest supported length.
        min: usize,
        /// Largest supported length.
        max: usize,
    },

    /// The contention experiment needs at least one worker thread.
    #[error("thread count must be at least 1, got {threads}")]
    InvalidThreadCount {
        /// The requested thread count.
        threads: usize,
    },

    /// The per-thread increment count must be at least one.
    #[error("per-thread iteration count must be at least 1")]
    InvalidIterations,

    /// A size sweep was constructed with inconsistent bounds or step.
    #[error("invalid size sweep: {reason}")]
    InvalidSweep {
        /// Description of the inconsistency.
        reason: &'static str,
    },
}

/// Convenience type alias for Results using the cacheprobe Error type.
pub type Result<T> = std::result::Result<T, Error>;
