//! Shared benchmark utilities and standard sizes for cacheprobe
//! experiments.
//!
//! This module provides:
//! - Standard power-of-two sequence lengths for consistent comparison
//!   across experiments
//! - Criterion configuration presets scaled to the working-set size
//! - Label helpers for benchmark IDs
//!
//! All experiments draw their data through
//! `cacheprobe_experiments::data`, with [`DEFAULT_SEED`] so every run of
//! a group observes the identical sequence.

use std::time::Duration;

pub use cacheprobe_experiments::data::DEFAULT_SEED;

// ============================================================================
// Standard Sequence Lengths
// ============================================================================

/// Primary sequence length for the single-size experiments (2^20).
pub const SEQ_LEN: usize = 1 << 20;

/// Largest swept length (2^25); sweeps slice prefixes of one allocation
/// of this size.
pub const SWEEP_MAX_LEN: usize = 1 << 25;

/// Swept lengths for the cache-transition view: 2^20 through 2^25.
pub const SWEEP_LENS: [usize; 6] = [
    1 << 20,
    1 << 21,
    1 << 22,
    1 << 23,
    1 << 24,
    1 << 25,
];

// ============================================================================
// Criterion Configuration
// ============================================================================

/// Default measurement time for benchmarks.
pub const DEFAULT_MEASUREMENT_TIME: Duration = Duration::from_secs(5);

/// Extended measurement time for large working sets.
pub const EXTENDED_MEASUREMENT_TIME: Duration = Duration::from_secs(8);

/// Warm-up time before measurements begin.
pub const WARMUP_TIME: Duration = Duration::from_secs(2);

/// Default sample size for benchmarks.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Reduced sample size for long-running benchmarks.
pub const REDUCED_SAMPLE_SIZE: usize = 30;

/// Minimum sample size for the slowest configurations.
pub const MINIMUM_SAMPLE_SIZE: usize = 10;

// ============================================================================
// Benchmark Group Names
// ============================================================================

/// Group name for the E01 predicate-return-type experiment.
pub const GROUP_E01_BOOL_GATE: &str = "e01_bool_gate";

/// Group name for the E02 accumulator-width experiment.
pub const GROUP_E02_ACCUMULATOR_WIDTH: &str = "e02_accumulator_width";

/// Group name for the E03 false-sharing experiment.
pub const GROUP_E03_FALSE_SHARING: &str = "e03_false_sharing";

// ============================================================================
// Helper Functions
// ============================================================================

/// Returns an appropriate sample size for a given sequence length.
#[inline]
#[must_use]
pub const fn sample_size_for_len(len: usize) -> usize {
    match len {
        0..=0x10_0000 => DEFAULT_SAMPLE_SIZE,       // up to 2^20
        0x10_0001..=0x80_0000 => REDUCED_SAMPLE_SIZE, // up to 2^23
        _ => MINIMUM_SAMPLE_SIZE,
    }
}

/// Returns an appropriate measurement time for a given sequence length.
#[inline]
#[must_use]
pub const fn measurement_time_for_len(len: usize) -> Duration {
    match len {
        0..=0x80_0000 => DEFAULT_MEASUREMENT_TIME,
        _ => EXTENDED_MEASUREMENT_TIME,
    }
}

/// Formats a power-of-two length for benchmark IDs, e.g. `2^20`.
#[must_use]
pub fn format_pow2(len: usize) -> String {
    if len.is_power_of_two() {
        format!("2^{}", len.trailing_zeros())
    } else {
        len.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_lens_are_powers_of_two() {
        for len in SWEEP_LENS {
            assert!(len.is_power_of_two());
        }
        assert_eq!(SWEEP_LENS[0], SEQ_LEN);
        assert_eq!(*SWEEP_LENS.last().unwrap(), SWEEP_MAX_LEN);
    }

    #[test]
    fn test_format_pow2() {
        assert_eq!(format_pow2(1 << 20), "2^20");
        assert_eq!(format_pow2(1 << 25), "2^25");
        assert_eq!(format_pow2(1000), "1000");
    }

    #[test]
    fn test_sample_size_scales_down() {
        assert_eq!(sample_size_for_len(1 << 20), DEFAULT_SAMPLE_SIZE);
        assert_eq!(sample_size_for_len(1 << 22), REDUCED_SAMPLE_SIZE);
        assert_eq!(sample_size_for_len(1 << 25), MINIMUM_SAMPLE_SIZE);
    }
}
