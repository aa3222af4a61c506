//! A minimal timing driver for one-shot experiment reports.
//!
//! The criterion benches are the real measurement engine; this module
//! serves the CLI, which wants a single calibrated figure per variant
//! without criterion's sampling machinery. It still respects the two
//! distinct anti-optimization duties: results of measured calls are
//! observed through [`std::hint::black_box`] so the computation cannot be
//! discarded, and nothing here touches the optimization of the measured
//! code itself.
//!
//! Throughput is a derived metric and undefined for zero work, so
//! [`Measurement::bytes_per_second`] returns `None` instead of dividing;
//! callers omit the figure rather than print a NaN.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// The timing result of repeatedly invoking one labeled variant.
#[derive(Debug, Clone)]
pub struct Measurement {
    /// Variant label, as shown in the report.
    pub label: String,
    /// Total elapsed wall-clock time across all calls.
    pub elapsed: Duration,
    /// Number of timed calls.
    pub calls: u32,
}

impl Measurement {
    /// Mean time per call in microseconds.
    #[must_use]
    pub fn micros_per_call(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e6 / f64::from(self.calls)
    }

    /// Bytes processed per second, given the bytes one call touches.
    ///
    /// Returns `None` when no bytes were processed or no time elapsed;
    /// both make the ratio meaningless.
    #[must_use]
    pub fn bytes_per_second(&self, bytes_per_call: usize) -> Option<f64> {
        if bytes_per_call == 0 || self.elapsed.is_zero() {
            return None;
        }
        let total_bytes = bytes_per_call as f64 * f64::from(self.calls);
        Some(total_bytes / self.elapsed.as_secs_f64())
    }

    /// Same ratio scaled to GiB per second, for display.
    #[must_use]
    pub fn gib_per_second(&self, bytes_per_call: usize) -> Option<f64> {
        self.bytes_per_second(bytes_per_call)
            .map(|bps| bps / (1024.0 * 1024.0 * 1024.0))
    }
}

/// Runs `f` once unrecorded to warm caches and branch predictors, then
/// times `calls` invocations, observing every result.
///
/// # Panics
///
/// Panics when `calls` is zero; a measurement with no calls has no
/// defined per-call time.
pub fn time<T>(label: &str, calls: u32, mut f: impl FnMut() -> T) -> Measurement {
    assert!(calls > 0, "at least one timed call is required");

    black_box(f());

    let start = Instant::now();
    for _ in 0..calls {
        black_box(f());
    }
    let elapsed = start.elapsed();

    Measurement {
        label: label.to_string(),
        elapsed,
        calls,
    }
}
