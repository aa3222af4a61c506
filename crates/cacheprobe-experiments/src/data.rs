//! Sample-sequence generators for reproducible experiments.
//!
//! Every comparison group runs against one materialized sequence of
//! uniform random `u32` samples. Generating it once and sharing it
//! read-only across all variants removes the only cross-variant variance
//! that isn't the variable under test: the data itself.
//!
//! # Seed policies
//!
//! - [`SeedPolicy::Fixed`]: same seed, same sequence. This is the default
//!   for benches so that relative timings stay comparable run to run.
//! - [`SeedPolicy::Entropy`]: seeded from the operating system. Maximizes
//!   realism of the value distribution at the cost of reproducibility
//!   across runs; within one run the sequence is still materialized once,
//!   so variants remain comparable to each other.
//!
//! # Example
//!
//! ```
//! use cacheprobe_experiments::data::{generate_uniform, SeedPolicy, DEFAULT_SEED};
//!
//! let a = generate_uniform(1000, SeedPolicy::Fixed(DEFAULT_SEED));
//! let b = generate_uniform(1000, SeedPolicy::Fixed(DEFAULT_SEED));
//! assert_eq!(a, b);
//! ```

use std::sync::OnceLock;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default seed for reproducible sequence generation.
pub const DEFAULT_SEED: u64 = 42;

/// How the sample generator is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Deterministic seed; identical sequences across runs.
    Fixed(u64),
    /// Operating-system entropy; a fresh sequence every run.
    Entropy,
}

/// Generates `len` samples drawn uniformly from the full `u32` range.
///
/// The only failure mode is allocation failure, which aborts the process;
/// there is no partial result.
#[must_use]
pub fn generate_uniform(len: usize, policy: SeedPolicy) -> Vec<u32> {
    let mut rng = match policy {
        SeedPolicy::Fixed(seed) => ChaCha8Rng::seed_from_u64(seed),
        SeedPolicy::Entropy => ChaCha8Rng::from_os_rng(),
    };

    let mut samples = Vec::with_capacity(len);
    for _ in 0..len {
        samples.push(rng.random::<u32>());
    }
    samples
}

/// Returns the process-lifetime shared sequence, materializing it on the
/// first call with [`DEFAULT_SEED`].
///
/// All callers in one process observe the identical allocation; the
/// sequence is never copied or regenerated. Every later call must request
/// the same length as the first.
///
/// # Panics
///
/// Panics when called with a length different from the one the sequence
/// was first materialized with.
#[must_use]
pub fn shared_sequence(len: usize) -> &'static [u32] {
    static SEQUENCE: OnceLock<Vec<u32>> = OnceLock::new();
    let sequence = SEQUENCE.get_or_init(|| generate_uniform(len, SeedPolicy::Fixed(DEFAULT_SEED)));
    assert_eq!(
        sequence.len(),
        len,
        "shared sequence length is fixed at first materialization"
    );
    sequence
}
