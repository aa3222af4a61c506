//! cacheprobe-experiments: dataset provider and criterion experiments.
//!
//! This crate contains the reproducible sample-sequence generator and the
//! micro-experiments (E01-E03) that exercise the isolation harness in
//! `cacheprobe-core`.
//!
//! # Modules
//!
//! - [`data`] - Seeded uniform sample generators, materialized once per
//!   process and shared read-only by every comparison variant
//!
//! # Example
//!
//! ```
//! use cacheprobe_experiments::data::{generate_uniform, SeedPolicy};
//!
//! let samples = generate_uniform(1024, SeedPolicy::Fixed(42));
//! assert_eq!(samples.len(), 1024);
//! assert_eq!(samples, generate_uniform(1024, SeedPolicy::Fixed(42)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod data;
