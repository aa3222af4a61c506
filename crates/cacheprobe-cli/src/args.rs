//! CLI argument parsing.
//!
//! Each experiment group is its own subcommand with the reference
//! defaults baked in, so `cacheprobe <group>` reproduces the published
//! configuration and every knob can be overridden individually.
//!
//! # Examples
//!
//! ```bash
//! # Contention demo with the reference configuration (4 threads, 2^26)
//! cacheprobe false-sharing
//!
//! # Two threads, both layouts
//! cacheprobe false-sharing --threads 2
//!
//! # Counting variants on the default 2^20-element sequence
//! cacheprobe count
//!
//! # Fresh entropy instead of the fixed seed
//! cacheprobe count --entropy
//!
//! # Cache-transition sweep, 2^20..2^25 doubling
//! cacheprobe sweep
//! cacheprobe sweep --min 1048576 --max 33554432 --factor 4
//! ```

use clap::{Parser, Subcommand, ValueEnum};

use cacheprobe_core::config::{
    DEFAULT_ITERS_PER_THREAD, DEFAULT_SEQUENCE_LEN, DEFAULT_THREADS, MAX_SEQUENCE_LEN,
    MIN_SEQUENCE_LEN,
};
use cacheprobe_experiments::data::DEFAULT_SEED;

/// cacheprobe: micro-experiments for false sharing and auto-vectorization
#[derive(Parser, Debug)]
#[command(name = "cacheprobe")]
#[command(author, version, about = "Cache-line contention and vectorization micro-experiments")]
#[command(long_about = "cacheprobe runs two families of controlled micro-experiments: \
    counting loops whose predicate return type and accumulator width are the only \
    variables, and contended per-thread counters whose cache-line layout is the only \
    variable. Each subcommand prints one calibrated figure per variant.")]
pub struct Args {
    /// The experiment group to run
    #[command(subcommand)]
    pub command: Command,
}

/// Counter-cell layouts selectable from the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    /// Cells packed at their natural 8-byte width.
    Tight,
    /// Cells padded to a full 64-byte cache line.
    Padded,
    /// Run both layouts back to back.
    Both,
}

/// Available experiment groups.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Contended per-thread counters, tight vs padded layout
    #[command(about = "False-sharing contention demo")]
    FalseSharing {
        /// Number of worker threads, one counter cell each
        #[arg(long, default_value_t = DEFAULT_THREADS)]
        threads: usize,

        /// Increments performed by each thread
        #[arg(long, default_value_t = DEFAULT_ITERS_PER_THREAD)]
        iters: u64,

        /// Which cell layout(s) to run
        #[arg(long, value_enum, default_value = "both")]
        layout: LayoutArg,
    },

    /// Counting variants on one shared sequence
    #[command(about = "Predicate-type and accumulator-width counting variants")]
    Count {
        /// Sequence length; a power of two between 2^20 and 2^25
        #[arg(long, default_value_t = DEFAULT_SEQUENCE_LEN)]
        len: usize,

        /// Seed for the reproducible sequence
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Seed from OS entropy instead (not reproducible across runs)
        #[arg(long, conflicts_with = "seed")]
        entropy: bool,

        /// Timed calls per variant
        #[arg(long, default_value_t = 20)]
        calls: u32,
    },

    /// Counting variants across a geometric size sweep
    #[command(about = "Accumulator-width variants swept across working-set sizes")]
    Sweep {
        /// Smallest swept length; a power of two
        #[arg(long, default_value_t = MIN_SEQUENCE_LEN)]
        min: usize,

        /// Largest swept length (cap); a power of two
        #[arg(long, default_value_t = MAX_SEQUENCE_LEN)]
        max: usize,

        /// Multiplicative step between sizes; a power of two >= 2
        #[arg(long, default_value_t = 2)]
        factor: usize,

        /// Seed for the reproducible sequence
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Seed from OS entropy instead (not reproducible across runs)
        #[arg(long, conflicts_with = "seed")]
        entropy: bool,
    },
}
