//! cacheprobe command-line interface
//!
//! Each subcommand is an independent experiment entry point: the
//! contended-counter demo, the one-shot counting comparison, and the
//! size sweep. Output is a transient report, one line per
//! (variant[, size]) pair: label, microseconds per call, and bytes
//! throughput where it is defined.

pub mod args;
pub mod error;

pub use error::{CliError, Result};

use std::hint::black_box;

use clap::Parser;

use cacheprobe_core::config::{ContentionConfig, SequenceLen, SizeSweep};
use cacheprobe_core::count::{
    count_adapted, count_std, is_even, is_even_at, BoolGated, TypePreserving,
};
use cacheprobe_core::measure::{self, Measurement};
use cacheprobe_core::sharing::{CellStride, CounterCells};
use cacheprobe_experiments::data::{generate_uniform, SeedPolicy};

use args::{Args, Command, LayoutArg};

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::FalseSharing {
            threads,
            iters,
            layout,
        } => run_false_sharing(threads, iters, layout),
        Command::Count {
            len,
            seed,
            entropy,
            calls,
        } => run_count(len, seed_policy(seed, entropy), calls),
        Command::Sweep {
            min,
            max,
            factor,
            seed,
            entropy,
        } => run_sweep(min, max, factor, seed_policy(seed, entropy)),
    }
}

const fn seed_policy(seed: u64, entropy: bool) -> SeedPolicy {
    if entropy {
        SeedPolicy::Entropy
    } else {
        SeedPolicy::Fixed(seed)
    }
}

// ============================================================================
// false-sharing
// ============================================================================

fn run_false_sharing(threads: usize, iters: u64, layout: LayoutArg) -> Result<()> {
    let config = ContentionConfig::new(threads, iters)?;

    println!("false sharing: {threads} threads, {iters} increments each");
    println!();

    let strides: &[CellStride] = match layout {
        LayoutArg::Tight => &[CellStride::Natural],
        LayoutArg::Padded => &[CellStride::CacheLine],
        LayoutArg::Both => &[CellStride::Natural, CellStride::CacheLine],
    };

    for &stride in strides {
        let mut cells = CounterCells::new(config.threads(), stride)?;

        let m = measure::time(layout_label(stride), 1, || {
            cells.reset();
            cells.run_contended(config.iters_per_thread());
            black_box(cells.sum())
        });

        assert_eq!(
            cells.sum(),
            config.expected_sum(),
            "layout must never change the count"
        );

        let millis = m.elapsed.as_secs_f64() * 1e3;
        let mops = if m.elapsed.is_zero() {
            None
        } else {
            Some(config.expected_sum() as f64 / m.elapsed.as_secs_f64() / 1e6)
        };
        match mops {
            Some(rate) => println!(
                "{:<8} ({:>2} B stride) {:>10.1} ms {:>9.1} Mops/s  sum={}",
                m.label,
                stride.bytes(),
                millis,
                rate,
                cells.sum()
            ),
            None => println!(
                "{:<8} ({:>2} B stride) {:>10.1} ms  sum={}",
                m.label,
                stride.bytes(),
                millis,
                cells.sum()
            ),
        }
    }

    Ok(())
}

const fn layout_label(stride: CellStride) -> &'static str {
    match stride {
        CellStride::Natural => "tight",
        CellStride::CacheLine => "padded",
    }
}

// ============================================================================
// count
// ============================================================================

fn run_count(len: usize, policy: SeedPolicy, calls: u32) -> Result<()> {
    let len = SequenceLen::new(len)?.get();
    let data = generate_uniform(len, policy);
    let bytes = len * std::mem::size_of::<u32>();

    // Identical counts are the precondition for comparing timings.
    let expected = count_std(&data, is_even);
    let gated_count: isize = count_adapted(&data, &BoolGated::new(is_even));
    let preserved_count: isize = count_adapted(&data, &TypePreserving::new(is_even_at::<isize>));
    assert_eq!(gated_count as usize, expected);
    assert_eq!(preserved_count as usize, expected);

    println!("count: {len} elements, {expected} even");
    println!();

    let gated = BoolGated::new(is_even);
    print_row(
        &measure::time("bool_gated", calls, || {
            count_adapted::<_, isize, _>(&data, &gated)
        }),
        bytes,
    );

    let preserving = TypePreserving::new(is_even_at::<isize>);
    print_row(
        &measure::time("type_preserving", calls, || {
            count_adapted::<_, isize, _>(&data, &preserving)
        }),
        bytes,
    );

    let preserving_u32 = TypePreserving::new(is_even_at::<u32>);
    print_row(
        &measure::time("acc_u32", calls, || {
            count_adapted::<_, u32, _>(&data, &preserving_u32)
        }),
        bytes,
    );

    print_row(
        &measure::time("std_filter_count", calls, || count_std(&data, is_even)),
        bytes,
    );

    Ok(())
}

// ============================================================================
// sweep
// ============================================================================

fn run_sweep(min: usize, max: usize, factor: usize, policy: SeedPolicy) -> Result<()> {
    let sweep = SizeSweep::new(min, max, factor)?;

    // One allocation at the cap; every swept size is a prefix of it.
    let sequence = generate_uniform(sweep.max(), policy);

    println!(
        "sweep: {} -> {} step x{}",
        sweep.min(),
        sweep.max(),
        sweep.factor()
    );

    for len in sweep.sizes() {
        let data = &sequence[..len];
        let bytes = len * std::mem::size_of::<u32>();
        let calls = calls_for_len(len);

        println!();
        println!("-- {len} elements --");

        let preserving_isize = TypePreserving::new(is_even_at::<isize>);
        print_row(
            &measure::time("acc_isize", calls, || {
                count_adapted::<_, isize, _>(data, &preserving_isize)
            }),
            bytes,
        );

        let preserving_u32 = TypePreserving::new(is_even_at::<u32>);
        print_row(
            &measure::time("acc_u32", calls, || {
                count_adapted::<_, u32, _>(data, &preserving_u32)
            }),
            bytes,
        );

        print_row(
            &measure::time("std_filter_count", calls, || count_std(data, is_even)),
            bytes,
        );
    }

    Ok(())
}

/// Fewer timed calls for working sets past the last cache level.
const fn calls_for_len(len: usize) -> u32 {
    if len <= 1 << 22 {
        20
    } else {
        8
    }
}

// ============================================================================
// report formatting
// ============================================================================

fn print_row(m: &Measurement, bytes_per_call: usize) {
    match m.gib_per_second(bytes_per_call) {
        Some(gib) => println!(
            "{:<18} {:>12.2} us {:>8.2} GiB/s",
            m.label,
            m.micros_per_call(),
            gib
        ),
        None => println!("{:<18} {:>12.2} us {:>8}", m.label, m.micros_per_call(), "-"),
    }
}
