//! Command-line driver: self-checked timed sieve runs and range queries.

use std::process;
use std::time::Instant;

use clap::Parser;
use itertools::Itertools;
use prime_sieve::prelude::*;

/// Sieve primes, time the construction, and answer range queries.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Inclusive upper bound to sieve to.
    #[arg(long, default_value_t = 2_147_483_647)]
    limit: u64,

    /// Segment block size in bytes.
    #[arg(long, default_value_t = DEFAULT_BLOCK_BYTES)]
    block_bytes: usize,

    /// Number of timed construction runs.
    #[arg(long, default_value_t = 5)]
    runs: u32,

    /// Lower bound of the query range.
    #[arg(long, default_value_t = 0)]
    from: u64,

    /// Upper bound of the query range; supplying one switches to query mode.
    #[arg(long)]
    to: Option<u64>,

    /// Print the primes of the query range, space separated.
    #[arg(long)]
    print: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let config = SegmentConfig {
        block_bytes: args.block_bytes,
    };

    match args.to {
        Some(to) => run_query(&args, &config, to),
        None => run_timed(&args, &config),
    }
}

fn run_query(
    args: &Args,
    config: &SegmentConfig,
    to: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.from > args.limit || to > args.limit {
        eprintln!(
            "query range {}..={to} exceeds sieve limit {}",
            args.from, args.limit
        );
        process::exit(2);
    }
    let sieve = Sieve::try_segmented(args.limit, config)?;
    let query = sieve.query();
    println!(
        "{} primes in {}..={to}",
        query.count_primes(args.from, to),
        args.from
    );
    if args.print {
        println!("{}", query.primes(args.from, to).format(" "));
    }
    Ok(())
}

fn run_timed(args: &Args, config: &SegmentConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut failed = false;
    println!("full sieve self-check:");
    failed |= report(&check_full()?);
    println!("segmented sieve self-check:");
    failed |= report(&check_segmented(config)?);
    if failed {
        process::exit(1);
    }

    for run in 1..=args.runs {
        let start = Instant::now();
        let sieve = Sieve::try_segmented(args.limit, config)?;
        let elapsed = start.elapsed();
        println!(
            "run {run}: sieved to {} in {:.3} s ({} primes)",
            args.limit,
            elapsed.as_secs_f64(),
            sieve.prime_count()
        );
    }
    Ok(())
}

/// Prints one verdict row per table entry; returns true if any mismatched.
fn report(outcomes: &[CheckOutcome]) -> bool {
    let mut failed = false;
    for outcome in outcomes {
        let verdict = if outcome.passed() { "ok" } else { "MISMATCH" };
        println!(
            "  pi({}) = {} (expected {}) {verdict}",
            outcome.limit, outcome.counted, outcome.expected
        );
        failed |= !outcome.passed();
    }
    failed
}
