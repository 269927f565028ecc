//! Timed prime counting, the payload handed to the run harness.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use primefactor_core::{RunOutcome, RunReporter, count_primes, run_many};

use super::config::BenchmarkConfig;
use super::display::{format_duration, group_thousands};

/// Count the primes below `limit` once, printing progress and the result.
///
/// Returns the elapsed wall-clock time of the count alone.
pub fn timed_count(limit: u64) -> Duration {
    print!(
        "Benchmarking primality test for values between 1 and {} ... ",
        group_thousands(limit)
    );
    let _ = io::stdout().flush();

    let start = Instant::now();
    let prime_count = count_primes(limit);
    let elapsed = start.elapsed();

    println!(
        "{} primes found in {}",
        group_thousands(prime_count),
        format_duration(elapsed)
    );
    elapsed
}

/// Run the configured benchmark through the harness.
pub fn run_benchmark<R: RunReporter + ?Sized>(config: &BenchmarkConfig, reporter: &mut R) -> RunOutcome {
    tracing::info!(limit = config.limit, runs = config.runs, "starting benchmark");
    let limit = config.limit;
    run_many(|| timed_count(limit), config.runs, reporter)
}
