//! Console presentation: number grouping, duration formatting, and the harness reporter.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::Duration;

use primefactor_core::RunStatistics;
use primefactor_core::harness::{INVALID_RUNS_MESSAGE, RunReporter};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Group digits in threes with `,` (`10000000` → `10,000,000`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a duration starting from its largest non-zero unit, e.g. `2m 5s 30ms`.
///
/// Durations under a millisecond are shown as fractional milliseconds (`0.250ms`).
pub fn format_duration(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let days = total_secs / SECS_PER_DAY;
    let hours = (total_secs % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let secs = total_secs % SECS_PER_MINUTE;
    let millis = elapsed.subsec_millis();

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s {millis}ms")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s {millis}ms")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s {millis}ms")
    } else if secs > 0 {
        format!("{secs}s {millis}ms")
    } else if millis > 0 {
        format!("{millis}ms")
    } else {
        format!("{:.3}ms", elapsed.as_secs_f64() * 1_000.0)
    }
}

/// One-line summary of a multi-run batch.
pub fn summary_line(stats: &RunStatistics) -> String {
    format!(
        "Time to compute each run {} ~ {}, median {}, average {}, standard deviation {}, mode {}",
        format_duration(stats.min),
        format_duration(stats.max),
        format_duration(stats.median),
        format_duration(stats.average),
        format_duration(stats.std_dev),
        format_duration(stats.mode),
    )
}

/// Version and platform banner for `--version`.
pub fn version_banner(version: &str) -> String {
    let mut banner = String::new();

    let build = if cfg!(debug_assertions) { " debug build" } else { "" };
    let _ = writeln!(banner, "primefactor version {version}{build}");
    let _ = writeln!(
        banner,
        "Running on {} ({}), {} bit process.",
        std::env::consts::OS,
        std::env::consts::ARCH,
        usize::BITS
    );
    let processors = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    let _ = writeln!(banner, "Available parallelism: {processors} processors.");

    banner
}

/// Reporter that writes harness progress to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl RunReporter for ConsoleReporter {
    fn on_invalid_runs(&mut self, _runs: i64) {
        println!("{INVALID_RUNS_MESSAGE}");
    }

    fn on_batch_start(&mut self, runs: u64) {
        println!("Benchmarking {runs} runs, please wait...");
    }

    fn on_run_start(&mut self, run: u64) {
        print!("Run {run} ");
        let _ = io::stdout().flush();
    }

    fn on_batch_complete(&mut self, stats: &RunStatistics) {
        println!("{}", summary_line(stats));
    }
}
