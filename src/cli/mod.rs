//! CLI module for PrimeFactor
//!
//! This module provides the command-line interface for the benchmark.
//!
//! ## Flags
//!
//! - `--help` / `-h` - Show usage
//! - `--version` / `-v` - Show version and platform information
//! - `--benchmark [limit [runs]]` - Time prime counting below `limit`, `runs` times
//!
//! ## Modules
//!
//! - `benchmark` - Timed prime counting payload
//! - `commands` - Command implementations
//! - `config` - Benchmark configuration and lenient value parsing
//! - `display` - Number/duration formatting and the console reporter
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>`; only the top-level `run()` reports errors.
//! The process always exits with status 0.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod benchmark;
pub mod commands;
pub mod config;
pub mod display;

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};

use clap::{ArgGroup, Parser};
use thiserror::Error;

use config::BenchmarkConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Error type for CLI operations.
///
/// None of these change the exit status; `run()` prints them and returns.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing stopped. Also carries clap's `--help` output.
    #[error(transparent)]
    Args(#[from] clap::Error),

    #[error("{0} is not implemented in this version.")]
    Unimplemented(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const OWL: &str = concat!("\n", r" /\_/\", "\n", " (O,O)\n", " (:::)\n", r#"--"-"--"#, "\n");

const BENCHMARK_HELP: &str = "\
Platform performance measurement of primality testing for values from 1 to LIMIT.
The default limit is 10,000,000 and the maximum is 4,294,967,296; a limit of 0 or less
selects the maximum. Primes found earlier are not cached. The default number of runs is 1.
With more than one run, each run executes in turn and the minimum, maximum, median,
average, standard deviation and mode of the run times are reported.";

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Prime counting benchmark
#[derive(Parser, Debug)]
#[command(name = "primefactor")]
#[command(about = "Prime counting benchmark using trial division", long_about = None)]
#[command(disable_version_flag = true)]
#[command(before_help = OWL)]
#[command(group(ArgGroup::new("mode").args(["show_version", "benchmark", "benchmark2", "benchmark3"])))]
pub struct Cli {
    /// Display the program version and platform information
    #[arg(short = 'v', long = "version")]
    pub show_version: bool,

    /// Benchmark primality testing of values from 1 to LIMIT
    #[arg(
        long,
        num_args = 0..=2,
        value_names = ["LIMIT", "RUNS"],
        allow_negative_numbers = true,
        long_help = BENCHMARK_HELP
    )]
    pub benchmark: Option<Vec<String>>,

    /// Parallel variant of --benchmark (not implemented)
    #[arg(long, num_args = 0..=2, value_names = ["LIMIT", "RUNS"], allow_negative_numbers = true, hide = true)]
    pub benchmark2: Option<Vec<String>>,

    /// Caching variant of --benchmark (not implemented)
    #[arg(long, num_args = 0..=2, value_names = ["LIMIT", "RUNS"], allow_negative_numbers = true, hide = true)]
    pub benchmark3: Option<Vec<String>>,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Help,
    Version,
    Benchmark(BenchmarkConfig),
    Unimplemented(&'static str),
}

impl Cli {
    /// Resolve the selected mode. At most one is set; clap enforces that through the `mode` group.
    pub fn mode(&self) -> Mode {
        if self.show_version {
            Mode::Version
        } else if let Some(values) = &self.benchmark {
            Mode::Benchmark(BenchmarkConfig::from_values(values))
        } else if self.benchmark2.is_some() {
            Mode::Unimplemented("--benchmark2")
        } else if self.benchmark3.is_some() {
            Mode::Unimplemented("--benchmark3")
        } else {
            Mode::Help
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// Errors are printed here. The exit status stays 0 in every case.
pub fn run() {
    if let Err(e) = execute(env::args_os()) {
        report_error(e, &mut io::stdout());
    }
}

/// Print an error returned by `execute`. Advisories go to `out` like the rest of the benchmark output.
fn report_error(err: CliError, out: &mut impl Write) {
    match err {
        CliError::Args(err) => {
            // clap routes --help to stdout and real parse errors to stderr
            let _ = err.print();
        }
        other => {
            let _ = writeln!(out, "{other}");
        }
    }
}

/// Parse `args` and execute the selected mode.
pub fn execute<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let mode = cli.mode();
    tracing::debug!(?mode, "resolved command line");

    match mode {
        Mode::Help => commands::help(),
        Mode::Version => commands::version(),
        Mode::Benchmark(config) => commands::benchmark(&config),
        Mode::Unimplemented(name) => commands::unimplemented(name),
    }
}

// ============================================================================
// Tests
// ============================================================================
