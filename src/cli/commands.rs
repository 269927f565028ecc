//! CLI command implementations
//!
//! All command functions return `CliResult<()>` instead of printing errors themselves. Error
//! reporting happens in the top-level `run()`.

use clap::CommandFactory;

use crate::version::PRIMEFACTOR_VERSION;

use super::benchmark::run_benchmark;
use super::config::BenchmarkConfig;
use super::display::{ConsoleReporter, version_banner};
use super::{Cli, CliError, CliResult};

/// `--benchmark [limit [runs]]`
pub fn benchmark(config: &BenchmarkConfig) -> CliResult<()> {
    let mut reporter = ConsoleReporter::new();
    let outcome = run_benchmark(config, &mut reporter);
    tracing::debug!(?outcome, "benchmark finished");
    Ok(())
}

/// `--version`
pub fn version() -> CliResult<()> {
    print!("{}", version_banner(PRIMEFACTOR_VERSION));
    Ok(())
}

/// Usage text, shown when no mode is given.
pub fn help() -> CliResult<()> {
    Cli::command().print_help()?;
    Ok(())
}

/// Modes that are recognised but have no implementation.
pub fn unimplemented(name: &'static str) -> CliResult<()> {
    Err(CliError::Unimplemented(name))
}
