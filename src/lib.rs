#![forbid(unsafe_code)]
//! PrimeFactor benchmark
//!
//! Measures how fast a platform can count primes by trial division. The counting payload, the repeated-run
//! harness and its statistics live in the `primefactor_core` crate; this crate provides the command-line
//! front end that times the payload and prints the results.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a logic error, use `.expect("INVARIANT: reason")` with a clear
//!   explanation.

pub mod cli;
pub mod version;

pub use primefactor_core::{MAX_LIMIT, RunOutcome, RunStatistics, count_primes, run_many};
