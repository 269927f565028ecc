//! Provide the pure, deterministic core of the PrimeFactor benchmark.
//!
//! The crate holds the two components the CLI composes:
//! - [`primes`]: trial-division prime counting (the benchmark payload), and
//! - [`harness`]: the repeated-run driver plus [`stats`] for aggregating timings.
//!
//! ## Notes
//!
//! - This is a “core” crate: **no IO**, no global state. Anything user-visible flows through the
//!   [`harness::RunReporter`] trait, which the CLI implements.
//! - Everything is single-threaded and synchronous. A harness invocation owns its accumulator.

pub mod errors;
pub mod harness;
pub mod primes;
pub mod stats;

pub use errors::StatsError;
pub use harness::{RunOutcome, RunReporter, run_many};
pub use primes::{MAX_LIMIT, clamp_limit, count_primes, is_prime};
pub use stats::RunStatistics;
