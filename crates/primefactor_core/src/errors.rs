//! Error types shared by the core.

use thiserror::Error;

/// Errors from aggregating run timings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// Statistics are undefined for an empty set of samples.
    #[error("cannot compute statistics over an empty series of runs")]
    EmptySeries,
}
