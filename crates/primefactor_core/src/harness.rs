//! Repeated-run benchmark harness.
//!
//! [`run_many`] invokes a timed action a requested number of times, strictly one after another, and
//! aggregates the elapsed durations. Output is delegated to a [`RunReporter`] so the harness itself
//! performs no IO.

use std::time::Duration;

use crate::stats::{RunAccumulator, RunStatistics};

/// Advisory reported when fewer than one run is requested.
pub const INVALID_RUNS_MESSAGE: &str = "Number of benchmark runs must be greater than zero.";

/// Receives progress and results from [`run_many`].
///
/// Implement this trait to customize the output format.
pub trait RunReporter {
    /// Called instead of running anything when `runs < 1`.
    fn on_invalid_runs(&mut self, runs: i64);

    /// Called once before a multi-run batch starts.
    fn on_batch_start(&mut self, _runs: u64) {}

    /// Called before each run of a multi-run batch (1-based).
    fn on_run_start(&mut self, _run: u64) {}

    /// Called after each run with its elapsed time.
    fn on_run_complete(&mut self, _run: u64, _elapsed: Duration) {}

    /// Called once after all runs of a multi-run batch.
    fn on_batch_complete(&mut self, stats: &RunStatistics);
}

/// Result of one harness invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// `runs < 1`: nothing was run.
    Skipped,
    /// Exactly one run; no statistics were computed.
    Single(Duration),
    /// More than one run, aggregated.
    Batch(RunStatistics),
}

impl RunOutcome {
    /// The aggregated statistics, present only for [`RunOutcome::Batch`].
    pub fn statistics(&self) -> Option<&RunStatistics> {
        match self {
            RunOutcome::Batch(stats) => Some(stats),
            _ => None,
        }
    }
}

/// Run `action` `runs` times and aggregate the durations it returns.
///
/// ## Parameters
/// - `action`: the timed payload; any zero-argument operation returning its elapsed time.
/// - `runs`: number of sequential invocations requested.
/// - `reporter`: receives the advisory, per-run progress and the final statistics.
///
/// ## Returns
/// - [`RunOutcome::Skipped`] when `runs < 1` (the advisory is reported, `action` is never called).
/// - [`RunOutcome::Single`] when `runs == 1` (one call, no aggregation).
/// - [`RunOutcome::Batch`] otherwise, with min/max/average over all runs.
///
/// ## Notes
/// - Runs never overlap: each completes before the next begins. There is no retry and no cancellation.
#[tracing::instrument(level = "debug", skip_all, fields(runs = runs))]
pub fn run_many<F, R>(mut action: F, runs: i64, reporter: &mut R) -> RunOutcome
where
    F: FnMut() -> Duration,
    R: RunReporter + ?Sized,
{
    if runs < 1 {
        tracing::warn!(runs, "benchmark requested with fewer than one run");
        reporter.on_invalid_runs(runs);
        return RunOutcome::Skipped;
    }

    if runs == 1 {
        let elapsed = action();
        tracing::debug!(elapsed_secs = elapsed.as_secs_f64(), "single run complete");
        reporter.on_run_complete(1, elapsed);
        return RunOutcome::Single(elapsed);
    }

    let runs = runs.unsigned_abs();
    reporter.on_batch_start(runs);

    let mut acc = RunAccumulator::new();
    for run in 1..=runs {
        reporter.on_run_start(run);
        let elapsed = action();
        tracing::debug!(run, elapsed_secs = elapsed.as_secs_f64(), "run complete");
        acc.record(elapsed);
        reporter.on_run_complete(run, elapsed);
    }

    let stats = acc
        .finish()
        .expect("INVARIANT: runs > 1 so at least one sample was recorded");
    reporter.on_batch_complete(&stats);
    RunOutcome::Batch(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        invalid: Vec<i64>,
        batch_starts: Vec<u64>,
        run_starts: Vec<u64>,
        completed: Vec<(u64, Duration)>,
        batches: usize,
    }

    impl RunReporter for Recorder {
        fn on_invalid_runs(&mut self, runs: i64) {
            self.invalid.push(runs);
        }

        fn on_batch_start(&mut self, runs: u64) {
            self.batch_starts.push(runs);
        }

        fn on_run_start(&mut self, run: u64) {
            self.run_starts.push(run);
        }

        fn on_run_complete(&mut self, run: u64, elapsed: Duration) {
            self.completed.push((run, elapsed));
        }

        fn on_batch_complete(&mut self, _stats: &RunStatistics) {
            self.batches += 1;
        }
    }

    #[test]
    fn test_zero_runs_is_skipped() {
        let mut calls = 0;
        let mut reporter = Recorder::default();
        let outcome = run_many(
            || {
                calls += 1;
                Duration::ZERO
            },
            0,
            &mut reporter,
        );
        assert_eq!(outcome, RunOutcome::Skipped);
        assert!(outcome.statistics().is_none());
        assert_eq!(calls, 0);
        assert_eq!(reporter.invalid, vec![0]);
        assert!(reporter.completed.is_empty());
    }

    #[test]
    fn test_single_run_skips_statistics() {
        let mut calls = 0;
        let mut reporter = Recorder::default();
        let outcome = run_many(
            || {
                calls += 1;
                Duration::from_millis(5)
            },
            1,
            &mut reporter,
        );
        assert_eq!(outcome, RunOutcome::Single(Duration::from_millis(5)));
        assert!(outcome.statistics().is_none());
        assert_eq!(calls, 1);
        assert!(reporter.batch_starts.is_empty());
        assert!(reporter.run_starts.is_empty());
        assert_eq!(reporter.batches, 0);
    }

    #[test]
    fn test_batch_runs_in_order() {
        let mut next = 0u64;
        let mut reporter = Recorder::default();
        let outcome = run_many(
            || {
                next += 1;
                Duration::from_millis(next * 10)
            },
            3,
            &mut reporter,
        );

        assert_eq!(reporter.batch_starts, vec![3]);
        assert_eq!(reporter.run_starts, vec![1, 2, 3]);
        assert_eq!(
            reporter.completed,
            vec![
                (1, Duration::from_millis(10)),
                (2, Duration::from_millis(20)),
                (3, Duration::from_millis(30)),
            ]
        );
        assert_eq!(reporter.batches, 1);

        let stats = outcome.statistics().unwrap();
        assert_eq!(stats.runs, 3);
        assert_eq!(stats.min, Duration::from_millis(10));
        assert_eq!(stats.max, Duration::from_millis(30));
        assert_eq!(stats.average, Duration::from_millis(20));
    }
}
