//! Timing statistics for a batch of benchmark runs.
//!
//! [`RunAccumulator`] tracks the minimum, maximum and running sum while runs are in progress and keeps the
//! samples for the order statistics (median, mode) computed at the end.

use std::time::Duration;

use crate::errors::StatsError;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Aggregate timings of a batch of runs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStatistics {
    /// Number of samples aggregated
    pub runs: usize,
    pub min: Duration,
    pub max: Duration,
    /// Arithmetic mean: sum / runs
    pub average: Duration,
    pub median: Duration,
    /// Population standard deviation around [`RunStatistics::average`]
    pub std_dev: Duration,
    /// Most frequent sample; the smallest one on ties
    pub mode: Duration,
}

impl RunStatistics {
    /// Aggregate a slice of samples.
    ///
    /// ## Errors
    /// - [`StatsError::EmptySeries`] when `samples` is empty.
    pub fn from_samples(samples: &[Duration]) -> Result<Self, StatsError> {
        let mut acc = RunAccumulator::with_capacity(samples.len());
        for &sample in samples {
            acc.record(sample);
        }
        acc.finish()
    }
}

/// Running accumulator owned by one harness invocation.
#[derive(Debug, Clone, Default)]
pub struct RunAccumulator {
    min: Option<Duration>,
    max: Duration,
    total: Duration,
    samples: Vec<Duration>,
}

impl RunAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(runs: usize) -> Self {
        Self {
            samples: Vec::with_capacity(runs),
            ..Self::default()
        }
    }

    /// Record one run.
    pub fn record(&mut self, elapsed: Duration) {
        self.min = Some(self.min.map_or(elapsed, |min| min.min(elapsed)));
        self.max = self.max.max(elapsed);
        self.total = self.total.saturating_add(elapsed);
        self.samples.push(elapsed);
    }

    /// Consume the accumulator and compute the final statistics.
    ///
    /// ## Errors
    /// - [`StatsError::EmptySeries`] when nothing was recorded.
    pub fn finish(mut self) -> Result<RunStatistics, StatsError> {
        let min = self.min.ok_or(StatsError::EmptySeries)?;
        let runs = self.samples.len();

        let average = duration_from_nanos(self.total.as_nanos() / runs as u128);

        self.samples.sort_unstable();
        let median = median_of_sorted(&self.samples);
        let mode = mode_of_sorted(&self.samples);
        let std_dev = population_std_dev(&self.samples, average);

        Ok(RunStatistics {
            runs,
            min,
            max: self.max,
            average,
            median,
            std_dev,
            mode,
        })
    }
}

/// Odd count: the middle sample. Even count: the mean of the two middle samples.
fn median_of_sorted(sorted: &[Duration]) -> Duration {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        duration_from_nanos((sorted[mid - 1].as_nanos() + sorted[mid].as_nanos()) / 2)
    } else {
        sorted[mid]
    }
}

fn mode_of_sorted(sorted: &[Duration]) -> Duration {
    let mut mode = sorted[0];
    let mut mode_count = 0;

    let mut i = 0;
    while i < sorted.len() {
        let value = sorted[i];
        let run_len = sorted[i..].iter().take_while(|&&s| s == value).count();
        // strict: ties keep the earlier, smaller value
        if run_len > mode_count {
            mode = value;
            mode_count = run_len;
        }
        i += run_len;
    }
    mode
}

fn population_std_dev(samples: &[Duration], average: Duration) -> Duration {
    let mean = average.as_secs_f64();
    let sum_of_squares: f64 = samples
        .iter()
        .map(|s| {
            let diff = s.as_secs_f64() - mean;
            diff * diff
        })
        .sum();
    Duration::from_secs_f64((sum_of_squares / samples.len() as f64).sqrt())
}

fn duration_from_nanos(nanos: u128) -> Duration {
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}
