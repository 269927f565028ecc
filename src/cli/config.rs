//! Benchmark configuration.
//!
//! Values arrive as raw strings after `--benchmark`. Anything that does not parse falls back to the
//! default instead of being rejected.

use std::num::IntErrorKind;

use primefactor_core::{MAX_LIMIT, clamp_limit};
use thiserror::Error;

/// Default exclusive upper bound of the benchmark range.
pub const DEFAULT_LIMIT: u64 = 10_000_000;
/// Default number of benchmark runs.
pub const DEFAULT_RUNS: i64 = 1;

/// Why a raw `--benchmark` value was ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
}

/// Benchmark configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Exclusive upper bound of the scanned range, at most `MAX_LIMIT`
    pub limit: u64,
    /// Number of runs; values below 1 are reported by the harness, not rejected here
    pub runs: i64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            runs: DEFAULT_RUNS,
        }
    }
}

impl BenchmarkConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit, clamped to `MAX_LIMIT`
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = clamp_limit(limit);
        self
    }

    /// Set the number of runs
    pub fn with_runs(mut self, runs: i64) -> Self {
        self.runs = runs;
        self
    }

    /// Build a config from the values given after `--benchmark`: `[limit [runs]]`.
    ///
    /// A limit of 0 or less selects `MAX_LIMIT`. Missing or unparsable values keep their defaults.
    pub fn from_values(values: &[String]) -> Self {
        let mut config = Self::new();

        if let Some(raw) = values.first() {
            match parse_limit(raw) {
                Ok(limit) => config = config.with_limit(limit),
                Err(e) => tracing::debug!(error = %e, "ignoring benchmark limit, using default"),
            }
        }
        if let Some(raw) = values.get(1) {
            match parse_whole_number(raw) {
                Ok(runs) => config = config.with_runs(runs),
                Err(e) => tracing::debug!(error = %e, "ignoring benchmark runs, using default"),
            }
        }

        config
    }
}

/// Parse a limit, clamped to `MAX_LIMIT`.
///
/// 0 or any negative whole number means "use the maximum", as does a value too large for `u64`.
pub fn parse_limit(raw: &str) -> Result<u64, ValueError> {
    let cleaned = strip_separators(raw);
    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, cleaned.as_str()),
    };

    let magnitude = match digits.parse::<u64>() {
        Ok(value) => value,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => return Err(ValueError::NotANumber(raw.to_string())),
    };

    if negative || magnitude == 0 {
        Ok(MAX_LIMIT)
    } else {
        Ok(clamp_limit(magnitude))
    }
}

/// Parse a signed whole number, allowing `,` and `_` as digit group separators.
pub fn parse_whole_number(raw: &str) -> Result<i64, ValueError> {
    strip_separators(raw)
        .parse::<i64>()
        .map_err(|_| ValueError::NotANumber(raw.to_string()))
}

fn strip_separators(raw: &str) -> String {
    raw.trim().chars().filter(|c| *c != ',' && *c != '_').collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn values(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_config() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.limit, 10_000_000);
        assert_eq!(config.runs, 1);
        assert_eq!(BenchmarkConfig::new(), config);
    }

    #[test]
    fn test_builder_chain() {
        let config = BenchmarkConfig::new().with_limit(500).with_runs(3);
        assert_eq!(config.limit, 500);
        assert_eq!(config.runs, 3);
    }

    #[test]
    fn test_with_limit_clamps() {
        let config = BenchmarkConfig::new().with_limit(u64::MAX);
        assert_eq!(config.limit, MAX_LIMIT);
    }

    #[test]
    fn test_from_no_values_is_default() {
        assert_eq!(BenchmarkConfig::from_values(&[]), BenchmarkConfig::default());
    }

    #[test]
    fn test_from_limit_only() {
        let config = BenchmarkConfig::from_values(&values(&["1000"]));
        assert_eq!(config.limit, 1000);
        assert_eq!(config.runs, 1);
    }

    #[test]
    fn test_from_limit_and_runs() {
        let config = BenchmarkConfig::from_values(&values(&["1000", "5"]));
        assert_eq!(config.limit, 1000);
        assert_eq!(config.runs, 5);
    }

    #[test]
    fn test_non_positive_limit_means_maximum() {
        assert_eq!(BenchmarkConfig::from_values(&values(&["0"])).limit, MAX_LIMIT);
        assert_eq!(BenchmarkConfig::from_values(&values(&["-7"])).limit, MAX_LIMIT);
    }

    #[test]
    fn test_limit_above_maximum_is_clamped() {
        let config = BenchmarkConfig::from_values(&values(&["9000000000"]));
        assert_eq!(config.limit, MAX_LIMIT);
    }

    #[test]
    fn test_limit_beyond_signed_range_is_clamped() {
        // u64::MAX, and a value between i64::MAX and u64::MAX
        assert_eq!(
            BenchmarkConfig::from_values(&values(&["18446744073709551615"])).limit,
            MAX_LIMIT
        );
        assert_eq!(
            BenchmarkConfig::from_values(&values(&["9,300,000,000,000,000,000"])).limit,
            MAX_LIMIT
        );
        // overflows u64
        assert_eq!(parse_limit("99999999999999999999999").unwrap(), MAX_LIMIT);
    }

    #[test]
    fn test_limit_far_below_zero_means_maximum() {
        assert_eq!(parse_limit("-9223372036854775809").unwrap(), MAX_LIMIT);
        assert_eq!(parse_limit("-99999999999999999999999").unwrap(), MAX_LIMIT);
    }

    #[test]
    fn test_malformed_limit_is_rejected() {
        assert!(parse_limit("-").is_err());
        assert!(parse_limit("--5").is_err());
        assert!(parse_limit("1e9").is_err());
        assert_eq!(parse_limit("1,000").unwrap(), 1_000);
    }

    #[test]
    fn test_malformed_values_fall_back_to_defaults() {
        let config = BenchmarkConfig::from_values(&values(&["lots", "many"]));
        assert_eq!(config, BenchmarkConfig::default());
    }

    #[test]
    fn test_negative_runs_are_kept_for_the_harness() {
        let config = BenchmarkConfig::from_values(&values(&["100", "-2"]));
        assert_eq!(config.runs, -2);
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(parse_whole_number("10,000,000").unwrap(), 10_000_000);
        assert_eq!(parse_whole_number("1_000").unwrap(), 1_000);
        assert_eq!(parse_whole_number(" 42 ").unwrap(), 42);
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(
            parse_whole_number("12abc"),
            Err(ValueError::NotANumber("12abc".to_string()))
        );
        assert_eq!(
            ValueError::NotANumber("x".to_string()).to_string(),
            "'x' is not a whole number"
        );
    }
}
