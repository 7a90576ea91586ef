//! Retry statistics across repeated trials.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Mean | Average retries per trial |
//! | Max | Largest retry count, with how many trials hit it |
//! | Min | Smallest retry count, with how many trials hit it |
//! | Low-retry count | Trials that needed 0 or 1 retries |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of per-trial retry counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryStats {
    /// Number of trials summarized.
    pub trials: usize,
    /// Mean retries per trial.
    pub mean: f64,
    /// Largest retry count.
    pub max: u64,
    /// Trials with exactly `max` retries.
    pub max_count: usize,
    /// Smallest retry count.
    pub min: u64,
    /// Trials with exactly `min` retries.
    pub min_count: usize,
    /// Trials that needed 0 or 1 retries.
    pub low_retry_count: usize,
}

impl RetryStats {
    /// Summarizes retry counts.
    ///
    /// An empty slice yields all-zero statistics.
    pub fn calculate(retries: &[u64]) -> Self {
        let max = retries.iter().copied().max().unwrap_or(0);
        let min = retries.iter().copied().min().unwrap_or(0);
        let total: u64 = retries.iter().sum();

        let mean = if retries.is_empty() {
            0.0
        } else {
            total as f64 / retries.len() as f64
        };

        Self {
            trials: retries.len(),
            mean,
            max,
            max_count: retries.iter().filter(|&&r| r == max).count(),
            min,
            min_count: retries.iter().filter(|&&r| r == min).count(),
            low_retry_count: retries.iter().filter(|&&r| r <= 1).count(),
        }
    }
}

impl fmt::Display for RetryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MEAN: {}", self.mean)?;
        writeln!(f, "MAX: {} (count= {} )", self.max, self.max_count)?;
        writeln!(f, "MIN: {} (count= {} )", self.min, self.min_count)?;
        write!(f, "1 or 0 (count= {} )", self.low_retry_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_basic() {
        let stats = RetryStats::calculate(&[0, 2, 1, 0, 5, 5]);
        assert_eq!(stats.trials, 6);
        assert!((stats.mean - 13.0 / 6.0).abs() < 1e-10);
        assert_eq!(stats.max, 5);
        assert_eq!(stats.max_count, 2);
        assert_eq!(stats.min, 0);
        assert_eq!(stats.min_count, 2);
        assert_eq!(stats.low_retry_count, 3);
    }

    #[test]
    fn test_stats_single_trial() {
        let stats = RetryStats::calculate(&[3]);
        assert_eq!(stats.max, 3);
        assert_eq!(stats.min, 3);
        assert_eq!(stats.max_count, 1);
        assert_eq!(stats.min_count, 1);
        assert_eq!(stats.low_retry_count, 0);
        assert!((stats.mean - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_stats_empty() {
        let stats = RetryStats::calculate(&[]);
        assert_eq!(stats.trials, 0);
        assert_eq!(stats.max_count, 0);
        assert!((stats.mean - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_display() {
        let stats = RetryStats::calculate(&[0, 0, 2]);
        let text = stats.to_string();
        assert!(text.contains("MAX: 2 (count= 1 )"));
        assert!(text.contains("MIN: 0 (count= 2 )"));
        assert!(text.ends_with("1 or 0 (count= 2 )"));
    }
}
