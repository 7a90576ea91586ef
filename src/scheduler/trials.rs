//! Repeated independent trials for retry statistics.
//!
//! Every trial builds its own ledger and owns its own RNG, so trials can
//! run on the rayon pool without sharing state. With a configured seed,
//! trial `i` is seeded with `seed + i`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::info;

use super::round_robin::{RoundRobinScheduler, ScheduleRequest};
use super::stats::RetryStats;
use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::validation::validate_trials;

/// Runs a request repeatedly and collects retry counts.
#[derive(Debug, Clone, Default)]
pub struct TrialRunner {
    scheduler: RoundRobinScheduler,
}

impl TrialRunner {
    /// Creates a runner with the given configuration.
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            scheduler: RoundRobinScheduler::new(config),
        }
    }

    /// Runs `trials` independent schedules and returns each retry count,
    /// in trial order.
    pub fn run(&self, request: &ScheduleRequest, trials: usize) -> Result<Vec<u64>> {
        validate_trials(trials)?;
        request.validate()?;

        let retries = if self.scheduler.config().parallel_trials {
            (0..trials)
                .into_par_iter()
                .map(|trial| self.run_trial(request, trial))
                .collect::<Result<Vec<_>>>()?
        } else {
            (0..trials)
                .map(|trial| self.run_trial(request, trial))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(retries)
    }

    /// Runs trials and summarizes them.
    pub fn run_stats(&self, request: &ScheduleRequest, trials: usize) -> Result<RetryStats> {
        let retries = self.run(request, trials)?;
        let stats = RetryStats::calculate(&retries);
        info!(
            trials = stats.trials,
            mean = stats.mean,
            max = stats.max,
            min = stats.min,
            "trials complete"
        );
        Ok(stats)
    }

    fn run_trial(&self, request: &ScheduleRequest, trial: usize) -> Result<u64> {
        let mut rng = match self.scheduler.config().random_seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(trial as u64)),
            None => StdRng::from_os_rng(),
        };
        let outcome = self.scheduler.schedule_with_rng(request, &mut rng)?;
        Ok(outcome.retries)
    }
}
