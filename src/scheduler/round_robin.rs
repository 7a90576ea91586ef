//! Pass/retry orchestration.
//!
//! # Algorithm
//!
//! 1. `cycles = ceil(W / (N-1))`. Every cycle but the last is a full
//!    `N-1` weeks; the last is full when `W` divides evenly, otherwise
//!    `W mod (N-1)` weeks.
//! 2. At the start of each cycle every team's cycle opponents are cleared.
//! 3. Each week is built by [`WeekBuilder`].
//! 4. A dead end anywhere throws away the ledger and the partial schedule
//!    and starts again from cycle 1 with fresh participants.
//!
//! Retries are unbounded unless [`SchedulerConfig::max_retries`] is set.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::week::{DeadEnd, WeekBuilder};
use crate::config::SchedulerConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{ParticipantLedger, Schedule};
use crate::validation::validate_request;

/// Input container for scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Team labels; must be unique and even in number.
    pub teams: Vec<String>,
    /// Total weeks to schedule.
    pub weeks: usize,
}

impl ScheduleRequest {
    /// Creates a new schedule request.
    pub fn new<I, S>(teams: I, weeks: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            teams: teams.into_iter().map(Into::into).collect(),
            weeks,
        }
    }

    /// Checks the request, collecting every problem.
    pub fn validate(&self) -> Result<()> {
        validate_request(&self.teams, self.weeks)?;
        Ok(())
    }

    /// Weeks in a full cycle (`N-1`).
    #[inline]
    pub fn cycle_length(&self) -> usize {
        self.teams.len().saturating_sub(1)
    }

    /// Number of cycles needed to cover the requested weeks.
    pub fn cycles_needed(&self) -> usize {
        match self.cycle_length() {
            0 => 0,
            len => self.weeks.div_ceil(len),
        }
    }

    /// Week count of each cycle, in order.
    pub fn cycle_plan(&self) -> Vec<usize> {
        let cycle_length = self.cycle_length();
        let cycles = self.cycles_needed();
        (0..cycles)
            .map(|cycle| {
                let remainder = self.weeks % cycle_length;
                if cycle + 1 < cycles || remainder == 0 {
                    cycle_length
                } else {
                    remainder
                }
            })
            .collect()
    }
}

/// A finished schedule together with what it took to build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// The committed weeks.
    pub schedule: Schedule,
    /// Participants with their full opponent history.
    pub ledger: ParticipantLedger,
    /// Attempts discarded before this one succeeded.
    pub retries: u64,
}

/// Randomized round-robin scheduler with full-restart retry.
///
/// # Example
///
/// ```
/// use u_roundrobin::{RoundRobinScheduler, ScheduleRequest, SchedulerConfig};
///
/// let request = ScheduleRequest::new(["A", "B", "C", "D"], 3);
/// let scheduler = RoundRobinScheduler::new(SchedulerConfig::new().with_seed(11));
///
/// let outcome = scheduler.schedule(&request).unwrap();
/// assert_eq!(outcome.schedule.week_count(), 3);
/// assert!(outcome.schedule.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoundRobinScheduler {
    config: SchedulerConfig,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given configuration.
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Creates a scheduler from a TOML config file.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(SchedulerConfig::load(path)?))
    }

    /// The active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Validates the request and schedules it.
    ///
    /// Uses the configured seed, or OS entropy when none is set.
    pub fn schedule(&self, request: &ScheduleRequest) -> Result<ScheduleOutcome> {
        let mut rng = match self.config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.schedule_with_rng(request, &mut rng)
    }

    /// Validates the request and schedules it with a caller-supplied RNG.
    pub fn schedule_with_rng<R: Rng + ?Sized>(
        &self,
        request: &ScheduleRequest,
        rng: &mut R,
    ) -> Result<ScheduleOutcome> {
        request.validate()?;

        let plan = request.cycle_plan();
        let builder = WeekBuilder::new().with_unique_preference(self.config.prefer_unique_sets);
        let mut retries: u64 = 0;

        loop {
            match Self::attempt(request, &plan, &builder, rng) {
                Ok((schedule, ledger)) => {
                    debug!(
                        weeks = schedule.week_count(),
                        retries, "schedule complete"
                    );
                    return Ok(ScheduleOutcome {
                        schedule,
                        ledger,
                        retries,
                    });
                }
                Err(failure) => {
                    if self.config.max_retries.is_some_and(|max| retries >= max) {
                        return Err(ScheduleError::RetryLimitExceeded { retries });
                    }
                    retries += 1;
                    debug!(
                        cycle = failure.cycle + 1,
                        week = failure.week + 1,
                        picker = failure.dead_end.picker,
                        retries,
                        "dead end, retrying"
                    );
                }
            }
        }
    }

    /// Runs one attempt from a fresh ledger.
    fn attempt<R: Rng + ?Sized>(
        request: &ScheduleRequest,
        plan: &[usize],
        builder: &WeekBuilder,
        rng: &mut R,
    ) -> std::result::Result<(Schedule, ParticipantLedger), AttemptFailure> {
        let mut ledger = ParticipantLedger::new(&request.teams);
        let mut schedule = Schedule::new(&request.teams);

        for (cycle, &weeks) in plan.iter().enumerate() {
            ledger.start_cycle();
            for week in 0..weeks {
                let record = builder
                    .build(&mut ledger, week, rng)
                    .map_err(|dead_end| AttemptFailure {
                        cycle,
                        week,
                        dead_end,
                    })?;
                schedule.push_week(record);
            }
        }

        Ok((schedule, ledger))
    }
}

/// Where an attempt hit its dead end.
#[derive(Debug, Clone, Copy)]
struct AttemptFailure {
    cycle: usize,
    week: usize,
    dead_end: DeadEnd,
}
