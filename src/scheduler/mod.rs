//! Randomized round-robin scheduling.
//!
//! Builds weekly pairings one matchup at a time and restarts the whole
//! construction whenever a week cannot be completed.
//!
//! # Components
//!
//! - `checks`: viability and uniqueness filters on candidate opponents
//! - `WeekBuilder`: fills one week, or reports a [`DeadEnd`]
//! - `RoundRobinScheduler`: plans cycles and retries from scratch on dead ends
//! - `TrialRunner` / `RetryStats`: repeated trials and their retry summary
//!
//! # Termination
//!
//! Retries are unbounded by default. Dead ends are rare enough that runs
//! converge quickly in practice, but nothing guarantees it; set
//! `SchedulerConfig::max_retries` for a hard cap.

pub mod checks;
mod round_robin;
mod stats;
mod trials;
mod week;

pub use round_robin::{RoundRobinScheduler, ScheduleOutcome, ScheduleRequest};
pub use stats::RetryStats;
pub use trials::TrialRunner;
pub use week::{DeadEnd, WeekBuilder};
