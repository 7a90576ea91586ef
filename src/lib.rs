//! Round-robin pairing scheduler for the U-Engine ecosystem.
//!
//! Generates week-by-week matchups for an even number of teams so that no
//! pair meets twice before every team has met every other team. Longer
//! seasons repeat the rule per cycle of `N-1` weeks.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Participant`, `ParticipantLedger`,
//!   `Matchup`, `WeekRecord`, `Schedule`, `Violation`
//! - **`scheduler`**: Week builder, cycle/retry orchestration, trial statistics
//! - **`validation`**: Input integrity checks (roster size and parity, duplicate names)
//! - **`config`**: Seeding, retry cap, and trial settings (TOML-loadable)
//!
//! # Example
//!
//! ```
//! use u_roundrobin::{RoundRobinScheduler, ScheduleRequest, SchedulerConfig};
//!
//! let request = ScheduleRequest::new(["A", "B", "C", "D", "E", "F"], 7);
//! let scheduler = RoundRobinScheduler::new(SchedulerConfig::new().with_seed(3));
//! let outcome = scheduler.schedule(&request).unwrap();
//!
//! assert_eq!(outcome.schedule.week_count(), 7);
//! assert!(outcome.schedule.audit().is_empty());
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::{ConfigError, SchedulerConfig};
pub use error::{Result, ScheduleError};
pub use scheduler::{RetryStats, RoundRobinScheduler, ScheduleOutcome, ScheduleRequest, TrialRunner};
