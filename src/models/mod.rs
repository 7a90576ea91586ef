//! Round-robin domain models.
//!
//! Provides the data types shared by the scheduler and its callers:
//! participants and their per-attempt ledger, weekly matchup records,
//! and the finished schedule with its invariant audit.
//!
//! # Domain Mappings
//!
//! | u-roundrobin | Fantasy league | Chess club | Esports |
//! |--------------|----------------|------------|---------|
//! | Participant | Team | Player | Roster |
//! | WeekRecord | Week | Round | Matchday |
//! | Schedule | Regular season | Tournament | Split |

mod participant;
mod schedule;
mod week;

pub use participant::{Participant, ParticipantId, ParticipantLedger};
pub use schedule::{Schedule, Violation, ViolationType};
pub use week::{Matchup, WeekRecord};
