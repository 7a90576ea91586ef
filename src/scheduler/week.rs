//! Week builder.
//!
//! # Algorithm
//!
//! Until every team is paired:
//! 1. Pick a random unscheduled team.
//! 2. Its candidates are the unscheduled teams it has not played this cycle.
//! 3. With a single team left, that team is the only candidate.
//! 4. Otherwise drop candidates that would strand another team (viability).
//! 5. For the first matchup of the week pick a random candidate; later,
//!    take the first candidate that keeps opponent sets unique, falling
//!    back to a random one.
//! 6. No candidate left means a dead end.
//!
//! A dead end is not retried here; the orchestrator throws the whole
//! attempt away.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use thiserror::Error;
use tracing::trace;

use super::checks::{is_preferred, is_viable, viability_check_applies};
use crate::models::{Matchup, ParticipantId, ParticipantLedger, WeekRecord};

/// A team was left with no legal opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("participant {picker} has no legal opponent at matchup {matchup}")]
pub struct DeadEnd {
    /// The team that could not be paired.
    pub picker: ParticipantId,
    /// Zero-based matchup index within the week.
    pub matchup: usize,
}

/// Builds one week of matchups against a ledger.
#[derive(Debug, Clone)]
pub struct WeekBuilder {
    prefer_unique_sets: bool,
}

impl Default for WeekBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WeekBuilder {
    /// Creates a builder with the uniqueness preference enabled.
    pub fn new() -> Self {
        Self {
            prefer_unique_sets: true,
        }
    }

    /// Enables or disables the uniqueness preference.
    pub fn with_unique_preference(mut self, enabled: bool) -> Self {
        self.prefer_unique_sets = enabled;
        self
    }

    /// Builds and commits one week.
    ///
    /// `completed_weeks` is the number of weeks already committed in the
    /// current cycle. On success every participant's history grows by one
    /// entry. On a dead end the ledger is left partially updated and must
    /// be discarded.
    pub fn build<R: Rng + ?Sized>(
        &self,
        ledger: &mut ParticipantLedger,
        completed_weeks: usize,
        rng: &mut R,
    ) -> Result<WeekRecord, DeadEnd> {
        let pairs = ledger.len() / 2;
        let mut unscheduled: Vec<ParticipantId> = ledger.ids().collect();
        let mut scheduled: Vec<ParticipantId> = Vec::with_capacity(ledger.len());
        let mut week = WeekRecord::with_capacity(pairs);

        for matchup in 0..pairs {
            unscheduled.shuffle(rng);
            let Some(picker) = unscheduled.pop() else {
                break;
            };
            scheduled.push(picker);

            let state: &ParticipantLedger = ledger;
            let mut candidates: Vec<ParticipantId> = unscheduled
                .iter()
                .copied()
                .filter(|&c| !state.get(picker).has_played(c))
                .collect();

            let choice = if unscheduled.len() == 1 {
                candidates.first().copied()
            } else {
                if viability_check_applies(unscheduled.len(), completed_weeks) {
                    candidates.retain(|&c| is_viable(state, c, &unscheduled));
                }

                if matchup == 0 || !self.prefer_unique_sets {
                    candidates.choose(rng).copied()
                } else {
                    candidates
                        .iter()
                        .copied()
                        .find(|&c| is_preferred(state, picker, c, &scheduled))
                        .or_else(|| candidates.choose(rng).copied())
                }
            };

            let opponent = choice.ok_or(DeadEnd { picker, matchup })?;

            unscheduled.retain(|&id| id != opponent);
            scheduled.push(opponent);
            ledger.commit_match(picker, opponent);
            trace!(
                matchup,
                first = ledger.name(picker),
                second = ledger.name(opponent),
                "matchup committed"
            );
            week.push(Matchup::new(ledger.name(picker), ledger.name(opponent)));
        }

        Ok(week)
    }
}
