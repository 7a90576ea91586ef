//! Participant (team) model and the per-attempt ledger.
//!
//! A participant records which opponents it has faced during the current
//! cycle and the full week-by-week list of opponents for the attempt.
//! The ledger owns every participant of one attempt; a retry builds a new
//! ledger instead of resetting the old one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Index of a participant within its ledger.
pub type ParticipantId = usize;

/// A team taking part in the schedule.
///
/// `opponents_played` is ordered so that set comparisons and iteration
/// are deterministic under a seeded RNG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Position in the ledger.
    pub id: ParticipantId,
    /// Unique team label.
    pub name: String,
    /// Opponents faced in the current cycle.
    pub opponents_played: BTreeSet<ParticipantId>,
    /// Opponent for each committed week, oldest first.
    pub history: Vec<ParticipantId>,
}

impl Participant {
    /// Creates a participant with no matches.
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            opponents_played: BTreeSet::new(),
            history: Vec::new(),
        }
    }

    /// Whether `other` was already faced this cycle.
    #[inline]
    pub fn has_played(&self, other: ParticipantId) -> bool {
        self.opponents_played.contains(&other)
    }

    /// Number of weeks committed for this participant.
    #[inline]
    pub fn weeks_played(&self) -> usize {
        self.history.len()
    }
}

/// All participants of one scheduling attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantLedger {
    participants: Vec<Participant>,
}

impl ParticipantLedger {
    /// Creates a fresh ledger, assigning ids in name order.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            participants: names
                .iter()
                .enumerate()
                .map(|(id, name)| Participant::new(id, name.as_ref()))
                .collect(),
        }
    }

    /// Number of participants.
    #[inline]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the ledger has no participants.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// All participant ids, in ledger order.
    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> {
        0..self.participants.len()
    }

    /// Participant by id.
    ///
    /// # Panics
    /// Panics if `id` is out of range.
    #[inline]
    pub fn get(&self, id: ParticipantId) -> &Participant {
        &self.participants[id]
    }

    /// All participants, in ledger order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Label of a participant.
    #[inline]
    pub fn name(&self, id: ParticipantId) -> &str {
        &self.participants[id].name
    }

    /// Looks up a participant by label.
    pub fn find(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// Clears every participant's cycle opponents. History is kept.
    pub fn start_cycle(&mut self) {
        for participant in &mut self.participants {
            participant.opponents_played.clear();
        }
    }

    /// Records a match between `a` and `b` on both sides.
    pub fn commit_match(&mut self, a: ParticipantId, b: ParticipantId) {
        debug_assert_ne!(a, b, "participant cannot play itself");
        let first = &mut self.participants[a];
        first.history.push(b);
        first.opponents_played.insert(b);
        let second = &mut self.participants[b];
        second.history.push(a);
        second.opponents_played.insert(a);
    }

    /// Opponent labels for a participant, oldest week first.
    pub fn history_names(&self, id: ParticipantId) -> Vec<&str> {
        self.participants[id]
            .history
            .iter()
            .map(|&opponent| self.name(opponent))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_new() {
        let ledger = ParticipantLedger::new(&["A", "B", "C", "D"]);
        assert_eq!(ledger.len(), 4);
        assert!(!ledger.is_empty());
        assert_eq!(ledger.name(2), "C");
        assert_eq!(ledger.find("D").map(|p| p.id), Some(3));
        assert!(ledger.find("Z").is_none());
        assert!(ledger.participants().iter().all(|p| p.weeks_played() == 0));
    }

    #[test]
    fn test_commit_match_is_symmetric() {
        let mut ledger = ParticipantLedger::new(&["A", "B", "C", "D"]);
        ledger.commit_match(0, 2);

        assert!(ledger.get(0).has_played(2));
        assert!(ledger.get(2).has_played(0));
        assert!(!ledger.get(1).has_played(0));
        assert_eq!(ledger.get(0).history, vec![2]);
        assert_eq!(ledger.get(2).history, vec![0]);
    }

    #[test]
    fn test_start_cycle_keeps_history() {
        let mut ledger = ParticipantLedger::new(&["A", "B"]);
        ledger.commit_match(0, 1);
        ledger.start_cycle();

        assert!(ledger.get(0).opponents_played.is_empty());
        assert!(ledger.get(1).opponents_played.is_empty());
        assert_eq!(ledger.get(0).weeks_played(), 1);

        ledger.commit_match(1, 0);
        assert_eq!(ledger.history_names(0), vec!["B", "B"]);
    }
}
