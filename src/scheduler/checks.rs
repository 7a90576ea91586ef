//! Candidate filters used while building a week.
//!
//! Both checks are pure: they read the ledger and never mutate it.
//!
//! - **Viability** rejects a candidate whose removal would leave another
//!   unscheduled team with nobody left to play.
//! - **Uniqueness** prefers candidates that keep every opponent set of
//!   this week's already-paired teams distinct. Two teams sharing an
//!   opponent set tend to fight over the same remaining opponents later in
//!   the cycle, which forces a dead end.

use crate::models::{ParticipantId, ParticipantLedger};

/// Whether the viability check can reject anything yet.
///
/// A team's "played or self" set has `completed_weeks + 1` members. The
/// pool left after removing a candidate has `pool_len - 1` members, so the
/// subset condition can only hold once `pool_len - 1 <= completed_weeks + 1`.
///
/// `pool_len` counts the unscheduled teams excluding the picker.
#[inline]
pub fn viability_check_applies(pool_len: usize, completed_weeks: usize) -> bool {
    pool_len.saturating_sub(1) <= completed_weeks + 1
}

/// Whether pairing with `candidate` leaves every other unscheduled team
/// with at least one legal opponent.
///
/// `unscheduled` is the pool excluding the picker and including
/// `candidate`. For the remaining pool `R = unscheduled \ {candidate}`,
/// the candidate is rejected if some `t` in `R` has already played all of
/// `R \ {t}`.
pub fn is_viable(
    ledger: &ParticipantLedger,
    candidate: ParticipantId,
    unscheduled: &[ParticipantId],
) -> bool {
    let remaining: Vec<ParticipantId> = unscheduled
        .iter()
        .copied()
        .filter(|&id| id != candidate)
        .collect();

    !remaining.iter().any(|&team| {
        let participant = ledger.get(team);
        remaining
            .iter()
            .all(|&other| other == team || participant.has_played(other))
    })
}

/// Whether pairing `picker` with `candidate` keeps opponent sets unique
/// among the teams already scheduled this week.
///
/// The hypothetical sets `picker.opponents_played ∪ {candidate}` and
/// `candidate.opponents_played ∪ {picker}` must both differ from the
/// current set of every team in `scheduled`.
pub fn is_preferred(
    ledger: &ParticipantLedger,
    picker: ParticipantId,
    candidate: ParticipantId,
    scheduled: &[ParticipantId],
) -> bool {
    let mut picker_set = ledger.get(picker).opponents_played.clone();
    picker_set.insert(candidate);
    let mut candidate_set = ledger.get(candidate).opponents_played.clone();
    candidate_set.insert(picker);

    scheduled.iter().all(|&team| {
        let current = &ledger.get(team).opponents_played;
        *current != picker_set && *current != candidate_set
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(matches: &[(usize, usize)]) -> ParticipantLedger {
        let mut ledger = ParticipantLedger::new(&["A", "B", "C", "D", "E", "F"]);
        for &(a, b) in matches {
            ledger.commit_match(a, b);
        }
        ledger
    }

    #[test]
    fn test_threshold() {
        // 6 teams, first matchup of week 0: picker removed, 5 left.
        assert!(!viability_check_applies(5, 0));
        assert!(!viability_check_applies(3, 0));
        assert!(viability_check_applies(2, 0));
        assert!(viability_check_applies(5, 3));
        assert!(viability_check_applies(1, 0));
    }

    #[test]
    fn test_viable_rejects_stranding_candidate() {
        // B has played C. Picker A, pool {B, C, D}.
        let ledger = ledger_with(&[(1, 2)]);
        // Taking D leaves {B, C}: B's only option is C, already played.
        assert!(!is_viable(&ledger, 3, &[1, 2, 3]));
        // Taking C leaves {B, D}: fine.
        assert!(is_viable(&ledger, 2, &[1, 2, 3]));
        assert!(is_viable(&ledger, 1, &[1, 2, 3]));
    }

    #[test]
    fn test_viable_with_fresh_ledger() {
        let ledger = ledger_with(&[]);
        assert!(is_viable(&ledger, 1, &[1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_preferred_rejects_duplicate_set() {
        // B has played {A, C}; B is already scheduled this week.
        let mut ledger = ledger_with(&[(1, 0), (1, 2)]);
        ledger.commit_match(3, 0);
        // D has played {A}; pairing D with C gives D {A, C}, same as B.
        assert!(!is_preferred(&ledger, 3, 2, &[1]));
        // D with E gives {A, E}; E gets {D}. Both differ from B's {A, C}.
        assert!(is_preferred(&ledger, 3, 4, &[1]));
    }

    #[test]
    fn test_preferred_checks_candidate_side() {
        // B has played {A, F}; E has played {F}.
        let mut ledger = ledger_with(&[(1, 0), (1, 5)]);
        ledger.commit_match(4, 5);
        // Picker A, candidate E: E's new set {F, A} equals B's.
        assert!(!is_preferred(&ledger, 0, 4, &[1]));
    }

    #[test]
    fn test_preferred_with_empty_scheduled() {
        let ledger = ledger_with(&[(0, 1)]);
        assert!(is_preferred(&ledger, 0, 2, &[]));
    }
}
