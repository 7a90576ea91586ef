//! Schedule (solution) model.
//!
//! A schedule is the ordered list of weeks produced by one successful
//! attempt. Weeks are grouped into cycles of `N-1` weeks; within a cycle
//! no pair of teams may meet twice.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::WeekRecord;

/// A complete round-robin schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Team labels, in the order they were supplied.
    pub participants: Vec<String>,
    /// Committed weeks, oldest first.
    pub weeks: Vec<WeekRecord>,
}

/// A broken schedule invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Zero-based week index where the violation was found.
    pub week: usize,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A team was paired with itself.
    SelfMatch,
    /// A matchup names a team that is not a participant.
    UnknownParticipant,
    /// A participant has no matchup in a week.
    MissingParticipant,
    /// A participant appears in more than one matchup in a week.
    DuplicateAppearance,
    /// A pair met twice within one cycle.
    RepeatedPairing,
}

impl Violation {
    fn new(violation_type: ViolationType, week: usize, message: impl Into<String>) -> Self {
        Self {
            violation_type,
            week,
            message: message.into(),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule for the given teams.
    pub fn new<S: AsRef<str>>(participants: &[S]) -> Self {
        Self {
            participants: participants.iter().map(|p| p.as_ref().to_string()).collect(),
            weeks: Vec::new(),
        }
    }

    /// Appends a completed week.
    pub fn push_week(&mut self, week: WeekRecord) {
        self.weeks.push(week);
    }

    /// Number of weeks.
    #[inline]
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Weeks per full cycle (`N-1`), or 0 with fewer than two teams.
    #[inline]
    pub fn cycle_length(&self) -> usize {
        self.participants.len().saturating_sub(1)
    }

    /// Weeks grouped by cycle; the last group may be partial.
    pub fn cycles(&self) -> impl Iterator<Item = &[WeekRecord]> {
        self.weeks.chunks(self.cycle_length().max(1))
    }

    /// Opponent of `team` in week `week` (zero-based).
    pub fn opponent_of(&self, team: &str, week: usize) -> Option<&str> {
        self.weeks.get(week)?.opponent_of(team)
    }

    /// Opponents of `team`, one per week where it plays.
    pub fn team_schedule(&self, team: &str) -> Vec<&str> {
        self.weeks
            .iter()
            .filter_map(|w| w.opponent_of(team))
            .collect()
    }

    /// How many times `a` and `b` meet over the whole schedule.
    pub fn pair_count(&self, a: &str, b: &str) -> usize {
        self.weeks
            .iter()
            .flat_map(|w| &w.matchups)
            .filter(|m| m.opponent_of(a) == Some(b))
            .count()
    }

    /// Checks every schedule invariant.
    ///
    /// Returns all violations found; an empty list means every week covers
    /// each participant exactly once and no pair repeats within a cycle.
    pub fn audit(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        let known: HashSet<&str> = self.participants.iter().map(String::as_str).collect();

        for (index, week) in self.weeks.iter().enumerate() {
            let mut appearances: HashMap<&str, usize> = HashMap::new();
            for matchup in &week.matchups {
                if matchup.first == matchup.second {
                    violations.push(Violation::new(
                        ViolationType::SelfMatch,
                        index,
                        format!("'{}' is paired with itself", matchup.first),
                    ));
                }
                for team in [matchup.first.as_str(), matchup.second.as_str()] {
                    if !known.contains(team) {
                        violations.push(Violation::new(
                            ViolationType::UnknownParticipant,
                            index,
                            format!("'{team}' is not a participant"),
                        ));
                    }
                    *appearances.entry(team).or_insert(0) += 1;
                }
            }

            for team in &self.participants {
                match appearances.get(team.as_str()).copied().unwrap_or(0) {
                    0 => violations.push(Violation::new(
                        ViolationType::MissingParticipant,
                        index,
                        format!("'{team}' has no matchup"),
                    )),
                    1 => {}
                    n => violations.push(Violation::new(
                        ViolationType::DuplicateAppearance,
                        index,
                        format!("'{team}' appears {n} times"),
                    )),
                }
            }
        }

        let cycle_length = self.cycle_length().max(1);
        for (cycle, weeks) in self.cycles().enumerate() {
            let mut seen: HashSet<(&str, &str)> = HashSet::new();
            for (offset, week) in weeks.iter().enumerate() {
                for matchup in &week.matchups {
                    if !seen.insert(matchup.key()) {
                        violations.push(Violation::new(
                            ViolationType::RepeatedPairing,
                            cycle * cycle_length + offset,
                            format!("{matchup} repeats within cycle {}", cycle + 1),
                        ));
                    }
                }
            }
        }

        violations
    }

    /// Whether the schedule passes [`Schedule::audit`].
    pub fn is_valid(&self) -> bool {
        self.audit().is_empty()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, week) in self.weeks.iter().enumerate() {
            writeln!(f, "Week {}", index + 1)?;
            writeln!(f, "-------------")?;
            writeln!(f, "{week}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Matchup;

    fn week(pairs: &[(&str, &str)]) -> WeekRecord {
        let mut w = WeekRecord::new();
        for &(a, b) in pairs {
            w.push(Matchup::new(a, b));
        }
        w
    }

    fn full_cycle() -> Schedule {
        let mut s = Schedule::new(&["A", "B", "C", "D"]);
        s.push_week(week(&[("A", "B"), ("C", "D")]));
        s.push_week(week(&[("A", "C"), ("B", "D")]));
        s.push_week(week(&[("A", "D"), ("B", "C")]));
        s
    }

    #[test]
    fn test_valid_cycle() {
        let s = full_cycle();
        assert_eq!(s.week_count(), 3);
        assert_eq!(s.cycle_length(), 3);
        assert!(s.is_valid());
        assert_eq!(s.team_schedule("A"), vec!["B", "C", "D"]);
        assert_eq!(s.opponent_of("D", 1), Some("B"));
        assert_eq!(s.opponent_of("D", 5), None);
        assert_eq!(s.pair_count("C", "B"), 1);
    }

    #[test]
    fn test_repeat_in_next_cycle_is_allowed() {
        let mut s = full_cycle();
        s.push_week(week(&[("B", "A"), ("D", "C")]));
        assert_eq!(s.cycles().count(), 2);
        assert!(s.is_valid());
        assert_eq!(s.pair_count("A", "B"), 2);
    }

    #[test]
    fn test_repeat_within_cycle() {
        let mut s = Schedule::new(&["A", "B", "C", "D"]);
        s.push_week(week(&[("A", "B"), ("C", "D")]));
        s.push_week(week(&[("B", "A"), ("C", "D")]));

        let violations = s.audit();
        assert_eq!(violations.len(), 2);
        assert!(violations
            .iter()
            .all(|v| v.violation_type == ViolationType::RepeatedPairing && v.week == 1));
    }

    #[test]
    fn test_coverage_violations() {
        let mut s = Schedule::new(&["A", "B", "C", "D"]);
        s.push_week(week(&[("A", "A"), ("B", "E")]));

        let kinds: Vec<ViolationType> = s.audit().into_iter().map(|v| v.violation_type).collect();
        assert!(kinds.contains(&ViolationType::SelfMatch));
        assert!(kinds.contains(&ViolationType::UnknownParticipant));
        assert!(kinds.contains(&ViolationType::DuplicateAppearance));
        assert!(kinds.contains(&ViolationType::MissingParticipant));
    }

    #[test]
    fn test_display() {
        let mut s = Schedule::new(&["A", "B"]);
        s.push_week(week(&[("A", "B")]));
        assert_eq!(s.to_string(), "Week 1\n-------------\nA vs. B\n\n");
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new::<&str>(&[]);
        assert_eq!(s.week_count(), 0);
        assert_eq!(s.cycle_length(), 0);
        assert!(s.is_valid());
    }
}
