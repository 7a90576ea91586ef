//! Weekly matchup records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An unordered pairing of two teams.
///
/// The order of `first` and `second` only reflects which team picked
/// its opponent; it carries no home/away meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matchup {
    /// Team that picked.
    pub first: String,
    /// Team that was picked.
    pub second: String,
}

impl Matchup {
    /// Creates a matchup.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Whether `team` plays in this matchup.
    pub fn involves(&self, team: &str) -> bool {
        self.first == team || self.second == team
    }

    /// The other side of the matchup, if `team` plays in it.
    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        if self.first == team {
            Some(&self.second)
        } else if self.second == team {
            Some(&self.first)
        } else {
            None
        }
    }

    /// Order-independent key, smaller label first.
    pub fn key(&self) -> (&str, &str) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs. {}", self.first, self.second)
    }
}

/// All matchups of one week, in the order they were made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRecord {
    /// Matchups, `N/2` of them once the week is complete.
    pub matchups: Vec<Matchup>,
}

impl WeekRecord {
    /// Creates an empty week.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty week with room for `pairs` matchups.
    pub fn with_capacity(pairs: usize) -> Self {
        Self {
            matchups: Vec::with_capacity(pairs),
        }
    }

    /// Adds a matchup.
    pub fn push(&mut self, matchup: Matchup) {
        self.matchups.push(matchup);
    }

    /// Number of matchups.
    #[inline]
    pub fn len(&self) -> usize {
        self.matchups.len()
    }

    /// Whether no matchups were made.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }

    /// Opponent of `team` this week.
    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        self.matchups.iter().find_map(|m| m.opponent_of(team))
    }

    /// Every team label appearing this week, in matchup order.
    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.matchups
            .iter()
            .flat_map(|m| [m.first.as_str(), m.second.as_str()])
    }
}

impl fmt::Display for WeekRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for matchup in &self.matchups {
            writeln!(f, "{matchup}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_week() -> WeekRecord {
        let mut week = WeekRecord::with_capacity(2);
        week.push(Matchup::new("A", "C"));
        week.push(Matchup::new("D", "B"));
        week
    }

    #[test]
    fn test_matchup_opponent() {
        let m = Matchup::new("A", "B");
        assert_eq!(m.opponent_of("A"), Some("B"));
        assert_eq!(m.opponent_of("B"), Some("A"));
        assert_eq!(m.opponent_of("C"), None);
        assert!(m.involves("B"));
        assert!(!m.involves("C"));
    }

    #[test]
    fn test_matchup_key_is_unordered() {
        assert_eq!(Matchup::new("B", "A").key(), Matchup::new("A", "B").key());
        assert_eq!(Matchup::new("B", "A").key(), ("A", "B"));
    }

    #[test]
    fn test_week_opponent_of() {
        let week = sample_week();
        assert_eq!(week.len(), 2);
        assert_eq!(week.opponent_of("B"), Some("D"));
        assert_eq!(week.opponent_of("C"), Some("A"));
        assert_eq!(week.opponent_of("E"), None);
        assert_eq!(week.teams().collect::<Vec<_>>(), vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn test_week_display() {
        assert_eq!(sample_week().to_string(), "A vs. C\nD vs. B\n");
        assert!(WeekRecord::new().is_empty());
    }
}
