//! Input validation for round-robin requests.
//!
//! Checks the roster and period counts before scheduling. Detects:
//! - Empty rosters
//! - Odd participant counts (including a lone participant)
//! - Duplicate team names
//! - Blank team names
//! - Zero weeks or zero trials
//!
//! All problems are collected; validation does not stop at the first.

use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No participants were given.
    EmptyRoster,
    /// Pairings need an even number of participants.
    OddParticipantCount,
    /// Two participants share the same name.
    DuplicateId,
    /// A participant name is empty or whitespace.
    BlankName,
    /// The week count is zero.
    ZeroWeeks,
    /// The trial count is zero.
    ZeroTrials,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a scheduling request.
///
/// Checks:
/// 1. At least one participant
/// 2. An even participant count
/// 3. No duplicate names
/// 4. No blank names
/// 5. At least one week
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request<S: AsRef<str>>(teams: &[S], weeks: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if teams.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "At least two teams are required",
        ));
    } else if teams.len() % 2 != 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::OddParticipantCount,
            format!("Team count must be even, got {}", teams.len()),
        ));
    }

    let mut names = HashSet::new();
    for team in teams {
        let name = team.as_ref();
        if name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                "Team names must not be blank",
            ));
        } else if !names.insert(name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate team name: {name}"),
            ));
        }
    }

    if weeks == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroWeeks,
            "Week count must be greater than 0",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the trial count for statistics runs.
pub fn validate_trials(trials: usize) -> ValidationResult {
    if trials == 0 {
        Err(vec![ValidationError::new(
            ValidationErrorKind::ZeroTrials,
            "Trial count must be greater than 0",
        )])
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_request(&["A", "B", "C", "D"], 3).is_ok());
        assert!(validate_request(&["A", "B"], 1).is_ok());
    }

    #[test]
    fn test_empty_roster() {
        let teams: [&str; 0] = [];
        assert_eq!(
            kinds(validate_request(&teams, 3)),
            vec![ValidationErrorKind::EmptyRoster]
        );
    }

    #[test]
    fn test_odd_count() {
        assert_eq!(
            kinds(validate_request(&["A"], 3)),
            vec![ValidationErrorKind::OddParticipantCount]
        );
        assert_eq!(
            kinds(validate_request(&["A", "B", "C"], 3)),
            vec![ValidationErrorKind::OddParticipantCount]
        );
    }

    #[test]
    fn test_duplicate_name() {
        let errors = validate_request(&["A", "B", "A", "C"], 3).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert_eq!(errors[0].to_string(), "Duplicate team name: A");
    }

    #[test]
    fn test_blank_name() {
        assert_eq!(
            kinds(validate_request(&["A", "  "], 1)),
            vec![ValidationErrorKind::BlankName]
        );
    }

    #[test]
    fn test_multiple_errors() {
        let errors = validate_request(&["A", "A", "B"], 0).unwrap_err();
        assert!(errors.len() >= 3);
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::ZeroWeeks));
    }

    #[test]
    fn test_trials() {
        assert!(validate_trials(1).is_ok());
        assert_eq!(kinds(validate_trials(0)), vec![ValidationErrorKind::ZeroTrials]);
    }
}
