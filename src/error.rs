//! Error types for u-roundrobin

use thiserror::Error;

use crate::config::ConfigError;
use crate::validation::ValidationError;

/// Main error type for scheduling operations
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The request failed validation before scheduling started
    #[error("Invalid configuration: {}", join_messages(.0))]
    InvalidConfiguration(Vec<ValidationError>),

    /// The configured retry cap was reached without a complete schedule
    #[error("Gave up after {retries} retries without completing a schedule")]
    RetryLimitExceeded { retries: u64 },

    /// Scheduler configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidConfiguration(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for scheduling operations
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_request;

    #[test]
    fn test_invalid_configuration_message() {
        let errors = validate_request(&["A", "A", "B"], 0).unwrap_err();
        let message = ScheduleError::from(errors).to_string();
        assert!(message.starts_with("Invalid configuration: "));
        assert!(message.contains("Duplicate team name: A"));
        assert!(message.contains("; "));
    }

    #[test]
    fn test_retry_limit_message() {
        let err = ScheduleError::RetryLimitExceeded { retries: 5 };
        assert_eq!(
            err.to_string(),
            "Gave up after 5 retries without completing a schedule"
        );
    }
}
