//! Error types for scheduling runs.

use thiserror::Error;

use crate::validation::ValidationError;

/// Reasons a scheduling run is refused.
///
/// Failures are deterministic: re-running with the same input fails the
/// same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulingError {
    /// One or more processes are malformed (bad times, duplicate IDs).
    #[error("invalid process input: {}", join_messages(.0))]
    InvalidProcess(Vec<ValidationError>),

    /// Policy configuration is unusable (e.g., non-positive quantum).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl SchedulingError {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidProcess(errors) => errors,
            Self::InvalidConfiguration(_) => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_process_display_joins_messages() {
        let err = SchedulingError::InvalidProcess(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: P1"),
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "Process 'P2' has burst 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid process input: Duplicate process ID: P1; Process 'P2' has burst 0"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_invalid_configuration_display() {
        let err = SchedulingError::InvalidConfiguration("quantum must be positive".into());
        assert_eq!(err.to_string(), "invalid configuration: quantum must be positive");
        assert!(err.validation_errors().is_empty());
    }
}
