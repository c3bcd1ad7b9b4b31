//! Input validation for scheduling runs.
//!
//! Checks the process list and policy configuration before simulation.
//! Detects:
//! - Empty or duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Process lists whose schedule could run past `i64::MAX`
//! - Non-positive round robin quanta
//!
//! Front ends are expected to reject bad input themselves; policies run
//! these checks again so that the simulation core never sees it.

use std::collections::HashSet;

use log::warn;
use thiserror::Error;

use crate::error::SchedulingError;
use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty ID.
    EmptyId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no CPU time (or less).
    NonPositiveBurst,
    /// Latest arrival plus total burst exceeds `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. Every ID is non-empty
/// 2. No duplicate IDs
/// 3. `arrival_time >= 0`
/// 4. `burst_time > 0`
/// 5. `max(arrival_time) + sum(burst_time)` fits in `i64`
///
/// No policy can finish later than the bound in check 5, so every clock
/// value and per-process metric of a validated run fits in `i64`.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Process with empty ID",
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst time {}", p.id, p.burst_time),
            ));
        }
    }

    if schedule_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time exceeds the representable time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the completion tick of any work-conserving schedule.
///
/// `None` if the bound overflows `i64`.
fn schedule_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)))
}

/// Validates a round robin time quantum.
pub fn validate_quantum(quantum: i64) -> Result<(), SchedulingError> {
    if quantum <= 0 {
        warn!("rejecting round robin quantum {quantum}");
        return Err(SchedulingError::InvalidConfiguration(format!(
            "time quantum must be positive, got {quantum}"
        )));
    }
    Ok(())
}

/// Runs `validate_processes` and lifts failures into `SchedulingError`.
pub(crate) fn check_processes(processes: &[Process]) -> Result<(), SchedulingError> {
    validate_processes(processes).map_err(|errors| {
        warn!("rejecting process list: {} validation error(s)", errors.len());
        SchedulingError::InvalidProcess(errors)
    })
}
