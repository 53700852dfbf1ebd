//! Input validation for simulation runs.
//!
//! The engine assumes well-formed input; these are the checks the
//! input-collection side is expected to enforce before invoking it.
//! Detects:
//! - Duplicate process IDs or display names
//! - Empty display names
//! - Non-positive burst times
//! - Negative arrival times or priorities

use std::collections::HashSet;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
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
    /// Two processes share the same display name.
    DuplicateName,
    /// A process has an empty display name.
    EmptyName,
    /// A process has a burst time <= 0.
    NonPositiveBurst,
    /// A process has a negative arrival time.
    NegativeArrival,
    /// A process has a negative priority.
    NegativePriority,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list before simulation.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. No duplicate or empty display names
/// 3. Every burst time is positive
/// 4. No negative arrival times or priorities
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    let mut names = HashSet::new();

    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Process '{}' has an empty name", p.id),
            ));
        } else if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate process name: {}", p.name),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has burst time {}", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has arrival time {}", p.id, p.arrival_time),
            ));
        }

        if p.priority < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePriority,
                format!("Process '{}' has priority {}", p.id, p.priority),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
