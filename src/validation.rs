//! Input validation for scheduling requests.
//!
//! Checks structural integrity of a task snapshot before scheduling.
//! Detects:
//! - Duplicate task IDs
//! - Tasks belonging to a different project than the one being scheduled
//! - Blank task titles
//!
//! The scheduler itself never rejects input (malformed configuration is
//! normalized to defaults), so these checks are for callers that want to
//! surface data problems instead of silently scheduling over them.

use std::collections::HashSet;

use thiserror::Error;
use uuid::Uuid;

use crate::scheduler::ScheduleRequest;

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
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task's project id differs from the request's project.
    ForeignTask,
    /// A task title is empty or whitespace.
    BlankTitle,
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
/// 1. No duplicate task IDs
/// 2. Every task belongs to the request's project
/// 3. No blank titles
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &ScheduleRequest) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen: HashSet<Uuid> = HashSet::new();

    for task in &request.tasks {
        if !seen.insert(task.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if task.project_id != request.project_id {
            errors.push(ValidationError::new(
                ValidationErrorKind::ForeignTask,
                format!(
                    "Task '{}' belongs to project {}, not {}",
                    task.id, task.project_id, request.project_id
                ),
            ));
        }

        if task.title.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankTitle,
                format!("Task '{}' has a blank title", task.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn sample_request() -> ScheduleRequest {
        let project_id = Uuid::new_v4();
        ScheduleRequest::new(
            project_id,
            vec![
                Task::new(project_id, "Write report"),
                Task::new(project_id, "Review PR"),
            ],
        )
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_request(&sample_request()).is_ok());
    }

    #[test]
    fn test_duplicate_task_id() {
        let mut request = sample_request();
        let dup = request.tasks[0].clone();
        request.tasks.push(dup);

        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_foreign_task() {
        let mut request = sample_request();
        request.tasks.push(Task::new(Uuid::new_v4(), "Stray"));

        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ForeignTask));
    }

    #[test]
    fn test_blank_title() {
        let mut request = sample_request();
        request.tasks.push(Task::new(request.project_id, "   "));

        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::BlankTitle));
    }

    #[test]
    fn test_multiple_errors_accumulate() {
        let mut request = sample_request();
        let dup = request.tasks[0].clone();
        request.tasks.push(dup);
        request.tasks.push(Task::new(Uuid::new_v4(), ""));

        let errors = validate_request(&request).unwrap_err();
        assert!(errors.len() >= 3); // duplicate + foreign + blank
    }

    #[test]
    fn test_empty_request_is_valid() {
        let request = ScheduleRequest::new(Uuid::new_v4(), Vec::new());
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::new(ValidationErrorKind::BlankTitle, "Task 'x' has a blank title");
        assert_eq!(err.to_string(), "Task 'x' has a blank title");
    }
}
