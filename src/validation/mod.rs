//! Validation helpers for `civic`.
//!
//! These routines check issue records from a feed and return structured
//! validation errors without touching the data.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use civiclens_core::{Issue, LifecycleStep, StepState, ValidationError};

static ID_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[A-Z]{2,10}-[0-9]{1,8}$").ok());

/// Validates issue fields and invariants.
pub struct IssueValidator;

impl IssueValidator {
    /// Validate an issue and return all validation errors found.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any validation rules are violated.
    pub fn validate(issue: &Issue) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        // ID: Required, PREFIX-digits.
        if issue.id.trim().is_empty() {
            errors.push(ValidationError::new("id", "cannot be empty"));
        } else if !is_valid_id_format(&issue.id) {
            errors.push(ValidationError::new(
                "id",
                "invalid format (expected PREFIX-digits, e.g. ISS-001)",
            ));
        }

        // Title: Required, max 500 chars.
        if issue.title.trim().is_empty() {
            errors.push(ValidationError::new("title", "cannot be empty"));
        }
        if issue.title.len() > 500 {
            errors.push(ValidationError::new("title", "exceeds 500 characters"));
        }

        if issue.department.trim().is_empty() {
            errors.push(ValidationError::new("department", "cannot be empty"));
        }
        if issue.reported_by.trim().is_empty() {
            errors.push(ValidationError::new("reportedBy", "cannot be empty"));
        }

        if !(-90.0..=90.0).contains(&issue.lat) {
            errors.push(ValidationError::new("lat", "must be between -90 and 90"));
        }
        if !(-180.0..=180.0).contains(&issue.lng) {
            errors.push(ValidationError::new("lng", "must be between -180 and 180"));
        }

        if let Err(lifecycle_errors) = validate_lifecycle(&issue.lifecycle) {
            errors.extend(lifecycle_errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Check the ordering rules of a lifecycle timeline.
///
/// At most one step is current, completed steps never follow a current or
/// pending one, pending steps never precede the current one, and no stage
/// appears twice.
///
/// # Errors
///
/// Returns every rule violation found.
pub fn validate_lifecycle(steps: &[LifecycleStep]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut current_at: Option<usize> = None;
    let mut first_pending: Option<usize> = None;

    for (index, step) in steps.iter().enumerate() {
        let field = format!("lifecycle[{index}]");

        if !seen.insert(step.step) {
            errors.push(ValidationError::new(
                &field,
                format!("duplicate stage '{}'", step.step),
            ));
        }

        match step.status {
            StepState::Current => {
                if current_at.is_some() {
                    errors.push(ValidationError::new(&field, "more than one current step"));
                } else {
                    current_at = Some(index);
                }
                if first_pending.is_some() {
                    errors.push(ValidationError::new(
                        &field,
                        "current step follows a pending step",
                    ));
                }
            }
            StepState::Completed => {
                if current_at.is_some() || first_pending.is_some() {
                    errors.push(ValidationError::new(
                        &field,
                        format!("completed stage '{}' after an unfinished stage", step.step),
                    ));
                }
            }
            StepState::Pending => {
                first_pending.get_or_insert(index);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[must_use]
pub fn is_valid_id_format(id: &str) -> bool {
    ID_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(id))
}
