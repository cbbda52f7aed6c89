//! Error types for `civiclens-core`.
//!
//! The visibility pipeline itself is total; these errors come from the
//! collaborators around it (issue feeds, parsing, assignment).

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for civiclens-core operations.
#[derive(Error, Debug)]
pub enum CivicError {
    // === Issue Errors ===
    /// Issue with the specified ID was not found (or is outside the viewer's scope).
    #[error("Issue not found: {id}")]
    IssueNotFound { id: String },

    // === Parse Errors ===
    /// Invalid status value.
    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },

    /// Invalid priority value.
    #[error("Invalid priority: {priority} (expected Low, Medium, High or Critical)")]
    InvalidPriority { priority: String },

    /// Invalid role value.
    #[error("Invalid role: {role}")]
    InvalidRole { role: String },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation errors occurred.
    #[error("Validation errors: {errors:?}")]
    ValidationErrors { errors: Vec<ValidationError> },

    // === Assignment Errors ===
    /// The acting viewer may not perform the action.
    #[error("Not authorized: only administrators can {action}")]
    NotAuthorized { action: String },

    /// Staff member is not on the department roster.
    #[error("'{staff}' is not a staff member of {department}")]
    UnknownStaff { staff: String, department: String },

    // === JSONL Errors ===
    /// Failed to parse a line in a JSONL issue feed.
    #[error("JSONL parse error at line {line}: {reason}")]
    JsonlParse { line: usize, reason: String },

    /// File not found at the specified path.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl CivicError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            let err = &errors[0];
            Self::Validation {
                field: err.field.clone(),
                reason: err.message.clone(),
            }
        } else {
            Self::ValidationErrors { errors }
        }
    }
}

/// Result type using `CivicError`.
pub type Result<T> = std::result::Result<T, CivicError>;
