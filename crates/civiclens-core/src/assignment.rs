//! Simulated issue assignment.
//!
//! Assignment is validated and reported but never written back; issue
//! records stay immutable.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use tracing::info;

use crate::error::{CivicError, Result};
use crate::model::{Issue, Priority, Status, Viewer};

const PUBLIC_WORKS: &[&str] = &["Mike Wilson", "Sarah Thompson", "David Chen"];
const SANITATION: &[&str] = &["Lisa Chen", "Robert Martinez", "Jennifer Kim"];
const WATER: &[&str] = &["Tom Rodriguez", "Maria Garcia", "James Miller"];

/// Departments with a staff roster, in display order.
pub const DEPARTMENTS: [&str; 3] = ["Public Works", "Sanitation Dept", "Water Department"];

/// Staff members who can take issues for a department.
///
/// Unknown departments have no staff.
#[must_use]
pub fn staff_for(department: &str) -> &'static [&'static str] {
    match department {
        "Public Works" => PUBLIC_WORKS,
        "Sanitation Dept" => SANITATION,
        "Water Department" => WATER,
        _ => &[],
    }
}

/// Requested assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRequest {
    pub assigned_to: String,
    pub priority: Priority,
}

impl AssignmentRequest {
    #[must_use]
    pub fn new(assigned_to: impl Into<String>) -> Self {
        Self {
            assigned_to: assigned_to.into(),
            priority: Priority::default(),
        }
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Outcome of an accepted assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentReceipt {
    pub issue_id: String,
    pub assigned_to: String,
    pub priority: Priority,
    pub assigned_at: DateTime<Utc>,
}

impl fmt::Display for AssignmentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Issue {} has been assigned to {} with {} priority",
            self.issue_id, self.assigned_to, self.priority
        )
    }
}

/// Validate and record (log) an assignment.
///
/// # Errors
///
/// Returns `NotAuthorized` unless the viewer is an admin, `Validation` if the
/// issue is not pending, and `UnknownStaff` if the staff member is not on the
/// issue department's roster.
pub fn assign(
    issue: &Issue,
    viewer: &Viewer,
    request: &AssignmentRequest,
) -> Result<AssignmentReceipt> {
    if !viewer.is_admin() {
        return Err(CivicError::NotAuthorized {
            action: "assign issues to staff members".to_string(),
        });
    }

    if issue.status != Status::Pending {
        return Err(CivicError::validation(
            "status",
            format!("{} is {}; only pending issues can be assigned", issue.id, issue.status),
        ));
    }

    let staff = request.assigned_to.trim();
    if !staff_for(&issue.department).contains(&staff) {
        return Err(CivicError::UnknownStaff {
            staff: staff.to_string(),
            department: issue.department.clone(),
        });
    }

    let receipt = AssignmentReceipt {
        issue_id: issue.id.clone(),
        assigned_to: staff.to_string(),
        priority: request.priority,
        assigned_at: Utc::now(),
    };
    info!(
        issue = %receipt.issue_id,
        assigned_to = %receipt.assigned_to,
        priority = %receipt.priority,
        "issue assigned"
    );
    Ok(receipt)
}
