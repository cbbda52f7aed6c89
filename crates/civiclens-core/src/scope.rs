//! Role-based issue scoping.
//!
//! Decides which issues a viewer may see at all. Admins see everything;
//! department officers see their own department's issues.

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::model::{Issue, Role, Viewer};

/// Visibility scope derived from a viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "department", rename_all = "snake_case")]
pub enum Scope {
    AllDepartments,
    Department(String),
}

impl Scope {
    /// Compute the scope for a viewer.
    ///
    /// An officer without a department falls back to `AllDepartments`.
    #[must_use]
    pub fn of(viewer: &Viewer) -> Self {
        match (viewer.role, viewer.department.as_deref()) {
            (Role::Admin, _) | (Role::DepartmentOfficer, None) => Self::AllDepartments,
            (Role::DepartmentOfficer, Some(department)) => Self::Department(department.to_string()),
        }
    }

    #[must_use]
    pub fn admits(&self, issue: &Issue) -> bool {
        match self {
            Self::AllDepartments => true,
            Self::Department(department) => issue.department == *department,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllDepartments => f.write_str("All Departments"),
            Self::Department(department) => write!(f, "{department} Only"),
        }
    }
}

/// Return the issues the viewer is permitted to see, in their original order.
#[must_use]
pub fn resolve_scope<'a>(issues: &'a [Issue], viewer: &Viewer) -> Vec<&'a Issue> {
    if viewer.role == Role::DepartmentOfficer && viewer.department.is_none() {
        warn!("department officer has no department; showing all issues");
    }

    let scope = Scope::of(viewer);
    let scoped: Vec<&Issue> = issues.iter().filter(|issue| scope.admits(issue)).collect();
    debug!(%scope, total = issues.len(), visible = scoped.len(), "resolved scope");
    scoped
}
