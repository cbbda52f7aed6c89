//! Core data types for civiclens-core.
//!
//! Serde names follow the dashboard's JSON feed (camelCase fields,
//! `"In-Progress"`, `"Department Officer"`, `"Citizen Verified"`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CivicError;

/// Issue workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Pending,
    #[serde(rename = "In-Progress")]
    InProgress,
    Resolved,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Resolved];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In-Progress",
            Self::Resolved => "Resolved",
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CivicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" | "in_progress" | "inprogress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(CivicError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

/// Issue priority. Variant order is the ranking order (Critical highest).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Sort rank: Critical 4, High 3, Medium 2, Low 1.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CivicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(CivicError::InvalidPriority {
                priority: s.to_string(),
            }),
        }
    }
}

/// Viewer role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[serde(rename = "Department Officer")]
    DepartmentOfficer,
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::DepartmentOfficer => "Department Officer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CivicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "department officer" | "department-officer" | "department_officer" | "officer" => {
                Ok(Self::DepartmentOfficer)
            }
            _ => Err(CivicError::InvalidRole {
                role: s.to_string(),
            }),
        }
    }
}

/// The fixed five-stage resolution process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LifecycleStage {
    Reported,
    Acknowledged,
    Assigned,
    Resolved,
    #[serde(rename = "Citizen Verified")]
    CitizenVerified,
}

impl LifecycleStage {
    pub const ALL: [Self; 5] = [
        Self::Reported,
        Self::Acknowledged,
        Self::Assigned,
        Self::Resolved,
        Self::CitizenVerified,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reported => "Reported",
            Self::Acknowledged => "Acknowledged",
            Self::Assigned => "Assigned",
            Self::Resolved => "Resolved",
            Self::CitizenVerified => "Citizen Verified",
        }
    }
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress marker on a lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Current,
    Pending,
}

impl StepState {
    /// Badge label shown next to a step.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Current => "In Progress",
            Self::Pending => "Pending",
        }
    }
}

/// One stage in an issue's lifecycle timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleStep {
    pub step: LifecycleStage,
    pub status: StepState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LifecycleStep {
    #[must_use]
    pub const fn new(step: LifecycleStage, status: StepState) -> Self {
        Self {
            step,
            status,
            timestamp: None,
            assigned_to: None,
            notes: None,
        }
    }
}

/// A civic complaint record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Stable identifier (e.g., "ISS-001").
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Handling department; drives scoping.
    pub department: String,

    pub status: Status,

    pub priority: Priority,

    /// Display-only service-level label ("Overdue", "2h left", "Closed").
    #[serde(default)]
    pub sla: String,

    pub lat: f64,
    pub lng: f64,

    pub reported_by: String,

    /// Default sort key (newest first).
    pub reported_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub lifecycle: Vec<LifecycleStep>,
}

impl Issue {
    /// The stage currently in progress, if any.
    #[must_use]
    pub fn current_stage(&self) -> Option<LifecycleStage> {
        self.lifecycle
            .iter()
            .find(|step| step.status == StepState::Current)
            .map(|step| step.step)
    }
}

/// The acting user, reduced to what scoping needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Viewer {
    #[must_use]
    pub const fn admin() -> Self {
        Self {
            role: Role::Admin,
            department: None,
        }
    }

    #[must_use]
    pub fn officer(department: impl Into<String>) -> Self {
        Self {
            role: Role::DepartmentOfficer,
            department: Some(department.into()),
        }
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_names() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"In-Progress\""
        );
        let parsed: Status = serde_json::from_str("\"Resolved\"").unwrap();
        assert_eq!(parsed, Status::Resolved);
    }

    #[test]
    fn test_status_from_str_variants() {
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("IN_PROGRESS".parse::<Status>().unwrap(), Status::InProgress);
        assert!("closed".parse::<Status>().is_err());
    }

    #[test]
    fn test_priority_rank_and_order() {
        assert_eq!(Priority::Critical.rank(), 4);
        assert_eq!(Priority::Low.rank(), 1);
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::Medium > Priority::Low);
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("critical".parse::<Priority>().unwrap(), Priority::Critical);
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert!(matches!(err, CivicError::InvalidPriority { .. }));
    }

    #[test]
    fn test_role_serde_and_parse() {
        assert_eq!(
            serde_json::to_string(&Role::DepartmentOfficer).unwrap(),
            "\"Department Officer\""
        );
        assert_eq!(
            "Department Officer".parse::<Role>().unwrap(),
            Role::DepartmentOfficer
        );
        assert!("mayor".parse::<Role>().is_err());
    }

    #[test]
    fn test_lifecycle_step_serde() {
        let json = r#"{"step":"Citizen Verified","status":"current"}"#;
        let step: LifecycleStep = serde_json::from_str(json).unwrap();
        assert_eq!(step.step, LifecycleStage::CitizenVerified);
        assert_eq!(step.status, StepState::Current);
        assert_eq!(serde_json::to_string(&step).unwrap(), json);
    }

    #[test]
    fn test_issue_camel_case_fields() {
        let json = r#"{
            "id": "ISS-100",
            "title": "Fallen tree",
            "department": "Public Works",
            "status": "Pending",
            "priority": "High",
            "lat": 1.5,
            "lng": 2.5,
            "reportedBy": "Ann",
            "reportedAt": "2024-01-15T10:30:00Z"
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.reported_by, "Ann");
        assert!(issue.assigned_to.is_none());
        assert!(issue.lifecycle.is_empty());
        assert!(issue.current_stage().is_none());
    }
}
