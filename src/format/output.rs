use serde::Serialize;

use civiclens_core::analytics::{
    DepartmentResolution, DepartmentSummary, IssueTypeCount, Kpis, SlaCompliance,
};
use civiclens_core::{Issue, IssueCounts, LifecycleStage, Role, Scope, User, ViewTag};

/// Issue listing for `list` and `dashboard`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueListing<'a> {
    pub view: ViewTag,
    pub title: &'static str,
    pub scope: Scope,
    #[serde(skip_serializing_if = "is_blank")]
    pub search: &'a str,
    pub sort: &'a str,
    pub counts: IssueCounts,
    pub issues: Vec<&'a Issue>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_blank(value: &&str) -> bool {
    value.is_empty()
}

/// Issue with its current lifecycle stage for `show`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDetails<'a> {
    #[serde(flatten)]
    pub issue: &'a Issue,
    pub current_stage: Option<LifecycleStage>,
}

impl<'a> From<&'a Issue> for IssueDetails<'a> {
    fn from(issue: &'a Issue) -> Self {
        Self {
            issue,
            current_stage: issue.current_stage(),
        }
    }
}

/// Scoped counts for `stats`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub scope: Scope,
    #[serde(flatten)]
    pub counts: IssueCounts,
    pub sla_percentage: Option<u32>,
}

/// Signed-in user for `whoami` and `login`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<&'a str>,
    pub scope: Scope,
}

impl<'a> From<&'a User> for Profile<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            name: user.display_name(),
            email: &user.email,
            role: user.role,
            department: user.department.as_deref(),
            scope: Scope::of(&user.viewer()),
        }
    }
}

/// Department roster for `staff`.
#[derive(Debug, Clone, Serialize)]
pub struct Roster<'a> {
    pub department: &'a str,
    pub staff: &'static [&'static str],
}

/// Analytics report for `analytics`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub kpis: &'static Kpis,
    pub department_resolution: &'static [DepartmentResolution],
    pub sla_compliance: &'static [SlaCompliance],
    pub sla_target: u32,
    pub months_meeting_target: Vec<&'static str>,
    pub issue_types: &'static [IssueTypeCount],
    pub departments: Vec<DepartmentSummary>,
}

/// Outcome of `validate`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub checked: usize,
    pub problems: Vec<IssueProblems>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueProblems {
    pub id: String,
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use civiclens_core::mock::sample_issues;
    use civiclens_core::{Viewer, authenticate, count_by_status};

    #[test]
    fn test_details_flatten_issue() {
        let value = serde_json::to_value(IssueDetails::from(&sample_issues()[0])).unwrap();
        assert_eq!(value["id"], "ISS-001");
        assert_eq!(value["reportedBy"], "John Smith");
        assert_eq!(value["currentStage"], "Acknowledged");
    }

    #[test]
    fn test_statistics_shape() {
        let stats = Statistics {
            scope: Scope::of(&Viewer::admin()),
            counts: count_by_status(sample_issues()),
            sla_percentage: Some(88),
        };
        let value = serde_json::to_value(stats).unwrap();
        assert_eq!(value["total"], 8);
        assert_eq!(value["inProgress"], 3);
        assert_eq!(value["slaPercentage"], 88);
    }

    #[test]
    fn test_profile_for_officer() {
        let user = authenticate("dept@civiclens.com", "dept123").unwrap();
        let value = serde_json::to_value(Profile::from(&user)).unwrap();
        assert_eq!(value["role"], "Department Officer");
        assert_eq!(value["department"], "Sanitation Dept");
        assert_eq!(value["name"], "Department Officer");
    }
}
