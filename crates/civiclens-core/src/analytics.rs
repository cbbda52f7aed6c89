//! Analytics: portal-wide reference series plus a live per-department
//! summary of the scoped issue set.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::{Issue, Status};

/// Resolution rate for one department (reporting period totals).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepartmentResolution {
    pub department: &'static str,
    pub resolved: u32,
    pub total: u32,
    pub rate: f64,
}

/// Monthly SLA compliance against the target percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlaCompliance {
    pub month: &'static str,
    pub compliance: u32,
    pub target: u32,
}

/// Issue count per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTypeCount {
    #[serde(rename = "type")]
    pub issue_type: &'static str,
    pub count: u32,
}

/// Headline indicators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub avg_resolution_time: &'static str,
    pub avg_resolution_hours: u32,
    pub most_active_dept: &'static str,
    pub most_active_dept_count: u32,
    pub total_issues_this_month: u32,
    pub resolution_rate_overall: f64,
}

pub const SLA_TARGET: u32 = 85;

pub const DEPARTMENT_RESOLUTION: [DepartmentResolution; 6] = [
    DepartmentResolution {
        department: "Road Maintenance",
        resolved: 85,
        total: 100,
        rate: 85.0,
    },
    DepartmentResolution {
        department: "Sanitation",
        resolved: 92,
        total: 108,
        rate: 85.2,
    },
    DepartmentResolution {
        department: "Water & Sewage",
        resolved: 78,
        total: 95,
        rate: 82.1,
    },
    DepartmentResolution {
        department: "Parks & Recreation",
        resolved: 45,
        total: 52,
        rate: 86.5,
    },
    DepartmentResolution {
        department: "Public Safety",
        resolved: 67,
        total: 75,
        rate: 89.3,
    },
    DepartmentResolution {
        department: "Utilities",
        resolved: 34,
        total: 40,
        rate: 85.0,
    },
];

const fn month(month: &'static str, compliance: u32) -> SlaCompliance {
    SlaCompliance {
        month,
        compliance,
        target: SLA_TARGET,
    }
}

pub const SLA_COMPLIANCE: [SlaCompliance; 12] = [
    month("Jan", 78),
    month("Feb", 82),
    month("Mar", 79),
    month("Apr", 85),
    month("May", 88),
    month("Jun", 91),
    month("Jul", 87),
    month("Aug", 89),
    month("Sep", 92),
    month("Oct", 88),
    month("Nov", 90),
    month("Dec", 93),
];

pub const ISSUE_TYPES: [IssueTypeCount; 6] = [
    IssueTypeCount {
        issue_type: "Potholes",
        count: 145,
    },
    IssueTypeCount {
        issue_type: "Streetlights",
        count: 89,
    },
    IssueTypeCount {
        issue_type: "Waste Management",
        count: 76,
    },
    IssueTypeCount {
        issue_type: "Water Issues",
        count: 54,
    },
    IssueTypeCount {
        issue_type: "Public Safety",
        count: 43,
    },
    IssueTypeCount {
        issue_type: "Other",
        count: 32,
    },
];

pub const KPIS: Kpis = Kpis {
    avg_resolution_time: "4.2 days",
    avg_resolution_hours: 101,
    most_active_dept: "Sanitation",
    most_active_dept_count: 108,
    total_issues_this_month: 439,
    resolution_rate_overall: 86.1,
};

/// Months whose compliance met the target.
#[must_use]
pub fn months_meeting_target() -> Vec<&'static str> {
    SLA_COMPLIANCE
        .iter()
        .filter(|m| m.compliance >= m.target)
        .map(|m| m.month)
        .collect()
}

/// Live totals for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub department: String,
    pub total: usize,
    pub open: usize,
    pub resolved: usize,
}

impl DepartmentSummary {
    /// Resolved share in percent, 0 for an empty department.
    #[must_use]
    pub fn resolution_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.resolved as f64 * 100.0 / self.total as f64
        }
    }
}

/// Per-department totals, ordered by department name.
pub fn department_summary<'a, I>(issues: I) -> Vec<DepartmentSummary>
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut by_department: BTreeMap<&str, DepartmentSummary> = BTreeMap::new();
    for issue in issues {
        let entry = by_department
            .entry(issue.department.as_str())
            .or_insert_with(|| DepartmentSummary {
                department: issue.department.clone(),
                total: 0,
                open: 0,
                resolved: 0,
            });
        entry.total += 1;
        if issue.status == Status::Resolved {
            entry.resolved += 1;
        } else {
            entry.open += 1;
        }
    }
    by_department.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::sample_issues;

    #[test]
    fn test_department_summary_over_samples() {
        let summary = department_summary(sample_issues());
        let names: Vec<&str> = summary.iter().map(|s| s.department.as_str()).collect();
        assert_eq!(names, vec!["Public Works", "Sanitation Dept", "Water Department"]);

        let works = &summary[0];
        assert_eq!((works.total, works.open, works.resolved), (4, 3, 1));
        assert!((works.resolution_rate() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_summary() {
        assert!(department_summary(&Vec::<Issue>::new()).is_empty());
    }

    #[test]
    fn test_months_meeting_target() {
        let months = months_meeting_target();
        assert_eq!(months.first(), Some(&"Apr"));
        assert_eq!(months.len(), 9);
    }

    #[test]
    fn test_reference_series_shapes() {
        assert_eq!(SLA_COMPLIANCE.len(), 12);
        assert!(SLA_COMPLIANCE.iter().all(|m| m.target == SLA_TARGET));
        assert_eq!(ISSUE_TYPES.iter().map(|t| t.count).sum::<u32>(), 439);
    }
}
