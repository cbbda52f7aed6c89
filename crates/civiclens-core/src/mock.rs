//! Built-in sample issue set.
//!
//! Eight civic issues across three departments. Built once on first access
//! and never modified.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::model::{Issue, LifecycleStage, LifecycleStep, Priority, Status, StepState};

static SAMPLE_ISSUES: Lazy<Vec<Issue>> = Lazy::new(build_sample_issues);

/// The shared sample issue set.
#[must_use]
pub fn sample_issues() -> &'static [Issue] {
    &SAMPLE_ISSUES
}

fn ts(value: &str) -> DateTime<Utc> {
    value.parse().unwrap_or_default()
}

fn done(stage: LifecycleStage, at: &str) -> LifecycleStep {
    LifecycleStep {
        timestamp: Some(ts(at)),
        ..LifecycleStep::new(stage, StepState::Completed)
    }
}

fn current(stage: LifecycleStage, at: Option<&str>) -> LifecycleStep {
    LifecycleStep {
        timestamp: at.map(ts),
        ..LifecycleStep::new(stage, StepState::Current)
    }
}

const fn pending(stage: LifecycleStage) -> LifecycleStep {
    LifecycleStep::new(stage, StepState::Pending)
}

fn assigned(at: &str, staff: &str) -> LifecycleStep {
    LifecycleStep {
        assigned_to: Some(staff.to_string()),
        ..done(LifecycleStage::Assigned, at)
    }
}

fn with_notes(mut step: LifecycleStep, notes: &str) -> LifecycleStep {
    step.notes = Some(notes.to_string());
    step
}

/// Lifecycle of an issue that has been acknowledged but not assigned.
fn acknowledged(reported: &str, acked: &str) -> Vec<LifecycleStep> {
    vec![
        done(LifecycleStage::Reported, reported),
        current(LifecycleStage::Acknowledged, Some(acked)),
        pending(LifecycleStage::Assigned),
        pending(LifecycleStage::Resolved),
        pending(LifecycleStage::CitizenVerified),
    ]
}

#[allow(clippy::too_many_lines)]
fn build_sample_issues() -> Vec<Issue> {
    use LifecycleStage::{Acknowledged, CitizenVerified, Reported, Resolved};

    vec![
        Issue {
            id: "ISS-001".into(),
            title: "Broken streetlight on Main Street".into(),
            description: "The streetlight at the intersection of Main St and 1st Ave has been out for 3 days".into(),
            department: "Public Works".into(),
            status: Status::Pending,
            priority: Priority::High,
            sla: "Overdue".into(),
            lat: 28.6139,
            lng: 77.209,
            reported_by: "John Smith".into(),
            reported_at: ts("2024-01-15T10:30:00Z"),
            assigned_to: None,
            lifecycle: acknowledged("2024-01-15T10:30:00Z", "2024-01-15T11:00:00Z"),
        },
        Issue {
            id: "ISS-002".into(),
            title: "Large pothole on Oak Avenue".into(),
            description: "Deep pothole causing vehicle damage near Oak Ave and 3rd Street".into(),
            department: "Public Works".into(),
            status: Status::InProgress,
            priority: Priority::Critical,
            sla: "2h left".into(),
            lat: 19.076,
            lng: 72.8777,
            reported_by: "Sarah Johnson".into(),
            reported_at: ts("2024-01-14T14:20:00Z"),
            assigned_to: Some("Mike Wilson".into()),
            lifecycle: vec![
                done(Reported, "2024-01-14T14:20:00Z"),
                done(Acknowledged, "2024-01-14T14:45:00Z"),
                assigned("2024-01-14T15:30:00Z", "Mike Wilson"),
                current(Resolved, None),
                pending(CitizenVerified),
            ],
        },
        Issue {
            id: "ISS-003".into(),
            title: "Missed garbage collection on Elm Street".into(),
            description: "Garbage was not collected on scheduled pickup day".into(),
            department: "Sanitation Dept".into(),
            status: Status::Resolved,
            priority: Priority::Medium,
            sla: "Closed".into(),
            lat: 12.9716,
            lng: 77.5946,
            reported_by: "Robert Davis".into(),
            reported_at: ts("2024-01-13T08:15:00Z"),
            assigned_to: Some("Lisa Chen".into()),
            lifecycle: vec![
                done(Reported, "2024-01-13T08:15:00Z"),
                done(Acknowledged, "2024-01-13T08:30:00Z"),
                assigned("2024-01-13T09:00:00Z", "Lisa Chen"),
                with_notes(
                    done(Resolved, "2024-01-13T14:30:00Z"),
                    "Collection completed",
                ),
                current(CitizenVerified, None),
            ],
        },
        Issue {
            id: "ISS-004".into(),
            title: "Overflowing trash bin in Central Park".into(),
            description: "Trash bin near the playground is overflowing and attracting pests".into(),
            department: "Sanitation Dept".into(),
            status: Status::Pending,
            priority: Priority::Medium,
            sla: "4h left".into(),
            lat: 13.0827,
            lng: 80.2707,
            reported_by: "Emily Brown".into(),
            reported_at: ts("2024-01-15T16:45:00Z"),
            assigned_to: None,
            lifecycle: acknowledged("2024-01-15T16:45:00Z", "2024-01-15T17:00:00Z"),
        },
        Issue {
            id: "ISS-005".into(),
            title: "Water main leak on Pine Street".into(),
            description: "Water is flooding the street from a broken main".into(),
            department: "Water Department".into(),
            status: Status::InProgress,
            priority: Priority::Critical,
            sla: "1h left".into(),
            lat: 22.5726,
            lng: 88.3639,
            reported_by: "David Wilson".into(),
            reported_at: ts("2024-01-15T12:00:00Z"),
            assigned_to: Some("Tom Rodriguez".into()),
            lifecycle: vec![
                done(Reported, "2024-01-15T12:00:00Z"),
                done(Acknowledged, "2024-01-15T12:05:00Z"),
                assigned("2024-01-15T12:15:00Z", "Tom Rodriguez"),
                with_notes(current(Resolved, None), "Repair crew on site"),
                pending(CitizenVerified),
            ],
        },
        Issue {
            id: "ISS-006".into(),
            title: "Graffiti on public building".into(),
            description: "Vandalism on the side of the community center building".into(),
            department: "Public Works".into(),
            status: Status::Pending,
            priority: Priority::Low,
            sla: "6h left".into(),
            lat: 17.385,
            lng: 78.4867,
            reported_by: "Maria Garcia".into(),
            reported_at: ts("2024-01-15T09:30:00Z"),
            assigned_to: None,
            lifecycle: acknowledged("2024-01-15T09:30:00Z", "2024-01-15T10:00:00Z"),
        },
        Issue {
            id: "ISS-007".into(),
            title: "Blocked storm drain causing flooding".into(),
            description: "Storm drain blocked with debris causing street flooding during rain".into(),
            department: "Public Works".into(),
            status: Status::Resolved,
            priority: Priority::High,
            sla: "Closed".into(),
            lat: 18.5204,
            lng: 73.8567,
            reported_by: "James Miller".into(),
            reported_at: ts("2024-01-12T11:20:00Z"),
            assigned_to: Some("Mike Wilson".into()),
            lifecycle: vec![
                done(Reported, "2024-01-12T11:20:00Z"),
                done(Acknowledged, "2024-01-12T11:30:00Z"),
                assigned("2024-01-12T12:00:00Z", "Mike Wilson"),
                with_notes(
                    done(Resolved, "2024-01-12T16:45:00Z"),
                    "Drain cleared and tested",
                ),
                done(CitizenVerified, "2024-01-13T08:00:00Z"),
            ],
        },
        Issue {
            id: "ISS-008".into(),
            title: "Illegal dumping in alley".into(),
            description: "Large furniture and appliances dumped illegally behind commercial buildings".into(),
            department: "Sanitation Dept".into(),
            status: Status::InProgress,
            priority: Priority::Medium,
            sla: "3h left".into(),
            lat: 23.0225,
            lng: 72.5714,
            reported_by: "Jennifer Lee".into(),
            reported_at: ts("2024-01-14T13:15:00Z"),
            assigned_to: Some("Lisa Chen".into()),
            lifecycle: vec![
                done(Reported, "2024-01-14T13:15:00Z"),
                done(Acknowledged, "2024-01-14T13:30:00Z"),
                assigned("2024-01-14T14:00:00Z", "Lisa Chen"),
                with_notes(current(Resolved, None), "Cleanup crew scheduled"),
                pending(CitizenVerified),
            ],
        },
    ]
}
