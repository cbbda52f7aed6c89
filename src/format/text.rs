//! Text formatting functions for `civic`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Status icons (○ ◐ ✓)
//! - Priority and SLA badges
//! - Issue lines, padded tables and the listing header
//! - Lifecycle timelines

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use civiclens_core::{Issue, IssueCounts, LifecycleStep, Priority, Role, Status, Viewer};

/// Shown in place of the table when the view is empty.
pub const EMPTY_MESSAGE: &str = "No issues found matching your criteria";

/// Status icon characters.
pub mod icons {
    /// Pending - waiting for action (hollow circle).
    pub const PENDING: &str = "○";
    /// In progress - crew assigned (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Resolved (checkmark).
    pub const RESOLVED: &str = "✓";
}

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: Status) -> &'static str {
    match status {
        Status::Pending => icons::PENDING,
        Status::InProgress => icons::IN_PROGRESS,
        Status::Resolved => icons::RESOLVED,
    }
}

/// Format priority as a bracketed badge, e.g. `[High]`.
#[must_use]
pub fn format_priority(priority: Priority) -> String {
    format!("[{priority}]")
}

/// Urgency class of an SLA label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlaBadge {
    Overdue,
    Closed,
    /// "Nh left".
    Due,
    Other,
}

impl SlaBadge {
    #[must_use]
    pub fn classify(sla: &str) -> Self {
        if sla == "Overdue" {
            Self::Overdue
        } else if sla == "Closed" {
            Self::Closed
        } else if sla.contains("left") {
            Self::Due
        } else {
            Self::Other
        }
    }

    /// Marker appended to SLA cells that need attention.
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        match self {
            Self::Overdue => "!",
            Self::Due | Self::Closed | Self::Other => "",
        }
    }
}

/// Format a single-line issue summary.
///
/// Format: `{icon} {id} [{priority}] {title} ({department})`
#[must_use]
pub fn format_issue_line(issue: &Issue) -> String {
    format!(
        "{} {} {} {} ({})",
        format_status_icon(issue.status),
        issue.id,
        format_priority(issue.priority),
        issue.title,
        issue.department,
    )
}

/// Left-align `text` to `width` display columns.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let mut out = text.to_string();
    out.push_str(&" ".repeat(width.saturating_sub(text.width())));
    out
}

fn table_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Render an aligned table with a dashed rule under the headers.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.width());
            }
        }
    }

    let mut out = String::new();
    out.push_str(&table_line(headers.iter().copied(), &widths));
    out.push('\n');
    let rules: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&table_line(rules.iter().map(String::as_str), &widths));
    for row in rows {
        out.push('\n');
        out.push_str(&table_line(row.iter().map(String::as_str), &widths));
    }
    out
}

/// The issue listing table, or [`EMPTY_MESSAGE`].
#[must_use]
pub fn render_issue_table(issues: &[&Issue]) -> String {
    if issues.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }
    let rows: Vec<Vec<String>> = issues
        .iter()
        .map(|issue| {
            let sla = format!("{}{}", issue.sla, SlaBadge::classify(&issue.sla).marker());
            vec![
                issue.id.clone(),
                issue.status.to_string(),
                issue.priority.to_string(),
                sla,
                issue.department.clone(),
                issue.title.clone(),
            ]
        })
        .collect();
    render_table(
        &["ID", "STATUS", "PRIORITY", "SLA", "DEPARTMENT", "TITLE"],
        &rows,
    )
}

/// Sub-heading describing whose issues are shown.
#[must_use]
pub fn describe_scope(viewer: &Viewer) -> String {
    match (viewer.role, viewer.department.as_deref()) {
        (Role::DepartmentOfficer, Some(department)) => format!("Showing issues for {department}"),
        _ => "Overview of all civic issues in the system".to_string(),
    }
}

#[must_use]
pub fn format_counts(counts: &IssueCounts) -> String {
    format!(
        "Total: {}  Pending: {}  In-Progress: {}  Resolved: {}",
        counts.total, counts.pending, counts.in_progress, counts.resolved
    )
}

/// Title, scope line and counts.
#[must_use]
pub fn render_header(title: &str, viewer: &Viewer, counts: &IssueCounts) -> String {
    format!(
        "{title}\n{}\n{}",
        describe_scope(viewer),
        format_counts(counts)
    )
}

fn format_step(step: &LifecycleStep) -> String {
    let badge = format!("[{}]", step.status.label());
    let when = step
        .timestamp
        .map(|ts| ts.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_default();
    let mut extras = Vec::new();
    if let Some(staff) = &step.assigned_to {
        extras.push(format!("assigned to {staff}"));
    }
    if let Some(notes) = &step.notes {
        extras.push(notes.clone());
    }
    format!(
        "{}  {}  {}  {}",
        pad(&badge, 13),
        pad(step.step.as_str(), 16),
        pad(&when, 20),
        extras.join("; ")
    )
    .trim_end()
    .to_string()
}

/// One line per lifecycle step.
#[must_use]
pub fn render_timeline(steps: &[LifecycleStep]) -> String {
    steps
        .iter()
        .map(format_step)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full detail block for `civic show`.
#[must_use]
pub fn render_issue_details(issue: &Issue) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format_issue_line(issue));
    if !issue.description.is_empty() {
        let _ = writeln!(out, "\n{}\n", issue.description);
    }
    let _ = writeln!(out, "Status:      {}", issue.status);
    let _ = writeln!(out, "SLA:         {}", issue.sla);
    let _ = writeln!(out, "Reported by: {}", issue.reported_by);
    let _ = writeln!(
        out,
        "Reported at: {}",
        issue.reported_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(
        out,
        "Assigned to: {}",
        issue.assigned_to.as_deref().unwrap_or("Unassigned")
    );
    let _ = writeln!(out, "Location:    {:.4}, {:.4}", issue.lat, issue.lng);
    if !issue.lifecycle.is_empty() {
        let _ = writeln!(out, "\nLifecycle:");
        out.push_str(&render_timeline(&issue.lifecycle));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use civiclens_core::mock::sample_issues;
    use civiclens_core::{SortKey, ViewTag, count_by_status, project, resolve_scope};

    fn issue(id: &str) -> &'static Issue {
        sample_issues().iter().find(|i| i.id == id).unwrap()
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(format_status_icon(Status::Pending), "○");
        assert_eq!(format_status_icon(Status::InProgress), "◐");
        assert_eq!(format_status_icon(Status::Resolved), "✓");
    }

    #[test]
    fn test_sla_badges() {
        assert_eq!(SlaBadge::classify("Overdue"), SlaBadge::Overdue);
        assert_eq!(SlaBadge::classify("Closed"), SlaBadge::Closed);
        assert_eq!(SlaBadge::classify("2h left"), SlaBadge::Due);
        assert_eq!(SlaBadge::classify("tomorrow"), SlaBadge::Other);
    }

    #[test]
    fn test_format_issue_line() {
        assert_eq!(
            format_issue_line(issue("ISS-002")),
            "◐ ISS-002 [Critical] Large pothole on Oak Avenue (Public Works)"
        );
    }

    #[test]
    fn test_pad_counts_display_width() {
        assert_eq!(pad("○", 3), "○  ");
        assert_eq!(pad("abcdef", 3), "abcdef");
    }

    proptest::proptest! {
        #[test]
        fn prop_pad_reaches_width(
            text in "[a-zA-Z0-9 ○◐✓漢字]{0,12}",
            width in 0_usize..24,
        ) {
            let padded = pad(&text, width);
            proptest::prop_assert_eq!(padded.width(), width.max(text.width()));
            proptest::prop_assert!(padded.starts_with(&text));
        }

        #[test]
        fn prop_table_rows_share_column_starts(
            cells in proptest::collection::vec("[a-z]{1,8}", 1..6)
        ) {
            let rows: Vec<Vec<String>> = cells
                .iter()
                .map(|c| vec![c.clone(), "x".to_string()])
                .collect();
            let table = render_table(&["NAME", "V"], &rows);
            let first_column = table.lines().next().unwrap().find('V').unwrap();
            for line in table.lines().skip(2) {
                proptest::prop_assert_eq!(line.rfind('x'), Some(first_column));
            }
        }
    }

    #[test]
    fn test_sanitation_table() {
        let viewer = Viewer::officer("Sanitation Dept");
        let scoped = resolve_scope(sample_issues(), &viewer);
        let rows = project(&scoped, ViewTag::All, "", &SortKey::ReportedAt);
        insta::assert_snapshot!(render_issue_table(&rows), @r"
        ID       STATUS       PRIORITY  SLA      DEPARTMENT       TITLE
        -------  -----------  --------  -------  ---------------  ---------------------------------------
        ISS-004  Pending      Medium    4h left  Sanitation Dept  Overflowing trash bin in Central Park
        ISS-008  In-Progress  Medium    3h left  Sanitation Dept  Illegal dumping in alley
        ISS-003  Resolved     Medium    Closed   Sanitation Dept  Missed garbage collection on Elm Street
        ");
    }

    #[test]
    fn test_overdue_marker_in_table() {
        let table = render_issue_table(&[issue("ISS-001")]);
        assert!(table.contains("Overdue!"));
    }

    #[test]
    fn test_empty_table_message() {
        assert_eq!(render_issue_table(&[]), EMPTY_MESSAGE);
    }

    #[test]
    fn test_header_for_officer() {
        let viewer = Viewer::officer("Sanitation Dept");
        let scoped = resolve_scope(sample_issues(), &viewer);
        let counts = count_by_status(scoped.iter().copied());
        insta::assert_snapshot!(render_header(ViewTag::All.title(), &viewer, &counts), @r"
        All Issues
        Showing issues for Sanitation Dept
        Total: 3  Pending: 1  In-Progress: 1  Resolved: 1
        ");
    }

    #[test]
    fn test_header_for_admin() {
        let header = render_header(
            ViewTag::Pending.title(),
            &Viewer::admin(),
            &count_by_status(sample_issues()),
        );
        assert!(header.starts_with("Pending Issues\nOverview of all civic issues in the system"));
    }

    #[test]
    fn test_timeline() {
        insta::assert_snapshot!(render_timeline(&issue("ISS-003").lifecycle), @r"
        [Completed]    Reported          2024-01-13 08:15 UTC
        [Completed]    Acknowledged      2024-01-13 08:30 UTC
        [Completed]    Assigned          2024-01-13 09:00 UTC  assigned to Lisa Chen
        [Completed]    Resolved          2024-01-13 14:30 UTC  Collection completed
        [In Progress]  Citizen Verified
        ");
    }

    #[test]
    fn test_details_include_timeline() {
        let details = render_issue_details(issue("ISS-005"));
        assert!(details.contains("Assigned to: Tom Rodriguez"));
        assert!(details.contains("Repair crew on site"));
        assert!(details.contains("Lifecycle:"));
    }
}
