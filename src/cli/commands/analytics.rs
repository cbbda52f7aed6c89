//! Analytics command implementation (Admin only).

use civiclens_core::analytics::{
    DEPARTMENT_RESOLUTION, ISSUE_TYPES, KPIS, SLA_COMPLIANCE, SLA_TARGET, department_summary,
    months_meeting_target,
};
use civiclens_core::{CivicError, resolve_scope};

use crate::cli::CommandContext;
use crate::error::Result;
use crate::format::{AnalyticsReport, render_table};

/// Execute the analytics command.
///
/// # Errors
///
/// Returns `NotAuthorized` unless the signed-in user is an administrator.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let viewer = ctx.require_user()?.viewer();
    if !viewer.is_admin() {
        return Err(CivicError::NotAuthorized {
            action: "view analytics".to_string(),
        }
        .into());
    }

    let issues = ctx.load_issues()?;
    let scoped = resolve_scope(&issues, &viewer);
    let report = AnalyticsReport {
        kpis: &KPIS,
        department_resolution: &DEPARTMENT_RESOLUTION,
        sla_compliance: &SLA_COMPLIANCE,
        sla_target: SLA_TARGET,
        months_meeting_target: months_meeting_target(),
        issue_types: &ISSUE_TYPES,
        departments: department_summary(scoped.iter().copied()),
    };

    if ctx.is_json() {
        return ctx.json(&report);
    }

    println!("Key indicators");
    println!(
        "  Avg resolution time: {} ({}h)",
        KPIS.avg_resolution_time, KPIS.avg_resolution_hours
    );
    println!(
        "  Most active dept:    {} ({} issues)",
        KPIS.most_active_dept, KPIS.most_active_dept_count
    );
    println!("  Issues this month:   {}", KPIS.total_issues_this_month);
    println!("  Resolution rate:     {:.1}%", KPIS.resolution_rate_overall);

    let rows: Vec<Vec<String>> = report
        .department_resolution
        .iter()
        .map(|d| {
            vec![
                d.department.to_string(),
                d.resolved.to_string(),
                d.total.to_string(),
                format!("{:.1}%", d.rate),
            ]
        })
        .collect();
    println!("\nResolution by department");
    println!(
        "{}",
        render_table(&["DEPARTMENT", "RESOLVED", "TOTAL", "RATE"], &rows)
    );

    let rows: Vec<Vec<String>> = report
        .sla_compliance
        .iter()
        .map(|m| {
            let mark = if m.compliance >= m.target { "met" } else { "missed" };
            vec![
                m.month.to_string(),
                format!("{}%", m.compliance),
                mark.to_string(),
            ]
        })
        .collect();
    println!("\nSLA compliance (target {SLA_TARGET}%)");
    println!("{}", render_table(&["MONTH", "COMPLIANCE", "STATUS"], &rows));

    let rows: Vec<Vec<String>> = report
        .issue_types
        .iter()
        .map(|t| vec![t.issue_type.to_string(), t.count.to_string()])
        .collect();
    println!("\nIssue types");
    println!("{}", render_table(&["TYPE", "COUNT"], &rows));

    let rows: Vec<Vec<String>> = report
        .departments
        .iter()
        .map(|d| {
            vec![
                d.department.clone(),
                d.total.to_string(),
                d.open.to_string(),
                d.resolved.to_string(),
                format!("{:.0}%", d.resolution_rate()),
            ]
        })
        .collect();
    println!("\nCurrent issues by department");
    println!(
        "{}",
        render_table(&["DEPARTMENT", "TOTAL", "OPEN", "RESOLVED", "RATE"], &rows)
    );
    Ok(())
}
