//! Output formatting for `civic`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! With `--json`, clean JSON goes to stdout and diagnostics to stderr.
//!
//! # JSON Output Types
//!
//! - [`IssueListing`] - Header data plus the ordered rows (list/dashboard)
//! - [`IssueDetails`] - Issue with its current lifecycle stage (show)
//! - [`Statistics`] - Scoped status counts (stats)
//! - [`Profile`] - Signed-in user (whoami/login)
//! - [`AnalyticsReport`] - Reference series plus live department totals

mod output;
mod text;

use serde::Serialize;

use crate::error::Result;

pub use output::{
    AnalyticsReport, IssueDetails, IssueListing, IssueProblems, Profile, Roster, Statistics,
    ValidationReport,
};
pub use text::{
    EMPTY_MESSAGE, SlaBadge, describe_scope, format_counts, format_issue_line, format_priority,
    format_status_icon, pad, render_header, render_issue_details, render_issue_table,
    render_table, render_timeline,
};

/// Print `value` as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
