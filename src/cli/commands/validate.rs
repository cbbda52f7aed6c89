//! Validate command implementation.

use civiclens_core::{CivicError, resolve_scope};

use crate::cli::CommandContext;
use crate::error::Result;
use crate::format::{IssueProblems, ValidationReport};
use crate::validation::IssueValidator;

/// Execute the validate command.
///
/// # Errors
///
/// Returns a `Validation` error (exit code 1) when any issue fails.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let viewer = ctx.require_user()?.viewer();
    let issues = ctx.load_issues()?;
    let scoped = resolve_scope(&issues, &viewer);

    let problems: Vec<IssueProblems> = scoped
        .iter()
        .filter_map(|issue| {
            IssueValidator::validate(issue).err().map(|errors| IssueProblems {
                id: issue.id.clone(),
                errors: errors.iter().map(ToString::to_string).collect(),
            })
        })
        .collect();
    let report = ValidationReport {
        checked: scoped.len(),
        problems,
    };

    if ctx.is_json() {
        ctx.json(&report)?;
    } else {
        for entry in &report.problems {
            println!("{}:", entry.id);
            for error in &entry.errors {
                println!("  - {error}");
            }
        }
        println!(
            "Checked {} issue(s), {} with problems",
            report.checked,
            report.problems.len()
        );
    }

    if report.problems.is_empty() {
        Ok(())
    } else {
        Err(CivicError::validation(
            "issues",
            format!("{} issue(s) failed validation", report.problems.len()),
        )
        .into())
    }
}
