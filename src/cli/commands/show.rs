//! Show command implementation.

use civiclens_core::{CivicError, resolve_scope};

use crate::cli::{CommandContext, ShowArgs};
use crate::error::Result;
use crate::format::{IssueDetails, render_issue_details};

/// Execute the show command.
///
/// Issues outside the viewer's scope are reported as not found.
///
/// # Errors
///
/// Returns `IssueNotFound` if the ID is unknown or out of scope.
pub fn execute(args: &ShowArgs, ctx: &CommandContext) -> Result<()> {
    let viewer = ctx.require_user()?.viewer();
    let issues = ctx.load_issues()?;
    let scoped = resolve_scope(&issues, &viewer);

    let issue = scoped
        .iter()
        .copied()
        .find(|issue| issue.id.eq_ignore_ascii_case(args.id.trim()))
        .ok_or_else(|| CivicError::IssueNotFound {
            id: args.id.clone(),
        })?;

    if ctx.is_json() {
        return ctx.json(&IssueDetails::from(issue));
    }

    print!("{}", render_issue_details(issue));
    Ok(())
}
