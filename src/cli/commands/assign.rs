//! Assign command implementation.
//!
//! Simulated: the receipt is printed and logged, nothing is written back.

use civiclens_core::{AssignmentRequest, CivicError, Priority, assign, resolve_scope};

use crate::cli::{AssignArgs, CommandContext};
use crate::error::Result;

/// Execute the assign command.
///
/// # Errors
///
/// Returns `NotAuthorized` for non-admins, `IssueNotFound` for unknown IDs,
/// `Validation` when the issue is not pending and `UnknownStaff` when the
/// staff member is not on the department roster.
pub fn execute(args: &AssignArgs, ctx: &CommandContext) -> Result<()> {
    let viewer = ctx.require_user()?.viewer();
    let priority: Priority = args.priority.parse()?;
    let issues = ctx.load_issues()?;
    let scoped = resolve_scope(&issues, &viewer);

    let issue = scoped
        .iter()
        .copied()
        .find(|issue| issue.id.eq_ignore_ascii_case(args.id.trim()))
        .ok_or_else(|| CivicError::IssueNotFound {
            id: args.id.clone(),
        })?;

    let request = AssignmentRequest::new(args.to.trim()).with_priority(priority);
    let receipt = assign(issue, &viewer, &request)?;

    if ctx.is_json() {
        return ctx.json(&receipt);
    }
    println!("{receipt}");
    Ok(())
}
