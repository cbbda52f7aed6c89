//! List command implementation.
//!
//! Scope, then the view pipeline, with the header counts taken over the whole
//! scoped set.

use civiclens_core::{Issue, Scope, ViewQuery, Viewer, count_by_status, resolve_scope};

use crate::cli::{CommandContext, ListArgs};
use crate::error::Result;
use crate::format::{IssueListing, render_header, render_issue_table};

/// Run the pipeline for `viewer` and package the result.
#[must_use]
pub fn build_listing<'a>(
    issues: &'a [Issue],
    viewer: &Viewer,
    query: &'a ViewQuery,
    limit: Option<usize>,
) -> IssueListing<'a> {
    let scoped = resolve_scope(issues, viewer);
    let counts = count_by_status(scoped.iter().copied());
    let mut rows = query.apply(&scoped);
    if let Some(limit) = limit {
        rows.truncate(limit);
    }

    IssueListing {
        view: query.view,
        title: query.view.title(),
        scope: Scope::of(viewer),
        search: &query.search,
        sort: query.sort.as_str(),
        counts,
        issues: rows,
    }
}

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if nobody is signed in or the issue feed cannot be read.
pub fn execute(args: &ListArgs, ctx: &CommandContext) -> Result<()> {
    let user = ctx.require_user()?;
    let viewer = user.viewer();
    let issues = ctx.load_issues()?;
    let query = ctx.view_query(args);
    let listing = build_listing(&issues, &viewer, &query, args.limit);

    if ctx.is_json() {
        return ctx.json(&listing);
    }

    println!("{}\n", render_header(listing.title, &viewer, &listing.counts));
    println!("{}", render_issue_table(&listing.issues));
    if !listing.issues.is_empty() {
        println!("\n{} issue(s)", listing.issues.len());
    }
    Ok(())
}
