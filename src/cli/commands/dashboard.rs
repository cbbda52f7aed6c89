//! Dashboard command implementation.
//!
//! Header, map markers and the issue table in one screen. A map failure is
//! reported and the table is still shown.

use serde_json::json;
use tracing::warn;

use civiclens_core::{Issue, resolve_scope, sla_percentage};

use crate::cli::commands::list::build_listing;
use crate::cli::{CommandContext, ListArgs};
use crate::error::{CliError, Result};
use crate::format::{render_header, render_issue_table};
use crate::map::{MapRenderer, TextMapRenderer, feature_collection};

/// Render the map section, turning any failure into a message.
pub fn render_map_section(renderer: &mut dyn MapRenderer, issues: &[&Issue]) -> Option<String> {
    match renderer.render_markers(issues) {
        Ok(()) => None,
        Err(err) => {
            warn!(error = %err, "map renderer failed");
            if matches!(err, CliError::Map(_)) {
                Some(err.to_string())
            } else {
                Some(format!("Map unavailable: {err}"))
            }
        }
    }
}

/// Execute the dashboard command.
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
    let sla = sla_percentage(resolve_scope(&issues, &viewer).iter().copied());

    if ctx.is_json() {
        return ctx.json(&json!({
            "user": user.display_name(),
            "role": user.role,
            "slaPercentage": sla,
            "listing": listing,
            "map": feature_collection(&listing.issues),
        }));
    }

    println!("Dashboard");
    println!("{}", render_header(listing.title, &viewer, &listing.counts));
    if let Some(pct) = sla {
        println!("SLA: {pct}% within target");
    }
    println!();

    let mut renderer = TextMapRenderer::new(Vec::new());
    let failure = render_map_section(&mut renderer, &listing.issues);
    match failure {
        Some(message) => println!("{message}"),
        None => print!("{}", String::from_utf8_lossy(&renderer.into_inner())),
    }
    println!();
    println!("{}", render_issue_table(&listing.issues));
    Ok(())
}
