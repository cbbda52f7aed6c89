//! Stats command implementation.

use civiclens_core::{Scope, count_by_status, resolve_scope, sla_percentage};

use crate::cli::CommandContext;
use crate::error::Result;
use crate::format::{Statistics, format_counts};

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if nobody is signed in or the issue feed cannot be read.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let viewer = ctx.require_user()?.viewer();
    let issues = ctx.load_issues()?;
    let scoped = resolve_scope(&issues, &viewer);

    let stats = Statistics {
        scope: Scope::of(&viewer),
        counts: count_by_status(scoped.iter().copied()),
        sla_percentage: sla_percentage(scoped.iter().copied()),
    };

    if ctx.is_json() {
        return ctx.json(&stats);
    }

    println!("Scope: {}", stats.scope);
    println!("{}", format_counts(&stats.counts));
    match stats.sla_percentage {
        Some(pct) => println!("SLA: {pct}% within target"),
        None => println!("SLA: n/a"),
    }
    Ok(())
}
