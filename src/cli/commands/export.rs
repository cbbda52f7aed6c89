//! Export command implementation.

use serde_json::json;
use tracing::info;

use civiclens_core::{Issue, jsonl, resolve_scope};

use crate::cli::{CommandContext, ExportArgs};
use crate::error::Result;

/// Execute the export command: write the viewer's scoped issues as JSONL.
///
/// # Errors
///
/// Returns an error if nobody is signed in, the feed cannot be read or the
/// output file cannot be written.
pub fn execute(args: &ExportArgs, ctx: &CommandContext) -> Result<()> {
    let viewer = ctx.require_user()?.viewer();
    let issues = ctx.load_issues()?;
    let scoped: Vec<Issue> = resolve_scope(&issues, &viewer)
        .into_iter()
        .cloned()
        .collect();

    jsonl::save(&args.path, &scoped)?;
    info!(path = %args.path.display(), count = scoped.len(), "exported issues");

    if ctx.is_json() {
        return ctx.json(&json!({
            "path": args.path,
            "exported": scoped.len(),
        }));
    }
    println!(
        "Exported {} issue(s) to {}",
        scoped.len(),
        args.path.display()
    );
    Ok(())
}
