//! Version command implementation.

use serde::Serialize;

use crate::cli::{CommandContext, VersionArgs};
use crate::error::Result;

#[derive(Serialize)]
struct VersionOutput<'a> {
    version: &'a str,
    build: &'a str,
    core: &'a str,
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(args: &VersionArgs, ctx: &CommandContext) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    if args.short {
        println!("{version}");
        return Ok(());
    }

    let build = if cfg!(debug_assertions) {
        "dev"
    } else {
        "release"
    };

    if ctx.is_json() {
        return ctx.json(&VersionOutput {
            version,
            build,
            core: civiclens_core::VERSION,
        });
    }

    println!("civic version {version} ({build})");
    Ok(())
}
