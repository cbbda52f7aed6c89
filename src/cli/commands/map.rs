//! Map command implementation.

use std::io;

use civiclens_core::resolve_scope;

use crate::cli::{CommandContext, MapArgs};
use crate::error::Result;
use crate::map::{GeoJsonRenderer, MapFormat, MapRenderer, TextMapRenderer};

/// Execute the map command. `--json` implies GeoJSON.
///
/// # Errors
///
/// Returns an error if nobody is signed in, the feed cannot be read or the
/// markers cannot be rendered.
pub fn execute(args: &MapArgs, ctx: &CommandContext) -> Result<()> {
    let viewer = ctx.require_user()?.viewer();
    let issues = ctx.load_issues()?;
    let scoped = resolve_scope(&issues, &viewer);

    let format = if ctx.is_json() {
        MapFormat::GeoJson
    } else {
        args.format.unwrap_or(ctx.config.map_format)
    };

    let stdout = io::stdout().lock();
    let mut renderer: Box<dyn MapRenderer> = match format {
        MapFormat::GeoJson => Box::new(GeoJsonRenderer::new(stdout)),
        MapFormat::Text => Box::new(TextMapRenderer::new(stdout)),
    };
    renderer.render_markers(&scoped)
}
