//! Logout command implementation.

use serde_json::json;
use tracing::info;

use crate::cli::CommandContext;
use crate::error::Result;

/// Execute the logout command. Logging out twice is not an error.
///
/// # Errors
///
/// Returns an error if the session file cannot be written.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let mut session = ctx.session();
    let was_logged_in = session.logout();
    ctx.save_session(&session)?;
    if was_logged_in {
        info!("logged out");
    }

    if ctx.is_json() {
        return ctx.json(&json!({ "loggedOut": was_logged_in }));
    }

    if was_logged_in {
        println!("Logged out");
    } else {
        println!("No active session");
    }
    Ok(())
}
