//! Login command implementation.

use tracing::info;

use crate::cli::{CommandContext, LoginArgs};
use crate::error::Result;
use crate::format::{Profile, describe_scope};

/// Execute the login command.
///
/// # Errors
///
/// Returns `InvalidCredentials` for an unknown account, or an error if the
/// session file cannot be written.
pub fn execute(args: &LoginArgs, ctx: &CommandContext) -> Result<()> {
    let mut session = ctx.session();
    let user = session.login(&args.email, &args.password)?.clone();
    ctx.save_session(&session)?;
    info!(email = %user.email, role = %user.role, "logged in");

    if ctx.is_json() {
        return ctx.json(&Profile::from(&user));
    }

    println!("Logged in as {} ({})", user.display_name(), user.role);
    println!("{}", describe_scope(&user.viewer()));
    Ok(())
}
