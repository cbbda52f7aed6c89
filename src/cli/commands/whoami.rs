//! Profile command implementation.

use crate::cli::CommandContext;
use crate::error::Result;
use crate::format::Profile;

/// Execute the whoami command.
///
/// # Errors
///
/// Returns `NotLoggedIn` when nobody is signed in.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let user = ctx.require_user()?;
    let profile = Profile::from(&user);

    if ctx.is_json() {
        return ctx.json(&profile);
    }

    println!("Name:       {}", profile.name);
    println!("Email:      {}", profile.email);
    println!("Role:       {}", profile.role);
    println!("Department: {}", profile.department.unwrap_or("-"));
    println!("Scope:      {}", profile.scope);
    Ok(())
}
