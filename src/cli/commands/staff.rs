//! Staff roster command implementation.

use civiclens_core::assignment::DEPARTMENTS;
use civiclens_core::staff_for;

use crate::cli::{CommandContext, StaffArgs};
use crate::error::Result;
use crate::format::{Roster, render_table};

/// Execute the staff command. Works without a session.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(args: &StaffArgs, ctx: &CommandContext) -> Result<()> {
    let rosters: Vec<Roster<'_>> = match args.department.as_deref() {
        Some(department) => vec![Roster {
            department,
            staff: staff_for(department),
        }],
        None => DEPARTMENTS
            .into_iter()
            .map(|department| Roster {
                department,
                staff: staff_for(department),
            })
            .collect(),
    };

    if ctx.is_json() {
        return ctx.json(&rosters);
    }

    if rosters.iter().all(|roster| roster.staff.is_empty()) {
        println!("No staff on record");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = rosters
        .iter()
        .map(|roster| vec![roster.department.to_string(), roster.staff.join(", ")])
        .collect();
    println!("{}", render_table(&["DEPARTMENT", "STAFF"], &rows));
    Ok(())
}
