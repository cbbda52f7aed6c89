//! `civic` - role-aware municipal issue dashboard.
//!
//! Browse, filter and rank civic issues from the terminal, scoped to the
//! signed-in account.

use civiclens::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
