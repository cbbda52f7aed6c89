//! Shell completion generation.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};

/// Write the completion script for the requested shell to stdout.
pub fn execute(args: &CompletionsArgs) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(args.shell, &mut command, name, &mut io::stdout());
}
