//! Command-line interface for `civic`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;
mod context;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::{self, CliOverrides};
use crate::logging;
use crate::map::MapFormat;

pub use context::CommandContext;

/// `civic` - role-aware municipal issue dashboard.
#[derive(Parser, Debug)]
#[command(name = "civic")]
#[command(
    author,
    version,
    about = "Role-aware municipal issue dashboard",
    long_about = None,
    after_help = "Sign in with `civic login` before browsing issues."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// JSONL issue feed (defaults to the built-in sample issues)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Session file location
    #[arg(long, global = true, value_name = "PATH")]
    pub session_file: Option<PathBuf>,

    /// Extra YAML config file layered over user and project config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append JSON log lines to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with a demo account
    Login(LoginArgs),

    /// Sign out
    Logout,

    /// Show the signed-in profile
    #[command(alias = "profile")]
    Whoami,

    /// List issues in your scope
    #[command(alias = "ls")]
    List(ListArgs),

    /// Status counts for your scope
    Stats,

    /// Show issue details and lifecycle
    Show(ShowArgs),

    /// Issue map markers
    Map(MapArgs),

    /// Header, map and table in one screen
    Dashboard(ListArgs),

    /// Assign a pending issue to department staff (simulated)
    Assign(AssignArgs),

    /// List department staff
    Staff(StaffArgs),

    /// Portal analytics (Admin only)
    Analytics,

    /// Write the issues in your scope to a JSONL file
    Export(ExportArgs),

    /// Check issue records for data errors
    Validate,

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    Version(VersionArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long, env = "CIVICLENS_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Status tab: all, pending, in-progress, resolved
    #[arg(long)]
    pub view: Option<String>,

    /// Case-insensitive search over title, department, id and reporter
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort field (reportedAt, priority, or any issue field)
    #[arg(long)]
    pub sort: Option<String>,

    /// Apply the status tab together with the search
    #[arg(long)]
    pub compose: bool,

    /// Show at most N rows
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Issue ID (e.g. ISS-001)
    pub id: String,
}

#[derive(Args, Debug)]
pub struct MapArgs {
    /// Marker output format
    #[arg(long, value_enum)]
    pub format: Option<MapFormat>,
}

#[derive(Args, Debug)]
pub struct AssignArgs {
    /// Issue ID
    pub id: String,

    /// Staff member to assign
    #[arg(long = "to", value_name = "STAFF")]
    pub to: String,

    /// Priority to set (Low, Medium, High, Critical)
    #[arg(long, default_value = "Medium")]
    pub priority: String,
}

#[derive(Args, Debug)]
pub struct StaffArgs {
    /// Only this department
    #[arg(long)]
    pub department: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output JSONL path
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Print only the version number
    #[arg(long)]
    pub short: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        config: cli.config.clone(),
        data: cli.data.clone(),
        session_file: cli.session_file.clone(),
        log_file: cli.log_file.clone(),
    };
    let config = config::load(&overrides)?;

    logging::init_logging(cli.verbose, cli.quiet, config.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;
    tracing::debug!(command = cli.command.name(), ?config, "starting");

    let ctx = CommandContext::new(config, cli.json);
    dispatch(cli.command, &ctx)?;
    Ok(())
}

fn dispatch(command: Commands, ctx: &CommandContext) -> crate::Result<()> {
    match command {
        Commands::Login(args) => commands::login::execute(&args, ctx),
        Commands::Logout => commands::logout::execute(ctx),
        Commands::Whoami => commands::whoami::execute(ctx),
        Commands::List(args) => commands::list::execute(&args, ctx),
        Commands::Stats => commands::stats::execute(ctx),
        Commands::Show(args) => commands::show::execute(&args, ctx),
        Commands::Map(args) => commands::map::execute(&args, ctx),
        Commands::Dashboard(args) => commands::dashboard::execute(&args, ctx),
        Commands::Assign(args) => commands::assign::execute(&args, ctx),
        Commands::Staff(args) => commands::staff::execute(&args, ctx),
        Commands::Analytics => commands::analytics::execute(ctx),
        Commands::Export(args) => commands::export::execute(&args, ctx),
        Commands::Validate => commands::validate::execute(ctx),
        Commands::Completions(args) => {
            commands::completions::execute(&args);
            Ok(())
        }
        Commands::Version(args) => commands::version::execute(&args, ctx),
    }
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Login(_) => "login",
            Self::Logout => "logout",
            Self::Whoami => "whoami",
            Self::List(_) => "list",
            Self::Stats => "stats",
            Self::Show(_) => "show",
            Self::Map(_) => "map",
            Self::Dashboard(_) => "dashboard",
            Self::Assign(_) => "assign",
            Self::Staff(_) => "staff",
            Self::Analytics => "analytics",
            Self::Export(_) => "export",
            Self::Validate => "validate",
            Self::Completions(_) => "completions",
            Self::Version(_) => "version",
        }
    }
}
