//! `civiclens` - role-aware municipal issue dashboard
//!
//! This crate provides the `civic` CLI on top of `civiclens-core`.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Layered YAML configuration
//! - [`session`] - Login session persisted in a key-value file
//! - [`map`] - Map marker renderers (text, GeoJSON)
//! - [`format`] - Output formatting (text, JSON)
//! - [`validation`] - Issue record checks
//! - [`error`] - Error types and handling
//! - [`logging`] - tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod map;
pub mod session;
pub mod validation;

pub use error::{CliError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
