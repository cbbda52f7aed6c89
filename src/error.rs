//! Error types for the `civic` front end.

use std::path::PathBuf;
use thiserror::Error;

use civiclens_core::CivicError;

/// Errors raised by commands, config loading and session handling.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error from the issue core (lookup, parsing, assignment, feeds).
    #[error(transparent)]
    Core(#[from] CivicError),

    /// No user in the session.
    #[error("Not logged in. Run `civic login` first.")]
    NotLoggedIn,

    /// Credentials did not match a known account.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file could not be parsed.
    #[error("Invalid config file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Map renderer failure.
    #[error("Map unavailable: {0}")]
    Map(String),

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type using `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;
