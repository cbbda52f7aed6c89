//! Command implementations.
//!
//! Each command takes its parsed arguments and the shared
//! [`CommandContext`](crate::cli::CommandContext).

pub mod analytics;
pub mod assign;
pub mod completions;
pub mod dashboard;
pub mod export;
pub mod list;
pub mod login;
pub mod logout;
pub mod map;
pub mod show;
pub mod staff;
pub mod stats;
pub mod validate;
pub mod version;
pub mod whoami;
