//! Logging setup for `civic`.
//!
//! Diagnostics go to stderr so stdout stays clean for `--json` output.
//! `RUST_LOG` overrides the verbosity flags when set.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::EnvFilter;

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

/// Default filter directive for the given flags.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn env_filter(verbose: u8, quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)))
}

/// Install the global subscriber.
///
/// With `log_file`, events are appended to that file as JSON lines instead of
/// being written to stderr.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_logging(verbose: u8, quiet: bool, log_file: Option<&Path>) -> InitResult {
    let filter = env_filter(verbose, quiet);

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
    }
}

/// Install a test-friendly subscriber once per process.
pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter(2, false))
            .with_test_writer()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_for(0, false), "warn");
        assert_eq!(level_for(1, false), "info");
        assert_eq!(level_for(2, false), "debug");
        assert_eq!(level_for(7, false), "trace");
        assert_eq!(level_for(3, true), "error");
    }

    #[test]
    fn test_init_test_logging_is_reentrant() {
        init_test_logging();
        init_test_logging();
        tracing::debug!("test logging initialised");
    }
}
