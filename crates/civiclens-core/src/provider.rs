//! Issue data providers.
//!
//! The pipeline only needs a slice of issues; where they come from is behind
//! [`IssueProvider`] so the sample set can be swapped for a feed file.

use std::path::PathBuf;

use crate::error::Result;
use crate::jsonl;
use crate::mock::sample_issues;
use crate::model::Issue;

/// Source of the issue collection.
pub trait IssueProvider {
    /// Load the full collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read.
    fn load(&self) -> Result<Vec<Issue>>;

    /// Human-readable description of the source.
    fn describe(&self) -> String;
}

/// The built-in sample issues.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProvider;

impl IssueProvider for MockProvider {
    fn load(&self) -> Result<Vec<Issue>> {
        Ok(sample_issues().to_vec())
    }

    fn describe(&self) -> String {
        "built-in sample issues".to_string()
    }
}

/// Issues read from a JSONL feed file.
#[derive(Debug, Clone)]
pub struct JsonlProvider {
    path: PathBuf,
}

impl JsonlProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IssueProvider for JsonlProvider {
    fn load(&self) -> Result<Vec<Issue>> {
        jsonl::load(&self.path)
    }

    fn describe(&self) -> String {
        format!("feed {}", self.path.display())
    }
}
