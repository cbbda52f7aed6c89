//! `civiclens-core`: issue visibility and ranking for the CivicLens dashboard.
//!
//! Pure functions over an immutable issue collection: role scoping, the
//! status/search/sort view pipeline and status counts, plus the small
//! collaborators around them (issue providers, demo accounts, simulated
//! assignment, analytics series).
//!
//! # Quick Start
//!
//! ```
//! use civiclens_core::{count_by_status, project, resolve_scope, SortKey, ViewTag, Viewer};
//! use civiclens_core::mock::sample_issues;
//!
//! let viewer = Viewer::officer("Sanitation Dept");
//! let scoped = resolve_scope(sample_issues(), &viewer);
//! let counts = count_by_status(scoped.iter().copied());
//! let rows = project(&scoped, ViewTag::All, "", &SortKey::Priority);
//!
//! assert_eq!(counts.total, rows.len());
//! ```

pub mod analytics;
pub mod assignment;
pub mod auth;
pub mod error;
pub mod jsonl;
pub mod mock;
pub mod model;
pub mod provider;
pub mod scope;
pub mod stats;
pub mod view;

/// Crate version, reported by `civic version --json`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use assignment::{AssignmentReceipt, AssignmentRequest, assign, staff_for};
pub use auth::{User, authenticate};
pub use error::{CivicError, Result, ValidationError};
pub use model::{Issue, LifecycleStage, LifecycleStep, Priority, Role, Status, StepState, Viewer};
pub use provider::{IssueProvider, JsonlProvider, MockProvider};
pub use scope::{Scope, resolve_scope};
pub use stats::{IssueCounts, count_by_status, sla_percentage};
pub use view::{FilterComposition, SortKey, ViewQuery, ViewTag, project, project_with};
