//! View pipeline: status tab, search and sort over a scoped issue set.
//!
//! Every stage borrows; the scoped input is never reordered or mutated.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::model::{Issue, Status};

/// Status-based tab selecting which issues are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewTag {
    #[default]
    All,
    Pending,
    InProgress,
    Resolved,
}

impl ViewTag {
    /// The status this tab selects, or `None` for the `All` tab.
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        match self {
            Self::All => None,
            Self::Pending => Some(Status::Pending),
            Self::InProgress => Some(Status::InProgress),
            Self::Resolved => Some(Status::Resolved),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }

    /// Heading shown above the listing.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::All => "All Issues",
            Self::Pending => "Pending Issues",
            Self::InProgress => "In-Progress Issues",
            Self::Resolved => "Resolved Issues",
        }
    }
}

impl fmt::Display for ViewTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown tags select `All`.
impl FromStr for ViewTag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "pending" => Self::Pending,
            "in-progress" | "in_progress" | "inprogress" => Self::InProgress,
            "resolved" => Self::Resolved,
            "all" => Self::All,
            other => {
                debug!(tag = other, "unknown view tag; using all");
                Self::All
            }
        })
    }
}

/// Issue fields the listing can be sorted by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Newest first.
    #[default]
    ReportedAt,
    /// Highest rank first.
    Priority,
    Id,
    Title,
    Description,
    Department,
    Status,
    Sla,
    ReportedBy,
    AssignedTo,
    Lat,
    Lng,
    /// Unrecognised field name; leaves the order unchanged.
    Other(String),
}

impl SortKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ReportedAt => "reportedAt",
            Self::Priority => "priority",
            Self::Id => "id",
            Self::Title => "title",
            Self::Description => "description",
            Self::Department => "department",
            Self::Status => "status",
            Self::Sla => "sla",
            Self::ReportedBy => "reportedBy",
            Self::AssignedTo => "assignedTo",
            Self::Lat => "lat",
            Self::Lng => "lng",
            Self::Other(name) => name,
        }
    }

    /// String form of a field used by the lexicographic sort keys.
    ///
    /// `None` means the value is missing and sorts as the empty string.
    fn field_text<'a>(&self, issue: &'a Issue) -> Option<Cow<'a, str>> {
        match self {
            Self::Id => Some(Cow::Borrowed(&issue.id)),
            Self::Title => Some(Cow::Borrowed(&issue.title)),
            Self::Description => Some(Cow::Borrowed(&issue.description)),
            Self::Department => Some(Cow::Borrowed(&issue.department)),
            Self::Status => Some(Cow::Borrowed(issue.status.as_str())),
            Self::Sla => Some(Cow::Borrowed(&issue.sla)),
            Self::ReportedBy => Some(Cow::Borrowed(&issue.reported_by)),
            Self::AssignedTo => issue.assigned_to.as_deref().map(Cow::Borrowed),
            Self::Lat => Some(Cow::Owned(issue.lat.to_string())),
            Self::Lng => Some(Cow::Owned(issue.lng.to_string())),
            Self::ReportedAt | Self::Priority | Self::Other(_) => None,
        }
    }

    /// Comparator for this key. All orderings are used with a stable sort.
    #[must_use]
    pub fn compare(&self, a: &Issue, b: &Issue) -> Ordering {
        match self {
            Self::ReportedAt => b.reported_at.cmp(&a.reported_at),
            Self::Priority => b.priority.rank().cmp(&a.priority.rank()),
            _ => {
                let left = self.field_text(a).unwrap_or_default();
                let right = self.field_text(b).unwrap_or_default();
                compare_text(&left, &right)
            }
        }
    }
}

/// Case-insensitive order; on a tie the lowercase spelling comes first.
fn compare_text(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| right.cmp(left))
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts camelCase and snake_case field names plus the `latest` label.
impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        Ok(match normalized.as_str() {
            "reportedat" | "latest" | "" => Self::ReportedAt,
            "priority" => Self::Priority,
            "id" => Self::Id,
            "title" => Self::Title,
            "description" => Self::Description,
            "department" => Self::Department,
            "status" => Self::Status,
            "sla" => Self::Sla,
            "reportedby" => Self::ReportedBy,
            "assignedto" => Self::AssignedTo,
            "lat" => Self::Lat,
            "lng" => Self::Lng,
            _ => Self::Other(s.trim().to_string()),
        })
    }
}

/// How a non-empty search interacts with the status tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterComposition {
    /// A non-empty search replaces the status filter.
    #[default]
    SearchSupersedes,
    /// Search and status filter both apply.
    Compose,
}

impl FromStr for FilterComposition {
    type Err = crate::error::CivicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "search_supersedes" | "supersede" | "exclusive" => Ok(Self::SearchSupersedes),
            "compose" | "both" => Ok(Self::Compose),
            other => Err(crate::error::CivicError::validation(
                "filter_composition",
                format!("unknown mode '{other}' (expected search_supersedes or compose)"),
            )),
        }
    }
}

/// True when `needle` (already lowercased) occurs in the title, department,
/// id or reporter of the issue.
#[must_use]
pub fn search_matches(issue: &Issue, needle: &str) -> bool {
    issue.title.to_lowercase().contains(needle)
        || issue.department.to_lowercase().contains(needle)
        || issue.id.to_lowercase().contains(needle)
        || issue.reported_by.to_lowercase().contains(needle)
}

/// Filter and order a scoped issue set using the default composition.
#[must_use]
pub fn project<'a>(
    scoped: &[&'a Issue],
    view: ViewTag,
    search: &str,
    sort_key: &SortKey,
) -> Vec<&'a Issue> {
    project_with(
        scoped,
        view,
        search,
        sort_key,
        FilterComposition::SearchSupersedes,
    )
}

/// Filter and order a scoped issue set.
#[must_use]
pub fn project_with<'a>(
    scoped: &[&'a Issue],
    view: ViewTag,
    search: &str,
    sort_key: &SortKey,
    composition: FilterComposition,
) -> Vec<&'a Issue> {
    let needle = search.to_lowercase();
    let searching = !needle.is_empty();
    let status = match (composition, searching) {
        (FilterComposition::SearchSupersedes, true) => None,
        _ => view.status(),
    };

    let mut results: Vec<&Issue> = scoped
        .iter()
        .copied()
        .filter(|issue| status.is_none_or(|s| issue.status == s))
        .filter(|issue| !searching || search_matches(issue, &needle))
        .collect();

    results.sort_by(|a, b| sort_key.compare(a, b));

    debug!(
        view = %view,
        search,
        sort = %sort_key,
        input = scoped.len(),
        output = results.len(),
        "projected issue view"
    );
    results
}

/// UI state for one render of the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub view: ViewTag,
    pub search: String,
    pub sort: SortKey,
    pub composition: FilterComposition,
}

impl ViewQuery {
    #[must_use]
    pub fn apply<'a>(&self, scoped: &[&'a Issue]) -> Vec<&'a Issue> {
        project_with(
            scoped,
            self.view,
            &self.search,
            &self.sort,
            self.composition,
        )
    }
}
