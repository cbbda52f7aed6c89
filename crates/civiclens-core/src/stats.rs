//! Status counts for the header summary cards.

use serde::{Deserialize, Serialize};

use crate::model::{Issue, Status};

/// Four-way issue count over a scoped set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl IssueCounts {
    #[must_use]
    pub const fn for_status(&self, status: Status) -> usize {
        match status {
            Status::Pending => self.pending,
            Status::InProgress => self.in_progress,
            Status::Resolved => self.resolved,
        }
    }
}

/// Count issues by status in a single pass.
pub fn count_by_status<'a, I>(issues: I) -> IssueCounts
where
    I: IntoIterator<Item = &'a Issue>,
{
    issues
        .into_iter()
        .fold(IssueCounts::default(), |mut counts, issue| {
            counts.total += 1;
            match issue.status {
                Status::Pending => counts.pending += 1,
                Status::InProgress => counts.in_progress += 1,
                Status::Resolved => counts.resolved += 1,
            }
            counts
        })
}

/// Share of issues not marked "Overdue", rounded to a whole percent.
///
/// `None` for an empty set.
pub fn sla_percentage<'a, I>(issues: I) -> Option<u32>
where
    I: IntoIterator<Item = &'a Issue>,
{
    let (total, on_time) = issues.into_iter().fold((0_u64, 0_u64), |(total, ok), issue| {
        (total + 1, ok + u64::from(issue.sla != "Overdue"))
    });
    rounded_percent(on_time, total)
}

/// `part * 100 / total` rounded half up. `None` when `total` is zero.
fn rounded_percent(part: u64, total: u64) -> Option<u32> {
    if total == 0 {
        return None;
    }
    let scaled = u128::from(part) * 200 + u128::from(total);
    u32::try_from(scaled / (u128::from(total) * 2)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::sample_issues;
    use crate::model::Viewer;
    use crate::scope::resolve_scope;

    fn with_status(status: Status) -> Issue {
        Issue {
            status,
            ..sample_issues()[0].clone()
        }
    }

    #[test]
    fn test_counts_three_two_one() {
        let issues: Vec<Issue> = [
            Status::Pending,
            Status::Pending,
            Status::Pending,
            Status::InProgress,
            Status::InProgress,
            Status::Resolved,
        ]
        .into_iter()
        .map(with_status)
        .collect();

        let counts = count_by_status(&issues);
        assert_eq!(
            counts,
            IssueCounts {
                total: 6,
                pending: 3,
                in_progress: 2,
                resolved: 1,
            }
        );
    }

    #[test]
    fn test_counts_empty() {
        assert_eq!(count_by_status(&Vec::<Issue>::new()), IssueCounts::default());
    }

    #[test]
    fn test_counts_for_sanitation_scope() {
        let scoped = resolve_scope(sample_issues(), &Viewer::officer("Sanitation Dept"));
        let counts = count_by_status(scoped.iter().copied());
        assert_eq!(counts.total, 3);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.in_progress, 1);
        assert_eq!(counts.resolved, 1);
    }

    #[test]
    fn test_counts_serialize_camel_case() {
        let json = serde_json::to_string(&count_by_status(sample_issues())).unwrap();
        assert_eq!(
            json,
            r#"{"total":8,"pending":3,"inProgress":3,"resolved":2}"#
        );
    }

    #[test]
    fn test_sla_percentage() {
        // One of eight sample issues is overdue.
        assert_eq!(sla_percentage(sample_issues()), Some(88));
        assert_eq!(sla_percentage(&Vec::<Issue>::new()), None);
    }

    #[test]
    fn test_rounded_percent_large_totals() {
        assert_eq!(rounded_percent(1, 8), Some(13));
        assert_eq!(rounded_percent(21_474_837, 21_474_837), Some(100));
        assert_eq!(rounded_percent(u64::MAX / 2, u64::MAX), Some(50));
        assert_eq!(rounded_percent(u64::MAX, u64::MAX), Some(100));
        assert_eq!(rounded_percent(0, 0), None);
    }

    #[test]
    fn test_for_status() {
        let counts = count_by_status(sample_issues());
        assert_eq!(counts.for_status(Status::InProgress), 3);
    }
}
