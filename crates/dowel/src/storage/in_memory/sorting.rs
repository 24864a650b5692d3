//! Sort key extraction and ordering for the query pipeline.

use crate::domain::{Issue, SortDir, SortKey, priority_rank};
use chrono::{DateTime, Utc};

/// Comparable key extracted from an issue for a given [`SortKey`].
///
/// A single query resolves every issue to the same variant, so the
/// derived cross-variant order never decides a comparison in practice.
/// `Absent` is produced for unknown field names: all keys compare
/// equal and the stable sort leaves the filtered order untouched.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Absent,
    Rank(u8),
    Number(u64),
    Time(DateTime<Utc>),
    Text(String),
}

fn sort_value(issue: &Issue, key: &SortKey) -> SortValue {
    match key {
        SortKey::Id => SortValue::Number(issue.id.value()),
        SortKey::UpdatedAt => SortValue::Time(issue.updated_at),
        SortKey::PriorityRank => SortValue::Rank(priority_rank(&issue.priority)),
        SortKey::Field(name) => match name.as_str() {
            "title" => SortValue::Text(issue.title.clone()),
            "description" => SortValue::Text(issue.description.clone()),
            "status" => SortValue::Text(issue.status.clone()),
            "priority" => SortValue::Text(issue.priority.clone()),
            "assignee" => SortValue::Text(issue.assignee.clone()),
            "createdAt" => SortValue::Time(issue.created_at),
            _ => SortValue::Absent,
        },
    }
}

/// Sort issues in place by the given key and direction.
///
/// The sort is stable: issues with equal keys keep their filtered
/// relative order. `Desc` swaps the comparison operands, which still
/// reports equal keys as equal and therefore preserves stability.
pub(super) fn sort_issues(issues: &mut [Issue], key: &SortKey, dir: SortDir) {
    match dir {
        SortDir::Asc => {
            issues.sort_by(|a, b| sort_value(a, key).cmp(&sort_value(b, key)));
        }
        SortDir::Desc => {
            issues.sort_by(|a, b| sort_value(b, key).cmp(&sort_value(a, key)));
        }
    }
}
