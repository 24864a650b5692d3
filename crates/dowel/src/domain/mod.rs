//! Domain types for issue tracking.
//!
//! This module contains the core domain types for the dowel issue tracker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Unique identifier for an issue.
///
/// Ids are positive integers assigned sequentially by the store,
/// starting at 1. An id is never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct IssueId(pub u64);

impl IssueId {
    /// Create a new issue ID.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The numeric value of the ID.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for IssueId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Represents an issue in the tracking system.
///
/// Serializes with camelCase field names to match the wire format
/// (`createdAt`/`updatedAt` as ISO 8601 timestamps).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique identifier for the issue. Immutable after creation.
    pub id: IssueId,

    /// Issue title. Never empty.
    pub title: String,

    /// Issue description.
    pub description: String,

    /// Current status. Free-form text, conventionally one of
    /// "Open", "In Progress", "Done".
    pub status: String,

    /// Priority. Free-form text, conventionally one of
    /// "High", "Medium", "Low".
    pub priority: String,

    /// Assignee.
    pub assignee: String,

    /// Creation timestamp. Set once, never changed.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp. Refreshed on every update.
    pub updated_at: DateTime<Utc>,
}

/// The mutable fields of an issue.
///
/// Used both as the payload for creating an issue and for updating one;
/// an update overwrites all five fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueDraft {
    /// Issue title. Must not be empty.
    pub title: String,

    /// Issue description.
    pub description: String,

    /// Current status.
    pub status: String,

    /// Priority.
    pub priority: String,

    /// Assignee.
    pub assignee: String,
}

impl IssueDraft {
    /// Validate the draft before it is stored.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the title is empty.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(Error::Validation("title must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Filter for querying issues.
///
/// All predicates are optional and AND-combined.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    /// Case-insensitive substring match against the title.
    pub q: Option<String>,

    /// Exact (case-sensitive) status match.
    pub status: Option<String>,

    /// Exact (case-sensitive) priority match.
    pub priority: Option<String>,

    /// Exact (case-sensitive) assignee match.
    pub assignee: Option<String>,
}

/// The field a query sorts by.
///
/// This is an explicit selector rather than a stringly-typed attribute
/// lookup: the three fields with dedicated comparison semantics get
/// their own variants, and everything else goes through [`SortKey::Field`]
/// with raw field value comparison.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Numeric order on the issue id.
    Id,

    /// Chronological order on the last-update timestamp. The default.
    #[default]
    UpdatedAt,

    /// Severity rank order on the priority text (see [`priority_rank`]),
    /// not lexical order.
    PriorityRank,

    /// Raw value comparison on the named field. Unknown names produce
    /// an absent key for every issue, leaving the order untouched.
    Field(String),
}

impl SortKey {
    /// Resolve a `sort_by` parameter to a sort key.
    pub fn parse(name: &str) -> Self {
        match name {
            "id" => Self::Id,
            "updatedAt" => Self::UpdatedAt,
            "priority" => Self::PriorityRank,
            other => Self::Field(other.to_string()),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    /// Ascending.
    Asc,

    /// Descending. The default.
    #[default]
    Desc,
}

impl SortDir {
    /// Resolve a `sort_dir` parameter.
    ///
    /// Only the exact value `"desc"` selects descending; anything else
    /// is ascending. An absent parameter defaults to descending.
    pub fn parse(value: &str) -> Self {
        if value == "desc" { Self::Desc } else { Self::Asc }
    }
}

/// Page selection for a query.
#[derive(Debug, Clone, Copy)]
pub struct PageSpec {
    /// 1-indexed page number. Page 0 is treated as page 1.
    pub page: u32,

    /// Number of items per page.
    pub page_size: u32,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self { page: 1, page_size: 5 }
    }
}

/// A complete query: filter, sort, page.
#[derive(Debug, Clone, Default)]
pub struct IssueQuery {
    /// Filter predicates, applied first.
    pub filter: IssueFilter,

    /// Sort key, applied to the filtered set.
    pub sort_by: SortKey,

    /// Sort direction.
    pub sort_dir: SortDir,

    /// Page selection, applied last.
    pub page: PageSpec,
}

/// One page of query results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueList {
    /// Issues on the requested page, in sorted order.
    pub items: Vec<Issue>,

    /// Number of issues matching the filter, before pagination.
    pub total: usize,
}

/// Severity rank for a priority value.
///
/// "High" ranks before "Medium" before "Low"; any other value ranks
/// last. Used when sorting by priority so that ordering follows
/// severity rather than the lexical order of the strings.
pub fn priority_rank(priority: &str) -> u8 {
    match priority {
        "High" => 0,
        "Medium" => 1,
        "Low" => 2,
        _ => 99,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_rank_orders_by_severity() {
        assert!(priority_rank("High") < priority_rank("Medium"));
        assert!(priority_rank("Medium") < priority_rank("Low"));
        assert!(priority_rank("Low") < priority_rank("Urgent"));
    }

    #[test]
    fn sort_key_parse_resolves_known_fields() {
        assert_eq!(SortKey::parse("id"), SortKey::Id);
        assert_eq!(SortKey::parse("updatedAt"), SortKey::UpdatedAt);
        assert_eq!(SortKey::parse("priority"), SortKey::PriorityRank);
        assert_eq!(
            SortKey::parse("assignee"),
            SortKey::Field("assignee".to_string())
        );
    }

    #[test]
    fn sort_dir_parse_defaults_to_asc_for_unknown_values() {
        assert_eq!(SortDir::parse("desc"), SortDir::Desc);
        assert_eq!(SortDir::parse("asc"), SortDir::Asc);
        assert_eq!(SortDir::parse("bogus"), SortDir::Asc);
    }

    #[test]
    fn draft_validation_rejects_empty_title() {
        let draft = IssueDraft {
            title: String::new(),
            description: "desc".to_string(),
            status: "Open".to_string(),
            priority: "High".to_string(),
            assignee: "alice".to_string(),
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn issue_serializes_with_camel_case_timestamps() {
        let issue = Issue {
            id: IssueId::new(1),
            title: "t".to_string(),
            description: "d".to_string(),
            status: "Open".to_string(),
            priority: "High".to_string(),
            assignee: "alice".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&issue).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
