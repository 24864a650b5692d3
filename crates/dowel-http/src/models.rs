//! HTTP request models.
//!
//! Response bodies reuse the `dowel` domain types directly; the only
//! translation needed here is from query-string parameters to an
//! [`IssueQuery`].

use dowel::domain::{IssueFilter, IssueQuery, PageSpec, SortDir, SortKey};
use serde::Deserialize;

/// Query parameters accepted by `GET /issues`.
///
/// Every parameter is optional; defaults are `sort_by=updatedAt`,
/// `sort_dir=desc`, `page=1`, `page_size=5`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Case-insensitive title search.
    pub q: Option<String>,

    /// Exact status match.
    pub status: Option<String>,

    /// Exact priority match.
    pub priority: Option<String>,

    /// Exact assignee match.
    pub assignee: Option<String>,

    /// Field to sort by.
    pub sort_by: Option<String>,

    /// Sort direction (`asc`/`desc`).
    pub sort_dir: Option<String>,

    /// 1-indexed page number.
    pub page: Option<u32>,

    /// Items per page.
    pub page_size: Option<u32>,
}

/// Treat `?status=` the same as an absent parameter.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl From<ListParams> for IssueQuery {
    fn from(params: ListParams) -> Self {
        let defaults = PageSpec::default();
        IssueQuery {
            filter: IssueFilter {
                q: non_empty(params.q),
                status: non_empty(params.status),
                priority: non_empty(params.priority),
                assignee: non_empty(params.assignee),
            },
            sort_by: params
                .sort_by
                .as_deref()
                .map(SortKey::parse)
                .unwrap_or_default(),
            sort_dir: params
                .sort_dir
                .as_deref()
                .map(SortDir::parse)
                .unwrap_or_default(),
            page: PageSpec {
                page: params.page.unwrap_or(defaults.page),
                page_size: params.page_size.unwrap_or(defaults.page_size),
            },
        }
    }
}
