//! IssueStorage trait implementation for the in-memory store.

use super::InMemoryStore;
use super::sorting::sort_issues;
use crate::domain::{Issue, IssueDraft, IssueFilter, IssueId, IssueList, IssueQuery};
use crate::error::{Error, Result};
use crate::storage::IssueStorage;
use async_trait::async_trait;
use chrono::Utc;

/// Whether an issue passes every predicate in the filter.
///
/// Predicates are independent and AND-combined; an unset predicate
/// matches everything. The text search is a case-insensitive substring
/// match against the title only; the other three are exact matches.
fn matches(filter: &IssueFilter, issue: &Issue) -> bool {
    if let Some(q) = &filter.q {
        if !issue.title.to_lowercase().contains(&q.to_lowercase()) {
            return false;
        }
    }
    if let Some(status) = &filter.status {
        if &issue.status != status {
            return false;
        }
    }
    if let Some(priority) = &filter.priority {
        if &issue.priority != priority {
            return false;
        }
    }
    if let Some(assignee) = &filter.assignee {
        if &issue.assignee != assignee {
            return false;
        }
    }
    true
}

#[async_trait]
impl IssueStorage for InMemoryStore {
    async fn create(&self, draft: IssueDraft) -> Result<Issue> {
        draft.validate()?;

        let mut inner = self.lock().await;
        let id = inner.next_id();
        let now = Utc::now();

        let issue = Issue {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            assignee: draft.assignee,
            created_at: now,
            updated_at: now,
        };

        inner.issues.insert(id, issue.clone());
        tracing::debug!(id = %id, "created issue");

        Ok(issue)
    }

    async fn get(&self, id: IssueId) -> Result<Option<Issue>> {
        let inner = self.lock().await;
        Ok(inner.issues.get(&id).cloned())
    }

    async fn update(&self, id: IssueId, draft: IssueDraft) -> Result<Issue> {
        draft.validate()?;

        let mut inner = self.lock().await;
        let issue = inner
            .issues
            .get_mut(&id)
            .ok_or(Error::IssueNotFound(id))?;

        // Overwrite all mutable fields; id and created_at stay as-is.
        issue.title = draft.title;
        issue.description = draft.description;
        issue.status = draft.status;
        issue.priority = draft.priority;
        issue.assignee = draft.assignee;
        issue.updated_at = Utc::now();

        tracing::debug!(id = %id, "updated issue");

        Ok(issue.clone())
    }

    async fn query(&self, query: &IssueQuery) -> Result<IssueList> {
        let inner = self.lock().await;

        // Filter. Iteration is in id order, which fixes the relative
        // order that the stable sort preserves for equal keys.
        let mut issues: Vec<Issue> = inner
            .issues
            .values()
            .filter(|issue| matches(&query.filter, issue))
            .cloned()
            .collect();
        drop(inner);

        // Sort.
        sort_issues(&mut issues, &query.sort_by, query.sort_dir);

        // Paginate. total counts the filtered set, not the page.
        let total = issues.len();
        let page = query.page.page.max(1) as usize;
        let page_size = query.page.page_size as usize;
        let start = (page - 1) * page_size;
        let items: Vec<Issue> = issues.into_iter().skip(start).take(page_size).collect();

        Ok(IssueList { items, total })
    }
}
