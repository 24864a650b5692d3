//! Fixed sample data loaded at startup.
//!
//! The server starts from a known set of ten issues so the API has
//! something to serve immediately; nothing persists across restarts.

use crate::domain::IssueDraft;
use crate::error::Result;
use crate::storage::IssueStorage;

fn draft(title: &str, description: &str, status: &str, priority: &str, assignee: &str) -> IssueDraft {
    IssueDraft {
        title: title.to_string(),
        description: description.to_string(),
        status: status.to_string(),
        priority: priority.to_string(),
        assignee: assignee.to_string(),
    }
}

/// The ten sample issues, in creation order.
pub fn sample_issues() -> Vec<IssueDraft> {
    vec![
        draft(
            "Fix login button styling on mobile",
            "The login button is misaligned on screens smaller than 375px. Needs CSS adjustment.",
            "Open",
            "High",
            "Alice",
        ),
        draft(
            "Implement password reset functionality",
            "Users need a way to reset their password via email. This involves backend and frontend changes.",
            "In Progress",
            "High",
            "Bob",
        ),
        draft(
            "Update documentation for API endpoint v2",
            "The documentation for the new /api/v2/users endpoint is outdated. It needs to reflect the new response format.",
            "Open",
            "Medium",
            "Charlie",
        ),
        draft(
            "Refactor user authentication service",
            "The current authentication service is monolithic and hard to maintain. It should be broken down into smaller, testable units.",
            "Done",
            "Low",
            "Alice",
        ),
        draft(
            "Add loading spinners to data tables",
            "When data is being fetched for tables, a loading spinner should be displayed to improve user experience.",
            "In Progress",
            "Medium",
            "David",
        ),
        draft(
            "UI bug on the dashboard with dark mode",
            "The chart colors on the dashboard are not visible in dark mode.",
            "Open",
            "High",
            "Eve",
        ),
        draft(
            "Optimize database query for reports",
            "The quarterly report generation is too slow. The main SQL query needs optimization.",
            "Done",
            "High",
            "Frank",
        ),
        draft(
            "Add support for single sign-on (SSO)",
            "Integrate with an OAuth2 provider to allow users to sign in with their Google accounts.",
            "Open",
            "Medium",
            "Grace",
        ),
        draft(
            "Fix typo in the footer",
            "There is a spelling mistake in the copyright notice in the footer.",
            "Open",
            "Low",
            "Bob",
        ),
        draft(
            "Prepare for production release v1.2.0",
            "Create a release branch, update version numbers, and run final regression tests.",
            "In Progress",
            "High",
            "Heidi",
        ),
    ]
}

/// Load the sample issues into a store.
///
/// Intended for an empty store, where the issues receive ids 1 through
/// 10 in the order above.
///
/// # Errors
///
/// Propagates any store error; the fixed drafts themselves always
/// pass validation.
pub async fn seed(store: &dyn IssueStorage) -> Result<()> {
    for issue in sample_issues() {
        store.create(issue).await?;
    }
    tracing::info!("seeded store with sample issues");
    Ok(())
}
