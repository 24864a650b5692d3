//! Storage abstraction layer for dowel.
//!
//! This module provides the core storage trait and a factory for the
//! in-memory backend. The trait is object-safe, allowing dynamic
//! dispatch via `Arc<dyn IssueStorage>`, which is how the HTTP layer
//! shares one store across handlers.
//!
//! # Thread Safety
//!
//! All methods take `&self`; implementations use interior mutability
//! (a single async mutex for the in-memory backend) so that a shared
//! store can be mutated from concurrent tasks. The single lock is the
//! whole concurrency story: every operation sees all mutations that
//! completed before it acquired the lock.
//!
//! # Example
//!
//! ```
//! use dowel::domain::{IssueDraft, IssueQuery};
//! use dowel::storage::new_in_memory_store;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let store = new_in_memory_store();
//!
//!     let issue = store
//!         .create(IssueDraft {
//!             title: "Implement feature X".to_string(),
//!             description: "Add new functionality".to_string(),
//!             status: "Open".to_string(),
//!             priority: "High".to_string(),
//!             assignee: "alice".to_string(),
//!         })
//!         .await?;
//!     println!("Created issue: {}", issue.id);
//!
//!     let page = store.query(&IssueQuery::default()).await?;
//!     assert_eq!(page.total, 1);
//!
//!     Ok(())
//! }
//! ```

use crate::domain::{Issue, IssueDraft, IssueId, IssueList, IssueQuery};
use crate::error::Result;
use async_trait::async_trait;

// Storage backend implementations
pub mod in_memory;

pub use in_memory::new_in_memory_store;

/// Core storage trait for issue management.
///
/// Implementations must be `Send + Sync` to support concurrent access
/// in async contexts.
///
/// # Error Handling
///
/// All methods return `Result<T>` where the error type includes:
/// - `IssueNotFound`: the requested issue doesn't exist
/// - `Validation`: a draft failed validation (e.g. empty title)
#[async_trait]
pub trait IssueStorage: Send + Sync {
    /// Create a new issue from a draft.
    ///
    /// Assigns the next sequential id (starting at 1, never reused) and
    /// stamps `created_at` and `updated_at` with the same instant.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the draft fails validation.
    async fn create(&self, draft: IssueDraft) -> Result<Issue>;

    /// Get an issue by ID.
    ///
    /// Returns `None` if the issue doesn't exist; the boundary layer is
    /// responsible for surfacing that as a not-found error.
    async fn get(&self, id: IssueId) -> Result<Option<Issue>>;

    /// Update an existing issue.
    ///
    /// Overwrites all five mutable fields from the draft and refreshes
    /// `updated_at`. `id` and `created_at` are never touched.
    ///
    /// # Errors
    ///
    /// - `Error::IssueNotFound` if the issue doesn't exist
    /// - `Error::Validation` if the draft fails validation
    async fn update(&self, id: IssueId, draft: IssueDraft) -> Result<Issue>;

    /// Run the query pipeline: filter, then sort, then paginate.
    ///
    /// The returned `total` is the filtered count before pagination,
    /// not the page length. An out-of-range page yields an empty page,
    /// never an error. Read-only.
    async fn query(&self, query: &IssueQuery) -> Result<IssueList>;
}
