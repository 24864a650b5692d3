//! In-memory storage backend.
//!
//! All data is held in RAM and lost when the process exits. The store
//! is the single owner of the issue collection; callers only ever
//! receive clones of stored records.
//!
//! # Architecture
//!
//! - `BTreeMap<IssueId, Issue>` keeps issues in id order, which makes
//!   the pre-sort iteration order deterministic
//! - a monotonic `u64` counter assigns ids, starting at 1
//!
//! # Thread Safety
//!
//! The inner state is wrapped in `Arc<Mutex<StoreInner>>`. Every
//! operation (create, get, update, query) takes the one lock, so
//! mutations are never partially visible to a query.
//!
//! # Performance Characteristics
//!
//! - Create / read / update: O(log n) map operations
//! - Query: O(n) filter plus O(n log n) sort over the issue count

mod inner;
mod sorting;
mod trait_impl;

use crate::storage::IssueStorage;
use inner::StoreInner;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Thread-safe in-memory store.
///
/// This type alias wraps the inner state in `Arc<Mutex<>>` for
/// thread-safe async access. It implements [`IssueStorage`] via the
/// trait implementation in `trait_impl.rs`.
pub(crate) type InMemoryStore = Arc<Mutex<StoreInner>>;

/// Create a new, empty in-memory store.
///
/// # Example
///
/// ```
/// use dowel::storage::new_in_memory_store;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let store = new_in_memory_store();
///     // Use store...
/// }
/// ```
pub fn new_in_memory_store() -> Arc<dyn IssueStorage> {
    Arc::new(Arc::new(Mutex::new(StoreInner::new())))
}
