//! Core in-memory storage data structures.
//!
//! This module contains the inner state that holds all data and is
//! wrapped in `Arc<Mutex<>>` for thread safety.

use crate::domain::{Issue, IssueId};
use std::collections::BTreeMap;

/// Inner storage state (not thread-safe on its own).
pub(crate) struct StoreInner {
    /// Issues keyed by id, kept in id order.
    pub(super) issues: BTreeMap<IssueId, Issue>,

    /// Next id to assign. Monotonic, never reused.
    next_id: u64,
}

impl StoreInner {
    /// Create a new empty store.
    pub(crate) fn new() -> Self {
        Self {
            issues: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Take the next sequential id.
    pub(super) fn next_id(&mut self) -> IssueId {
        let id = IssueId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
