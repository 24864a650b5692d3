//! Error types for dowel operations.

use crate::domain::IssueId;
use thiserror::Error;

/// The error type for issue store operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Issue not found.
    #[error("Issue not found: {0}")]
    IssueNotFound(IssueId),

    /// A required field failed validation.
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// A specialized Result type for dowel operations.
pub type Result<T> = std::result::Result<T, Error>;
