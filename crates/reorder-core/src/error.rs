//! Reorder Errors
//!
//! Failures are local: the list is never touched when an error is returned.

use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// Common result type for reorder operations
pub type ReorderResult<T> = Result<T, ReorderError>;

/// Errors reported by list operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReorderError {
    /// An operation referenced an id that is not in the list
    NotFound(ItemId),
    /// The initial sequence could not be parsed
    MalformedInput(String),
}

impl std::fmt::Display for ReorderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReorderError::NotFound(id) => write!(f, "Not found: item {}", id),
            ReorderError::MalformedInput(msg) => write!(f, "Malformed input: {}", msg),
        }
    }
}

impl std::error::Error for ReorderError {}
