//! Errors raised by the part store and the tree algorithms.

use thiserror::Error;

use super::part::PartId;

/// A specialized Result type for BOM operations.
pub type BomResult<T> = Result<T, BomError>;

/// Errors that can occur while reading or mutating the part tree.
#[derive(Debug, Error)]
pub enum BomError {
    /// A referenced part (or parent part) does not exist.
    #[error("Part with Id '{id}' not found")]
    NotFound { id: PartId },

    /// Name or number failed validation. Raised before the store is touched.
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The backing store failed (I/O, connectivity, constraint violation).
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    /// The operation was aborted through its cancellation token.
    #[error("Operation cancelled")]
    Cancelled,

    /// Materialization stopped because the subtree is deeper or larger than allowed.
    #[error("Subtree of part '{root}' exceeds the configured {limit}")]
    TreeLimitExceeded { root: PartId, limit: String },

    /// A part was reached twice while expanding a subtree (cycle in parent pointers).
    #[error("Part '{id}' appears more than once in its own subtree")]
    CorruptTree { id: PartId },
}

impl BomError {
    /// Create a new "not found" error.
    pub fn not_found(id: PartId) -> Self {
        Self::NotFound { id }
    }

    /// Create a new validation error.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Create a new "tree limit exceeded" error.
    pub fn limit_exceeded(root: PartId, limit: impl Into<String>) -> Self {
        Self::TreeLimitExceeded {
            root,
            limit: limit.into(),
        }
    }

    /// Whether this error is an explicit "not found" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
