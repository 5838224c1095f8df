//! Error Types
//!
//! Failures of the item list core.

use thiserror::Error;

/// Common result type for item list operations
pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
    /// Submitted text is empty after trimming
    #[error("item label is empty")]
    EmptyLabel,
    /// Stored value is not a JSON list of strings
    #[error("stored items are not a list of strings: {0}")]
    StorageParse(#[from] serde_json::Error),
    /// The storage backend refused a write or delete
    #[error("storage write failed: {0}")]
    StorageWrite(String),
    /// A row action referred to a row that is no longer rendered
    #[error("no item at row {0}")]
    NoSuchRow(usize),
}
