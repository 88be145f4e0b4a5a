//! Store access error types.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while talking to the shared table store.
///
/// Read-path transport failures never reach callers of `TableStore::read`;
/// they are logged and collapsed into an empty table so that "no data" and
/// "table unreachable" look identical downstream. Write failures are always
/// surfaced.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("write to {table} failed: {reason}")]
    WriteFailed { table: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV export decode failed: {0}")]
    Csv(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}
