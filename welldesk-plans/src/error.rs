//! Plan layer error types.

use thiserror::Error;
use welldesk_store::StoreError;

/// Result type for plan operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors from the plan repository and generation client.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
