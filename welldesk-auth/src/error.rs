//! Authentication error types.

use thiserror::Error;
use welldesk_store::StoreError;

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors from credential verification, trial gating and registration.
///
/// `NotFound` covers both a missing username and a wrong password;
/// callers must render a generic invalid-credentials message and never
/// reveal which one it was.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no record matches the supplied credentials")]
    NotFound,

    #[error("trial expired {days_overdue} days ago")]
    TrialExpired { days_overdue: i64 },

    #[error("username already taken: {0}")]
    DuplicateUsername(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
