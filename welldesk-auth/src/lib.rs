//! Tenant-scoped authentication for the Welldesk portal.
//!
//! Two principal kinds, studios and their clients, authenticate against
//! the same loosely-typed shared store. The pieces:
//! - credential verification with normalization-aware comparisons,
//! - a time-boxed trial gate for unpaid studios (fail-open on bad dates),
//! - studio resolution and the client write surface,
//! - per-connection session establishment with no global state.

pub mod directory;
pub mod error;
pub mod session;
pub mod trial;
pub mod verifier;

pub use directory::TenantDirectory;
pub use error::{AuthError, AuthResult};
pub use session::{Authenticator, Principal, Session};
pub use trial::{TrialDecision, GRACE_PERIOD_DAYS};
pub use verifier::CredentialVerifier;
