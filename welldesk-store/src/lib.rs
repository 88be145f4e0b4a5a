//! Resilient access layer for the shared Welldesk table store.
//!
//! The backend is a hosted spreadsheet-style service with:
//! - an authenticated structured read path returning typed JSON rows,
//! - an unauthenticated CSV export used strictly as a read fallback,
//! - a single privileged write path for whole-table overwrite and
//!   single-row append.
//!
//! There is no schema enforcement, no transactions and no server-side
//! uniqueness on the backend, and humans edit it concurrently. Every read
//! passes through the normalizer before callers see it.

pub mod config;
pub mod error;
pub mod normalize;
pub mod sheet_client;
pub mod table_store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use table_store::{Table, TableStore};
