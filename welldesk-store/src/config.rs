//! Store access configuration.

use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

/// Configuration for the shared table store.
///
/// The read and write paths use distinct credentials: `read_token` for the
/// structured rows endpoint, `service_token` for overwrite/append. The CSV
/// export fallback is unauthenticated and derived from `document_id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL for the structured rows API (e.g., "https://tables.welldesk.io").
    pub api_base_url: String,

    /// Identifier of the shared document holding all logical tables.
    pub document_id: String,

    /// Token for the authenticated read path.
    pub read_token: String,

    /// Token for the privileged write path.
    pub service_token: String,

    /// Base URL for the public CSV export fallback.
    pub export_base_url: String,

    /// Read cache TTL in seconds; 0 disables caching entirely.
    pub cache_ttl_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://tables.welldesk.io".to_string(),
            document_id: String::new(),
            read_token: String::new(),
            service_token: String::new(),
            export_base_url: "https://tables.welldesk.io/export".to_string(),
            cache_ttl_secs: 0,
        }
    }
}

impl StoreConfig {
    /// Validates startup-fatal fields.
    ///
    /// Store credentials arrive out of band at process start; an empty
    /// document id or token means the process must not begin serving
    /// sessions.
    pub fn validate(&self) -> StoreResult<()> {
        if self.document_id.trim().is_empty() {
            return Err(StoreError::Config("document_id is empty".to_string()));
        }
        if self.read_token.trim().is_empty() {
            return Err(StoreError::Config("read_token is empty".to_string()));
        }
        if self.service_token.trim().is_empty() {
            return Err(StoreError::Config("service_token is empty".to_string()));
        }
        Ok(())
    }

    /// Creates a config pointed at a local mock server for testing.
    pub fn for_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.to_string(),
            document_id: "doc-test".to_string(),
            read_token: "read-token".to_string(),
            service_token: "service-token".to_string(),
            export_base_url: format!("{base_url}/export"),
            cache_ttl_secs: 0,
        }
    }
}
