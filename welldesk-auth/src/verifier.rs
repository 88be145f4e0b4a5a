//! Credential lookup against the shared store.

use crate::error::AuthResult;
use std::sync::Arc;
use tracing::debug;
use welldesk_store::normalize::strip_numeric_artifact;
use welldesk_store::{Table, TableStore};
use welldesk_types::Row;

/// Looks up a principal by username and password in one table.
pub struct CredentialVerifier {
    store: Arc<TableStore>,
}

impl CredentialVerifier {
    pub fn new(store: Arc<TableStore>) -> Self {
        Self { store }
    }

    /// Returns the first row matching the credentials, or `None`.
    ///
    /// Usernames compare case-insensitively after trimming; passwords
    /// compare case-sensitively after trimming and numeric-artifact
    /// stripping on both sides. Duplicate usernames are a data-quality
    /// defect in the store, not an error here: the first row in table
    /// order wins. An empty or unreachable table is an ordinary miss.
    pub async fn verify(
        &self,
        table: Table,
        username: &str,
        password: &str,
    ) -> AuthResult<Option<Row>> {
        let rows = self.store.read(table).await?;

        let wanted_user = username.trim().to_lowercase();
        let wanted_pass = strip_numeric_artifact(password.trim()).to_string();

        let matched = rows.into_iter().find(|row| {
            let user = row.get("username").map(String::as_str).unwrap_or_default();
            let pass = row.get("password").map(String::as_str).unwrap_or_default();
            user.trim().to_lowercase() == wanted_user
                && strip_numeric_artifact(pass.trim()) == wanted_pass
        });

        if matched.is_none() {
            debug!("credential miss in {table}");
        }
        Ok(matched)
    }
}
