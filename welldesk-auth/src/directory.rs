//! Studio lookup and the client write surface.
//!
//! The store enforces nothing: tenant references can dangle, usernames
//! are unique only by convention, and updates are whole-table overwrites
//! with no isolation. This module reconstructs what it can (check before
//! insert) and documents what it cannot (the races below).

use crate::error::{AuthError, AuthResult};
use std::sync::Arc;
use tracing::{debug, info};
use welldesk_store::{Table, TableStore};
use welldesk_types::{ClientRecord, StudioRecord};

fn usernames_match(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Resolves studio records and manages the client roster.
pub struct TenantDirectory {
    store: Arc<TableStore>,
}

impl TenantDirectory {
    pub fn new(store: Arc<TableStore>) -> Self {
        Self { store }
    }

    /// Resolves the studio a client record points at.
    ///
    /// Absence is a valid outcome: an orphaned reference left behind by a
    /// hand edit. It only disables branding, never the client's login.
    pub async fn resolve(&self, tenant_username: &str) -> AuthResult<Option<StudioRecord>> {
        let rows = self.store.read(Table::Studios).await?;
        let found = rows
            .iter()
            .map(StudioRecord::from_row)
            .find(|studio| usernames_match(&studio.username, tenant_username));
        if found.is_none() {
            debug!("no studio named {tenant_username:?}");
        }
        Ok(found)
    }

    /// Lists the clients linked to one studio, in table order.
    pub async fn clients_of(&self, tenant_username: &str) -> AuthResult<Vec<ClientRecord>> {
        let rows = self.store.read(Table::Clients).await?;
        Ok(rows
            .iter()
            .map(ClientRecord::from_row)
            .filter(|client| usernames_match(&client.tenant_username, tenant_username))
            .collect())
    }

    /// Registers a new client, refusing duplicate usernames.
    ///
    /// The table is re-read immediately before the insert and the check is
    /// case-insensitive across the whole table, not per tenant. Two
    /// concurrent registrations can still both pass the check and both
    /// append; the store offers nothing to close that race, and this
    /// layer does not pretend otherwise.
    pub async fn create_client(&self, candidate: &ClientRecord) -> AuthResult<()> {
        let rows = self.store.read(Table::Clients).await?;
        let taken = rows
            .iter()
            .map(ClientRecord::from_row)
            .any(|existing| usernames_match(&existing.username, &candidate.username));
        if taken {
            return Err(AuthError::DuplicateUsername(candidate.username.clone()));
        }

        self.store
            .append(Table::Clients, &candidate.to_row())
            .await?;
        info!("registered client {:?}", candidate.username);
        Ok(())
    }

    /// Updates a client's contact columns via whole-table overwrite.
    ///
    /// Read-modify-write with no isolation: a concurrent writer's change
    /// to any row of CLIENTS can be lost (last write wins at table
    /// granularity).
    pub async fn update_contact(
        &self,
        client_username: &str,
        phone: Option<String>,
        email: Option<String>,
    ) -> AuthResult<()> {
        let mut rows = self.store.read(Table::Clients).await?;

        let row = rows
            .iter_mut()
            .find(|row| {
                row.get("username")
                    .is_some_and(|u| usernames_match(u, client_username))
            })
            .ok_or(AuthError::NotFound)?;

        row.insert("phone".into(), phone.unwrap_or_default());
        row.insert("email".into(), email.unwrap_or_default());

        self.store.overwrite(Table::Clients, &rows).await?;
        info!("updated contact columns for client {client_username:?}");
        Ok(())
    }
}
