//! Session establishment.
//!
//! A `Session` exists only as the product of a successful login: role and
//! principal are set together at construction and never partially
//! updated. There is no process-wide current user: each connection owns
//! its session value and logout is dropping it.

use crate::directory::TenantDirectory;
use crate::error::{AuthError, AuthResult};
use crate::trial::{self, TrialDecision};
use crate::verifier::CredentialVerifier;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};
use welldesk_store::{Table, TableStore};
use welldesk_types::{ClientRecord, Role, StudioRecord};

/// The authenticated principal behind a session.
#[derive(Clone, Debug)]
pub enum Principal {
    Studio(StudioRecord),
    Client(ClientRecord),
}

/// An authenticated connection's state.
#[derive(Clone, Debug)]
pub struct Session {
    principal: Principal,
    /// For client sessions, the studio they belong to; absent when the
    /// tenant reference dangles.
    linked_studio: Option<StudioRecord>,
}

impl Session {
    pub fn role(&self) -> Role {
        match self.principal {
            Principal::Studio(_) => Role::Studio,
            Principal::Client(_) => Role::Client,
        }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// The studio whose branding this session displays, if any.
    pub fn linked_studio(&self) -> Option<&StudioRecord> {
        self.linked_studio.as_ref()
    }
}

/// Everything a login needs: verifier, directory and the store they share.
pub struct Authenticator {
    verifier: CredentialVerifier,
    directory: TenantDirectory,
}

impl Authenticator {
    pub fn new(store: Arc<TableStore>) -> Self {
        Self {
            verifier: CredentialVerifier::new(Arc::clone(&store)),
            directory: TenantDirectory::new(store),
        }
    }

    pub fn directory(&self) -> &TenantDirectory {
        &self.directory
    }

    /// Authenticates a studio and applies the trial gate.
    ///
    /// A blocked trial returns `TrialExpired` after the credential match
    /// succeeded (distinct from `NotFound` so the caller can render the
    /// overdue day count) and establishes no session.
    pub async fn login_studio(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> AuthResult<Session> {
        let row = self
            .verifier
            .verify(Table::Studios, username, password)
            .await?
            .ok_or(AuthError::NotFound)?;
        let studio = StudioRecord::from_row(&row);

        match trial::evaluate(&studio, now) {
            TrialDecision::Allowed => {}
            TrialDecision::Blocked { days_overdue } => {
                return Err(AuthError::TrialExpired { days_overdue });
            }
        }

        info!("studio {:?} logged in", studio.username);
        Ok(Session {
            principal: Principal::Studio(studio),
            linked_studio: None,
        })
    }

    /// Authenticates a client and resolves their studio for branding.
    pub async fn login_client(&self, username: &str, password: &str) -> AuthResult<Session> {
        let row = self
            .verifier
            .verify(Table::Clients, username, password)
            .await?
            .ok_or(AuthError::NotFound)?;
        let client = ClientRecord::from_row(&row);

        let linked_studio = self.directory.resolve(&client.tenant_username).await?;
        if linked_studio.is_none() {
            // Orphaned tenant reference: log it and proceed unbranded.
            warn!(
                "client {:?} references unknown studio {:?}",
                client.username, client.tenant_username
            );
        }

        info!("client {:?} logged in", client.username);
        Ok(Session {
            principal: Principal::Client(client),
            linked_studio,
        })
    }
}
