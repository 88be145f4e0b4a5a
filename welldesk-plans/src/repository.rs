//! Append-only plan history.
//!
//! PLANS rows are never updated or deleted by this layer. "The current
//! plan for a client" means the last matching row in table order. A
//! hand edit that rewrites timestamps does not change which plan is
//! current, only reordering rows would.

use crate::error::PlanResult;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;
use welldesk_store::{Table, TableStore};
use welldesk_types::PlanRecord;

/// Format the assignment date is stamped with at write time.
const ASSIGNED_AT_FORMAT: &str = "%d/%m/%Y";

/// Read/append access to a client's plan history.
pub struct PlanRepository {
    store: Arc<TableStore>,
}

impl PlanRepository {
    pub fn new(store: Arc<TableStore>) -> Self {
        Self { store }
    }

    /// All plans for one client, oldest first (table order).
    pub async fn list_for(&self, client_username: &str) -> PlanResult<Vec<PlanRecord>> {
        let rows = self.store.read(Table::Plans).await?;
        Ok(rows
            .iter()
            .map(PlanRecord::from_row)
            .filter(|plan| {
                plan.client_username
                    .trim()
                    .eq_ignore_ascii_case(client_username.trim())
            })
            .collect())
    }

    /// The client's current plan: the last row in table order.
    pub async fn current(&self, client_username: &str) -> PlanResult<Option<PlanRecord>> {
        Ok(self.list_for(client_username).await?.pop())
    }

    /// Appends one finished plan to the history.
    pub async fn append(&self, record: &PlanRecord) -> PlanResult<()> {
        self.store.append(Table::Plans, &record.to_row()).await?;
        info!("appended plan for client {:?}", record.client_username);
        Ok(())
    }

    /// Stamps and appends a freshly generated plan.
    pub async fn append_new(
        &self,
        client_username: &str,
        plan_text: &str,
        internal_note: &str,
        now: DateTime<Utc>,
    ) -> PlanResult<PlanRecord> {
        let record = PlanRecord {
            client_username: client_username.to_string(),
            assigned_at: now.format(ASSIGNED_AT_FORMAT).to_string(),
            plan_text: plan_text.to_string(),
            internal_note: internal_note.to_string(),
        };
        self.append(&record).await?;
        Ok(record)
    }
}
