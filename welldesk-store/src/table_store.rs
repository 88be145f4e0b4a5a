//! Dual-path table access with read-through caching.
//!
//! Reads try the structured endpoint first and fall back to the public
//! CSV export; when both paths fail the table is reported empty, so
//! callers treat "no data" and "unreachable" identically. Writes go
//! through the single privileged path only and synchronously invalidate
//! the table's cache entry on success. There is no cross-process
//! invalidation, so a stale read right after another process writes is
//! expected and acceptable.

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::normalize::normalize_rows;
use crate::sheet_client::SheetClient;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use welldesk_types::Row;

/// The logical tables of the shared document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Table {
    Studios,
    Clients,
    Plans,
}

impl Table {
    /// The sheet name inside the shared document.
    pub fn name(self) -> &'static str {
        match self {
            Table::Studios => "CONFIG_STUDIOS",
            Table::Clients => "CLIENTS",
            Table::Plans => "PLANS",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
struct CacheEntry {
    rows: Vec<Row>,
    fetched_at: Instant,
}

/// Resilient access to the shared tabular backend.
#[derive(Debug)]
pub struct TableStore {
    client: SheetClient,
    cache: RwLock<HashMap<Table, CacheEntry>>,
    cache_ttl: Duration,
}

impl TableStore {
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        let cache_ttl = Duration::from_secs(config.cache_ttl_secs);
        Ok(Self {
            client: SheetClient::new(config)?,
            cache: RwLock::new(HashMap::new()),
            cache_ttl,
        })
    }

    /// Reads a table, normalized, newest cache copy permitting.
    ///
    /// Returns an empty table when both read paths fail; the failure is
    /// logged here and deliberately not distinguishable by the caller.
    pub async fn read(&self, table: Table) -> StoreResult<Vec<Row>> {
        if !self.cache_ttl.is_zero() {
            let cache = self.cache.read().await;
            if let Some(entry) = cache.get(&table) {
                if entry.fetched_at.elapsed() < self.cache_ttl {
                    return Ok(entry.rows.clone());
                }
            }
        }

        let rows = self.fetch(table).await;

        if !self.cache_ttl.is_zero() {
            let mut cache = self.cache.write().await;
            cache.insert(
                table,
                CacheEntry {
                    rows: rows.clone(),
                    fetched_at: Instant::now(),
                },
            );
        }

        Ok(rows)
    }

    async fn fetch(&self, table: Table) -> Vec<Row> {
        match self.client.read_rows(table.name()).await {
            Ok(raw) => return normalize_rows(raw),
            Err(e) => {
                debug!("structured read of {table} failed, trying export: {e}");
            }
        }

        match self.client.read_export(table.name()).await {
            Ok(raw) => normalize_rows(raw),
            Err(e) => {
                // Both paths down. Callers see an empty table either way.
                warn!("{table} unreachable on both read paths: {e}");
                Vec::new()
            }
        }
    }

    /// Replaces the entire table contents; no fallback, no partial write.
    pub async fn overwrite(&self, table: Table, rows: &[Row]) -> StoreResult<()> {
        self.client.overwrite_rows(table.name(), rows).await?;
        self.invalidate(table).await;
        Ok(())
    }

    /// Appends one row to the end of the table.
    pub async fn append(&self, table: Table, row: &Row) -> StoreResult<()> {
        self.client.append_row(table.name(), row).await?;
        self.invalidate(table).await;
        Ok(())
    }

    /// Drops the cached copy of a table so the next read refetches.
    async fn invalidate(&self, table: Table) {
        let mut cache = self.cache.write().await;
        if cache.remove(&table).is_some() {
            debug!("invalidated cache for {table}");
        }
    }
}
