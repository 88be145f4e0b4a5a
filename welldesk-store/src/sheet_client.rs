//! HTTP client for the hosted table service.
//!
//! Three wire surfaces, mirroring the privileges involved:
//! - structured rows read (bearer `read_token`),
//! - public CSV export (no auth, fallback only, never written to),
//! - overwrite/append writes (bearer `service_token`).
//!
//! This layer speaks raw transport; the dual-path policy, caching and
//! normalization live in [`crate::table_store`].

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::normalize::RawRow;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use welldesk_types::Row;

/// Low-level client for one shared document on the table service.
#[derive(Debug)]
pub struct SheetClient {
    client: Client,
    config: StoreConfig,
}

#[derive(Deserialize)]
struct RowsResponse {
    rows: Vec<RawRow>,
}

impl SheetClient {
    /// Builds a client, validating startup-fatal configuration first.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Ok(Self { client, config })
    }

    fn rows_url(&self, table: &str) -> String {
        format!(
            "{}/v1/documents/{}/tables/{}/rows",
            self.config.api_base_url, self.config.document_id, table
        )
    }

    /// Public CSV export URL, derived from the document id and keyed by
    /// table name. Read-only by construction on the service side.
    fn export_url(&self, table: &str) -> String {
        format!(
            "{}/{}?format=csv&table={}",
            self.config.export_base_url, self.config.document_id, table
        )
    }

    /// Reads a table through the authenticated structured endpoint.
    pub async fn read_rows(&self, table: &str) -> StoreResult<Vec<RawRow>> {
        let resp: RowsResponse = self
            .client
            .get(self.rows_url(table))
            .bearer_auth(&self.config.read_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("structured read of {table}: {} rows", resp.rows.len());
        Ok(resp.rows)
    }

    /// Reads a table through the public CSV export.
    pub async fn read_export(&self, table: &str) -> StoreResult<Vec<RawRow>> {
        let body = self
            .client
            .get(self.export_url(table))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let rows = parse_csv_export(&body)?;
        debug!("export read of {table}: {} rows", rows.len());
        Ok(rows)
    }

    /// Replaces the entire table contents in one call.
    pub async fn overwrite_rows(&self, table: &str, rows: &[Row]) -> StoreResult<()> {
        self.client
            .put(self.rows_url(table))
            .bearer_auth(&self.config.service_token)
            .json(&serde_json::json!({ "rows": rows }))
            .send()
            .await
            .map_err(|e| write_failed(table, e))?
            .error_for_status()
            .map_err(|e| write_failed(table, e))?;
        Ok(())
    }

    /// Appends exactly one row to the end of the table.
    pub async fn append_row(&self, table: &str, row: &Row) -> StoreResult<()> {
        self.client
            .post(format!("{}:append", self.rows_url(table)))
            .bearer_auth(&self.config.service_token)
            .json(&serde_json::json!({ "row": row }))
            .send()
            .await
            .map_err(|e| write_failed(table, e))?
            .error_for_status()
            .map_err(|e| write_failed(table, e))?;
        Ok(())
    }
}

fn write_failed(table: &str, err: reqwest::Error) -> StoreError {
    StoreError::WriteFailed {
        table: table.to_string(),
        reason: err.to_string(),
    }
}

/// Decodes a CSV export body into raw rows keyed by the header line.
///
/// Ragged records are tolerated (hand edits leave short lines behind)
/// and missing trailing cells simply have no entry.
fn parse_csv_export(body: &str) -> StoreResult<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| StoreError::Csv(e.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| StoreError::Csv(e.to_string()))?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, field)| (header.to_string(), Value::String(field.to_string())))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}
