//! Shared test helpers for integration tests against a mock table service.

// Each test binary compiles this module and uses a different subset.
#![allow(dead_code)]

use std::sync::Arc;
use welldesk_store::{StoreConfig, TableStore};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn store(server: &MockServer) -> Arc<TableStore> {
    Arc::new(TableStore::new(StoreConfig::for_base_url(&server.uri())).unwrap())
}

pub fn rows_path(table: &str) -> String {
    format!("/v1/documents/doc-test/tables/{table}/rows")
}

/// Mounts the structured read endpoint for one table.
pub async fn mount_rows(server: &MockServer, table: &str, rows: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(rows_path(table)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "rows": rows })),
        )
        .mount(server)
        .await;
}

/// Mounts the append endpoint for one table.
pub async fn mount_append(server: &MockServer, table: &str) {
    Mock::given(method("POST"))
        .and(path(format!("{}:append", rows_path(table))))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"appended": 1})))
        .mount(server)
        .await;
}

/// Mounts the overwrite endpoint for one table.
pub async fn mount_overwrite(server: &MockServer, table: &str) {
    Mock::given(method("PUT"))
        .and(path(rows_path(table)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(server)
        .await;
}
