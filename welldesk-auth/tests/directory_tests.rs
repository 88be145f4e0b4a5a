mod support;

use welldesk_auth::{AuthError, TenantDirectory};
use welldesk_types::ClientRecord;
use wiremock::MockServer;

fn candidate(username: &str) -> ClientRecord {
    ClientRecord {
        username: username.into(),
        password: "1234".into(),
        full_name: "Mario Rossi".into(),
        tenant_username: "acme".into(),
        physical_data: None,
        goal: Some("maintenance".into()),
        email: None,
        phone: None,
    }
}

#[tokio::test]
async fn resolve_finds_studio_case_insensitively() {
    let server = MockServer::start().await;
    support::mount_rows(
        &server,
        "CONFIG_STUDIOS",
        serde_json::json!([
            { "username": "Acme", "password": "pw", "display_name": "Acme Wellness" }
        ]),
    )
    .await;

    let directory = TenantDirectory::new(support::store(&server));
    let studio = directory.resolve("acme").await.unwrap().unwrap();
    assert_eq!(studio.display_name, "Acme Wellness");
}

#[tokio::test]
async fn resolve_absence_is_ok_not_error() {
    let server = MockServer::start().await;
    support::mount_rows(&server, "CONFIG_STUDIOS", serde_json::json!([])).await;

    let directory = TenantDirectory::new(support::store(&server));
    assert!(directory.resolve("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn clients_of_filters_by_tenant_reference() {
    let server = MockServer::start().await;
    support::mount_rows(
        &server,
        "CLIENTS",
        serde_json::json!([
            { "username": "mario", "tenant_username": "acme" },
            { "username": "luigi", "tenant_username": "other" },
            { "username": "peach", "tenant_username": "ACME " }
        ]),
    )
    .await;

    let directory = TenantDirectory::new(support::store(&server));
    let clients = directory.clients_of("acme").await.unwrap();
    let names: Vec<_> = clients.iter().map(|c| c.username.as_str()).collect();
    assert_eq!(names, vec!["mario", "peach"]);
}

#[tokio::test]
async fn create_client_refuses_duplicate_username() {
    // "Mario" exists; registering "mario" must refuse without writing.
    let server = MockServer::start().await;
    support::mount_rows(
        &server,
        "CLIENTS",
        serde_json::json!([ { "username": "Mario", "tenant_username": "acme" } ]),
    )
    .await;

    let directory = TenantDirectory::new(support::store(&server));
    let result = directory.create_client(&candidate("mario")).await;
    match result.unwrap_err() {
        AuthError::DuplicateUsername(name) => assert_eq!(name, "mario"),
        other => panic!("expected DuplicateUsername, got {other:?}"),
    }
    // No append endpoint was mounted: a write attempt would have errored.
}

#[tokio::test]
async fn create_client_appends_when_username_is_free() {
    let server = MockServer::start().await;
    support::mount_rows(
        &server,
        "CLIENTS",
        serde_json::json!([ { "username": "luigi", "tenant_username": "acme" } ]),
    )
    .await;
    support::mount_append(&server, "CLIENTS").await;

    let directory = TenantDirectory::new(support::store(&server));
    directory.create_client(&candidate("mario")).await.unwrap();
}

#[tokio::test]
async fn update_contact_overwrites_whole_table() {
    let server = MockServer::start().await;
    support::mount_rows(
        &server,
        "CLIENTS",
        serde_json::json!([
            { "username": "mario", "tenant_username": "acme", "phone": "nan", "email": "old@example.com" }
        ]),
    )
    .await;
    support::mount_overwrite(&server, "CLIENTS").await;

    let directory = TenantDirectory::new(support::store(&server));
    directory
        .update_contact("mario", Some("393331234567".into()), Some("new@example.com".into()))
        .await
        .unwrap();
}

#[tokio::test]
async fn update_contact_unknown_client_is_not_found() {
    let server = MockServer::start().await;
    support::mount_rows(&server, "CLIENTS", serde_json::json!([])).await;

    let directory = TenantDirectory::new(support::store(&server));
    let result = directory.update_contact("ghost", None, None).await;
    assert!(matches!(result.unwrap_err(), AuthError::NotFound));
}
