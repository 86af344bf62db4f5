//! Integration tests for row-level authorization over member rows.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_member_lists_only_own_row() {
    let app = TestApp::new().await;
    app.register("Alice", "Doe", "alice@example.com", "secret123")
        .await;
    app.register("Bob", "Roe", "bob@example.com", "secret456")
        .await;
    let token = app.login("alice@example.com", "secret123").await;

    let response = app.request("GET", "/api/members", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let rows = response.body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["email"], "alice@example.com");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_member_cannot_see_other_row() {
    let app = TestApp::new().await;
    app.register("Alice", "Doe", "alice@example.com", "secret123")
        .await;
    let bob = app
        .register("Bob", "Roe", "bob@example.com", "secret456")
        .await;
    let bob_id = bob["data"]["member"]["id"].as_i64().unwrap();
    let token = app.login("alice@example.com", "secret123").await;

    let response = app
        .request("GET", &format!("/api/members/{bob_id}"), None, Some(&token))
        .await;

    // Invisible, not forbidden: the row behaves as if it does not exist.
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_member_reads_own_row() {
    let app = TestApp::new().await;
    let alice = app
        .register("Alice", "Doe", "alice@example.com", "secret123")
        .await;
    let alice_id = alice["data"]["member"]["id"].as_i64().unwrap();
    let token = app.login("alice@example.com", "secret123").await;

    let response = app
        .request(
            "GET",
            &format!("/api/members/{alice_id}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "alice@example.com");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_admin_sees_all_rows() {
    let app = TestApp::new().await;
    app.register("Alice", "Doe", "alice@example.com", "secret123")
        .await;
    let bob = app
        .register("Bob", "Roe", "bob@example.com", "secret456")
        .await;
    let bob_id = bob["data"]["member"]["id"].as_i64().unwrap();

    app.register("Root", "Admin", "admin@example.com", "secret789")
        .await;
    app.promote_to_admin("admin@example.com").await;
    let admin_token = app.login("admin@example.com", "secret789").await;

    let list = app
        .request("GET", "/api/members", None, Some(&admin_token))
        .await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body["data"].as_array().unwrap().len(), 3);

    let one = app
        .request(
            "GET",
            &format!("/api/members/{bob_id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(one.status, StatusCode::OK);
    assert_eq!(one.body["data"]["email"], "bob@example.com");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_member_updates_own_profile() {
    let app = TestApp::new().await;
    let alice = app
        .register("Alice", "Doe", "alice@example.com", "secret123")
        .await;
    let alice_id = alice["data"]["member"]["id"].as_i64().unwrap();
    let token = app.login("alice@example.com", "secret123").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/members/{alice_id}"),
            Some(serde_json::json!({ "last_name": "Smith" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["last_name"], "Smith");
    assert_eq!(response.body["data"]["first_name"], "Alice");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_member_cannot_update_other_row() {
    let app = TestApp::new().await;
    app.register("Alice", "Doe", "alice@example.com", "secret123")
        .await;
    let bob = app
        .register("Bob", "Roe", "bob@example.com", "secret456")
        .await;
    let bob_id = bob["data"]["member"]["id"].as_i64().unwrap();
    let token = app.login("alice@example.com", "secret123").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/members/{bob_id}"),
            Some(serde_json::json!({ "last_name": "Hacked" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_admin_updates_other_row() {
    let app = TestApp::new().await;
    let alice = app
        .register("Alice", "Doe", "alice@example.com", "secret123")
        .await;
    let alice_id = alice["data"]["member"]["id"].as_i64().unwrap();

    app.register("Root", "Admin", "admin@example.com", "secret789")
        .await;
    app.promote_to_admin("admin@example.com").await;
    let admin_token = app.login("admin@example.com", "secret789").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/members/{alice_id}"),
            Some(serde_json::json!({ "first_name": "Alicia" })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["first_name"], "Alicia");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_duplicate_email_on_profile_update() {
    let app = TestApp::new().await;
    let alice = app
        .register("Alice", "Doe", "alice@example.com", "secret123")
        .await;
    let alice_id = alice["data"]["member"]["id"].as_i64().unwrap();
    app.register("Bob", "Roe", "bob@example.com", "secret456")
        .await;
    let token = app.login("alice@example.com", "secret123").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/members/{alice_id}"),
            Some(serde_json::json!({ "email": "bob@example.com" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_anonymous_has_no_member_access() {
    let app = TestApp::new().await;
    app.register("Alice", "Doe", "alice@example.com", "secret123")
        .await;

    let response = app.request("GET", "/api/members", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
