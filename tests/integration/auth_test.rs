//! Integration tests for the registration and login flows.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_register_success() {
    let app = TestApp::new().await;

    let body = app
        .register("Alice", "Doe", "alice@example.com", "secret123")
        .await;

    assert!(body["data"]["token"].as_str().is_some());
    assert_eq!(body["data"]["member"]["role"], "member");
    assert_eq!(body["data"]["member"]["email"], "alice@example.com");
    assert!(body["data"]["member"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    app.register("Alice", "Doe", "alice@example.com", "secret123")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "first_name": "Other",
                "last_name": "Person",
                "email": "alice@example.com",
                "password": "different456",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_register_missing_fields_is_validation_error() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "first_name": "",
                "last_name": "Doe",
                "email": "empty@example.com",
                "password": "secret123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_login_success() {
    let app = TestApp::new().await;
    app.register("Alice", "Doe", "alice@example.com", "secret123")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "alice@example.com",
                "password": "secret123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].as_str().is_some());
    assert_eq!(response.body["data"]["member"]["role"], "member");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
    let app = TestApp::new().await;
    app.register("Alice", "Doe", "alice@example.com", "secret123")
        .await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "alice@example.com",
                "password": "wrong",
            })),
            None,
        )
        .await;

    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": "secret123",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_admin_flag_yields_admin_role_on_next_login() {
    let app = TestApp::new().await;
    let body = app
        .register("Root", "Admin", "admin@example.com", "secret123")
        .await;
    // Registration never grants the elevated role.
    assert_eq!(body["data"]["member"]["role"], "member");

    app.promote_to_admin("admin@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "admin@example.com",
                "password": "secret123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["member"]["role"], "admin");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_me_authenticated() {
    let app = TestApp::new().await;
    app.register("Alice", "Doe", "alice@example.com", "secret123")
        .await;
    let token = app.login("alice@example.com", "secret123").await;

    let response = app
        .request("GET", "/api/auth/me", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "alice@example.com");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_me_unauthenticated() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance (MEMBERHUB_TEST_DATABASE_URL)"]
async fn test_tampered_token_rejected() {
    let app = TestApp::new().await;
    app.register("Alice", "Doe", "alice@example.com", "secret123")
        .await;
    let token = app.login("alice@example.com", "secret123").await;
    let tampered = format!("{}x", &token[..token.len() - 1]);

    let response = app
        .request("GET", "/api/auth/me", None, Some(&tampered))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
