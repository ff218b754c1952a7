mod common;

use auth::AuthSettings;
use auth::Authenticator;
use axum::http::StatusCode;
use chrono::Duration;
use common::TestApp;
use common::TEST_SECRET;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn();

    let (status, body) = app
        .post(
            "/auth/register",
            json!({
                "email": "nicola@example.com",
                "password": "pass_word!",
                "name": "Nicola"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["email"], "nicola@example.com");
    assert_eq!(body["data"]["name"], "Nicola");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn();
    app.register("nicola@example.com", "pass_word!").await;

    let (status, body) = app
        .post(
            "/auth/register",
            json!({
                "email": "NICOLA@example.com",
                "password": "another_password",
                "name": "Someone Else"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn();

    let (status, body) = app
        .post(
            "/auth/register",
            json!({
                "email": "not-an-email",
                "password": "pass_word!",
                "name": "Nicola"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid email"));
}

#[tokio::test]
async fn test_register_empty_password() {
    let app = TestApp::spawn();

    let (status, _) = app
        .post(
            "/auth/register",
            json!({
                "email": "nicola@example.com",
                "password": "",
                "name": "Nicola"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_missing_field() {
    let app = TestApp::spawn();

    let (status, _) = app
        .post(
            "/auth/register",
            json!({ "email": "nicola@example.com" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn();
    let registered = app.register("nicola@example.com", "pass_word!").await;

    let (status, body) = app
        .post(
            "/auth/login",
            json!({ "email": "nicola@example.com", "password": "pass_word!" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user_id"], registered["id"]);
    assert!(body["data"]["token"].is_string());
    assert!(body["data"]["expires_at"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_the_same() {
    let app = TestApp::spawn();
    app.register("nicola@example.com", "pass_word!").await;

    let (wrong_status, wrong_body) = app
        .post(
            "/auth/login",
            json!({ "email": "nicola@example.com", "password": "wrong" }),
        )
        .await;
    let (unknown_status, unknown_body) = app
        .post(
            "/auth/login",
            json!({ "email": "nobody@example.com", "password": "pass_word!" }),
        )
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn test_login_malformed_email_is_unauthorized() {
    let app = TestApp::spawn();

    let (status, _) = app
        .post(
            "/auth/login",
            json!({ "email": "not-an-email", "password": "pass_word!" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_verify_success() {
    let app = TestApp::spawn();
    let registered = app.register("nicola@example.com", "pass_word!").await;
    let token = app.login("nicola@example.com", "pass_word!").await;

    let (status, body) = app
        .get("/auth/verify", Some(&format!("Bearer {}", token)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["valid"], true);
    assert_eq!(body["data"]["user_id"], registered["id"]);
}

#[tokio::test]
async fn test_verify_lowercase_scheme() {
    let app = TestApp::spawn();
    app.register("nicola@example.com", "pass_word!").await;
    let token = app.login("nicola@example.com", "pass_word!").await;

    let (status, body) = app
        .get("/auth/verify", Some(&format!("bearer {}", token)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["valid"], true);
}

#[tokio::test]
async fn test_verify_missing_header() {
    let app = TestApp::spawn();

    let (status, body) = app.get("/auth/verify", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["data"]["message"], "Missing Authorization header");
}

#[tokio::test]
async fn test_verify_wrong_scheme() {
    let app = TestApp::spawn();

    let (status, _) = app.get("/auth/verify", Some("Token abc")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_verify_rejects_bad_tokens_uniformly() {
    let app = TestApp::spawn();

    let expired = Authenticator::new(
        &AuthSettings::new(TEST_SECRET)
            .with_hash_cost(1)
            .with_token_lifetime(Duration::seconds(-120)),
    )
    .unwrap()
    .generate_token("user-42")
    .unwrap();

    let foreign = Authenticator::new(
        &AuthSettings::new("some-other-secret-key-at-least-32-bytes").with_hash_cost(1),
    )
    .unwrap()
    .generate_token("user-42")
    .unwrap();

    let mut bodies = Vec::new();
    for token in [expired.as_str(), foreign.as_str(), "garbage.token.value"] {
        let (status, body) = app
            .get("/auth/verify", Some(&format!("Bearer {}", token)))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        bodies.push(body);
    }

    assert_eq!(bodies[0]["data"]["message"], "Invalid or expired token");
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
}

#[tokio::test]
async fn test_plaintext_password_is_not_stored() {
    let app = TestApp::spawn();
    app.register("nicola@example.com", "pass_word!").await;

    let email = auth_service::domain::credential::models::EmailAddress::new(
        "nicola@example.com".to_string(),
    )
    .unwrap();
    let stored = auth_service::domain::credential::ports::CredentialRepository::find_by_email(
        app.repository.as_ref(),
        &email,
    )
    .await
    .unwrap()
    .expect("credential missing");

    assert!(stored.password_hash.as_str().starts_with("$argon2id$"));
    assert!(!stored.password_hash.as_str().contains("pass_word!"));
}
