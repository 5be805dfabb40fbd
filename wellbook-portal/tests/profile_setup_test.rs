//! Tests for self-service profile setup

mod common;

use common::{create_test_server, signup};
use serde_json::{json, Value};

/// Test: provider setup creates an unverified provider profile
#[tokio::test]
async fn test_provider_setup() {
    let server = create_test_server();

    let session_cookie = signup(&server, "Avery", "avery@example.com").await;

    let response = server
        .post("/api/profile/setup")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie.clone()))
        .json(&json!({
            "kind": "provider",
            "specialty": "Nutrition",
            "license_number": "NUT-88",
        }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["role"], "provider");
    assert_eq!(body["landing_path"], "/provider/dashboard");
    assert_eq!(body["profile"]["specialty"], "Nutrition");
    assert_eq!(body["profile"]["verified"], false);

    // The new record resolves on the next request
    let identity: Value = server
        .get("/api/identity")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .await
        .json();
    assert_eq!(identity["role"], "provider");
    assert_eq!(identity["provider_probe"], "matched");
}

/// Test: setup with the admin role creates a verified record
#[tokio::test]
async fn test_admin_setup_is_verified() {
    let server = create_test_server();

    let session_cookie = signup(&server, "Harper", "harper@example.com").await;

    let response = server
        .post("/api/profile/setup")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .json(&json!({
            "kind": "provider",
            "role": "admin",
        }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["role"], "admin");
    assert_eq!(body["landing_path"], "/admin/dashboard");
    assert_eq!(body["profile"]["verified"], true);
}

/// Test: name and email always come from the account, not the form
#[tokio::test]
async fn test_profile_identity_fields_come_from_account() {
    let server = create_test_server();

    let session_cookie = signup(&server, "True Name", "true@example.com").await;

    let response = server
        .post("/api/profile/setup")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .json(&json!({
            "kind": "client",
            "name": "Forged Name",
            "email": "forged@example.com",
            "address": "12 Elm Street",
        }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["profile"]["name"], "True Name");
    assert_eq!(body["profile"]["email"], "true@example.com");
    assert_eq!(body["profile"]["address"], "12 Elm Street");
}

/// Test: a second profile of the same kind is refused
#[tokio::test]
async fn test_duplicate_profile_refused() {
    let server = create_test_server();

    let session_cookie = signup(&server, "Twice", "twice@example.com").await;

    let response = server
        .post("/api/profile/setup")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie.clone()))
        .json(&json!({ "kind": "client" }))
        .await;
    assert_eq!(response.status_code(), 200);

    let response = server
        .post("/api/profile/setup")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .json(&json!({ "kind": "client" }))
        .await;
    assert_eq!(response.status_code(), 409);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

/// Test: a client can later add a provider profile, which then wins
#[tokio::test]
async fn test_client_then_provider_setup() {
    let server = create_test_server();

    let session_cookie = signup(&server, "Grow", "grow@example.com").await;

    let response = server
        .post("/api/profile/setup")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie.clone()))
        .json(&json!({ "kind": "client" }))
        .await;
    assert_eq!(response.status_code(), 200);

    let response = server
        .post("/api/profile/setup")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie.clone()))
        .json(&json!({ "kind": "provider", "specialty": "Reiki" }))
        .await;
    assert_eq!(response.status_code(), 200);

    // Provider record takes precedence at resolution
    let identity: Value = server
        .get("/api/identity")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .await
        .json();
    assert_eq!(identity["role"], "provider");
    assert_eq!(identity["kind"], "provider");
}

/// Test: only provider and admin are accepted as requested roles
#[tokio::test]
async fn test_setup_rejects_other_roles() {
    let server = create_test_server();

    let session_cookie = signup(&server, "Sneaky", "sneaky@example.com").await;

    let response = server
        .post("/api/profile/setup")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .json(&json!({
            "kind": "provider",
            "role": "superuser",
        }))
        .await;

    assert_eq!(response.status_code(), 400);
}

/// Test: profile setup requires a session
#[tokio::test]
async fn test_setup_requires_session() {
    let server = create_test_server();

    let response = server
        .post("/api/profile/setup")
        .json(&json!({ "kind": "client" }))
        .await;

    assert_eq!(response.status_code(), 401);
}
