//! Tests for identity resolution against the profile collections

mod common;

use common::{create_test_server, create_test_server_with_stores, signup};
use serde_json::Value;
use wellbook_portal::store::{DirectoryStore, NewClient, NewProvider};
use wellbook_portal::Config;

/// Test: an account with no profile resolves as a client with no match
#[tokio::test]
async fn test_no_profile_defaults_to_client() {
    let server = create_test_server();

    let session_cookie = signup(&server, "Fresh", "fresh@example.com").await;

    let response = server
        .get("/api/identity")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["role"], "client");
    assert_eq!(body["kind"], "unknown");
    assert!(body["profile"].is_null());
    assert_eq!(body["provider_probe"], "no_match");
    assert_eq!(body["client_probe"], "no_match");
    assert_eq!(body["landing_path"], "/home");
}

/// Test: a provider record linked by account id resolves as provider
#[tokio::test]
async fn test_provider_match_by_account_id() {
    let (server, _, directory) = create_test_server_with_stores(Config::default());

    let session_cookie = signup(&server, "Morgan", "morgan@example.com").await;

    // Look up the account id through the session endpoint
    let session: Value = server
        .get("/api/auth/session")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie.clone()))
        .await
        .json();
    let account_id = session["account"]["id"].as_str().unwrap().to_string();

    // Provider record added by an administrator, linked by account id
    // under a different email
    directory
        .create_provider(NewProvider {
            account_id: Some(wellbook_core::AccountId(account_id)),
            name: "Morgan".to_string(),
            email: "work-address@example.com".to_string(),
            phone: None,
            specialty: Some("Acupuncture".to_string()),
            license_number: None,
            role: Some("provider".to_string()),
            verified: true,
        })
        .await
        .unwrap();

    let response = server
        .get("/api/identity")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .await;

    let body: Value = response.json();
    assert_eq!(body["role"], "provider");
    assert_eq!(body["kind"], "provider");
    assert_eq!(body["provider_probe"], "matched");
    assert_eq!(body["client_probe"], "skipped");
    assert_eq!(body["profile"]["specialty"], "Acupuncture");
    assert_eq!(body["landing_path"], "/provider/dashboard");
}

/// Test: a provider record with no account link still matches by email
#[tokio::test]
async fn test_provider_match_by_email() {
    let (server, _, directory) = create_test_server_with_stores(Config::default());

    // Record created before the provider ever signed up
    directory
        .create_provider(NewProvider {
            account_id: None,
            name: "Jamie".to_string(),
            email: "jamie@example.com".to_string(),
            phone: None,
            specialty: Some("Physiotherapy".to_string()),
            license_number: Some("PT-2210".to_string()),
            role: Some("provider".to_string()),
            verified: false,
        })
        .await
        .unwrap();

    let session_cookie = signup(&server, "Jamie", "jamie@example.com").await;

    let response = server
        .get("/api/identity")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .await;

    let body: Value = response.json();
    assert_eq!(body["role"], "provider");
    assert_eq!(body["provider_probe"], "matched");
    assert_eq!(body["profile"]["license_number"], "PT-2210");
}

/// Test: the email comparison is exact, not case-folded
#[tokio::test]
async fn test_email_match_is_case_sensitive() {
    let (server, _, directory) = create_test_server_with_stores(Config::default());

    directory
        .create_provider(NewProvider {
            account_id: None,
            name: "Shout".to_string(),
            email: "SHOUT@EXAMPLE.COM".to_string(),
            phone: None,
            specialty: None,
            license_number: None,
            role: Some("provider".to_string()),
            verified: false,
        })
        .await
        .unwrap();

    let session_cookie = signup(&server, "Shout", "shout@example.com").await;

    let response = server
        .get("/api/identity")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .await;

    let body: Value = response.json();
    // Different casing does not match, so the account falls back to client
    assert_eq!(body["role"], "client");
    assert_eq!(body["provider_probe"], "no_match");
}

/// Test: when both profiles exist the provider record wins
#[tokio::test]
async fn test_provider_takes_precedence_over_client() {
    let (server, _, directory) = create_test_server_with_stores(Config::default());

    directory
        .create_provider(NewProvider {
            account_id: None,
            name: "Dual".to_string(),
            email: "dual@example.com".to_string(),
            phone: None,
            specialty: Some("Yoga".to_string()),
            license_number: None,
            role: Some("provider".to_string()),
            verified: true,
        })
        .await
        .unwrap();
    directory
        .create_client(NewClient {
            account_id: None,
            name: "Dual".to_string(),
            email: "dual@example.com".to_string(),
            phone: None,
            address: None,
            emergency_contact: None,
        })
        .await
        .unwrap();

    let session_cookie = signup(&server, "Dual", "dual@example.com").await;

    let response = server
        .get("/api/identity")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .await;

    let body: Value = response.json();
    assert_eq!(body["role"], "provider");
    assert_eq!(body["kind"], "provider");
    // The client collection is never probed once a provider record matches
    assert_eq!(body["client_probe"], "skipped");
}

/// Test: a stored admin role resolves as admin
#[tokio::test]
async fn test_stored_admin_role() {
    let (server, _, directory) = create_test_server_with_stores(Config::default());

    directory
        .create_provider(NewProvider {
            account_id: None,
            name: "Boss".to_string(),
            email: "boss@example.com".to_string(),
            phone: None,
            specialty: None,
            license_number: None,
            role: Some("admin".to_string()),
            verified: true,
        })
        .await
        .unwrap();

    let session_cookie = signup(&server, "Boss", "boss@example.com").await;

    let response = server
        .get("/api/identity")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .await;

    let body: Value = response.json();
    assert_eq!(body["role"], "admin");
    assert_eq!(body["landing_path"], "/admin/dashboard");
}

/// Test: a provider record without a stored role defaults to provider
#[tokio::test]
async fn test_missing_stored_role_defaults_to_provider() {
    let (server, _, directory) = create_test_server_with_stores(Config::default());

    directory
        .create_provider(NewProvider {
            account_id: None,
            name: "Quiet".to_string(),
            email: "quiet@example.com".to_string(),
            phone: None,
            specialty: None,
            license_number: None,
            role: None,
            verified: false,
        })
        .await
        .unwrap();

    let session_cookie = signup(&server, "Quiet", "quiet@example.com").await;

    let response = server
        .get("/api/identity")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .await;

    let body: Value = response.json();
    assert_eq!(body["role"], "provider");
}

/// Test: an unrecognized stored role resolves as unknown
#[tokio::test]
async fn test_unrecognized_stored_role() {
    let (server, _, directory) = create_test_server_with_stores(Config::default());

    directory
        .create_provider(NewProvider {
            account_id: None,
            name: "Odd".to_string(),
            email: "odd@example.com".to_string(),
            phone: None,
            specialty: None,
            license_number: None,
            role: Some("superuser".to_string()),
            verified: false,
        })
        .await
        .unwrap();

    let session_cookie = signup(&server, "Odd", "odd@example.com").await;

    let response = server
        .get("/api/identity")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .await;

    let body: Value = response.json();
    assert_eq!(body["role"], "unknown");
    assert_eq!(body["kind"], "provider");
    assert_eq!(body["landing_path"], "/home");
}

/// Test: a failing provider collection degrades to the client probe
#[tokio::test]
async fn test_provider_probe_failure_degrades() {
    let (server, _, directory) = create_test_server_with_stores(Config::default());

    let session_cookie = signup(&server, "Degraded", "degraded@example.com").await;

    directory
        .create_client(NewClient {
            account_id: None,
            name: "Degraded".to_string(),
            email: "degraded@example.com".to_string(),
            phone: None,
            address: None,
            emergency_contact: None,
        })
        .await
        .unwrap();

    directory.set_providers_failing(true);

    let response = server
        .get("/api/identity")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .await;

    // Resolution still succeeds, with the failure recorded in the probe
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["provider_probe"], "query_failed");
    assert_eq!(body["client_probe"], "matched");
    assert_eq!(body["role"], "client");
    assert_eq!(body["kind"], "client");
}

/// Test: both collections failing still resolves, with client defaults
#[tokio::test]
async fn test_both_probes_failing_still_resolves() {
    let (server, _, directory) = create_test_server_with_stores(Config::default());

    let session_cookie = signup(&server, "Stormy", "stormy@example.com").await;

    directory.set_providers_failing(true);
    directory.set_clients_failing(true);

    let response = server
        .get("/api/identity")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["role"], "client");
    assert_eq!(body["kind"], "unknown");
    assert!(body["profile"].is_null());
    assert_eq!(body["provider_probe"], "query_failed");
    assert_eq!(body["client_probe"], "query_failed");
}

/// Test: no cookie or a stale cookie yields 401
#[tokio::test]
async fn test_identity_requires_session() {
    let server = create_test_server();

    let response = server.get("/api/identity").await;
    assert_eq!(response.status_code(), 401);

    let response = server
        .get("/api/identity")
        .add_cookie(cookie::Cookie::new("wellbook_session", "stale-token"))
        .await;
    assert_eq!(response.status_code(), 401);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}
