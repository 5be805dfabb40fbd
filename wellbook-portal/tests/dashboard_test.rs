//! Tests for the dashboard pages

mod common;

use common::{create_admin, create_provider, create_test_server};
use serde_json::{json, Value};

/// Test: the admin dashboard reports counts and recent records
#[tokio::test]
async fn test_admin_dashboard_counts() {
    let server = create_test_server();
    let admin_cookie = create_admin(&server, "Root", "root@example.com").await;

    // Two pending providers and one client
    for (name, email) in [("P One", "p1@example.com"), ("P Two", "p2@example.com")] {
        let response = server
            .post("/api/admin/providers")
            .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie.clone()))
            .json(&json!({ "name": name, "email": email }))
            .await;
        assert_eq!(response.status_code(), 200);
    }
    let response = server
        .post("/api/admin/clients")
        .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie.clone()))
        .json(&json!({ "name": "C One", "email": "c1@example.com" }))
        .await;
    assert_eq!(response.status_code(), 200);

    let response = server
        .get("/admin/dashboard")
        .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    // The admin's own provider record counts too
    assert_eq!(body["counts"]["providers"], 3);
    assert_eq!(body["counts"]["clients"], 1);
    assert_eq!(body["counts"]["disciplines"], 0);
    assert_eq!(body["counts"]["appointments"], 0);
    assert_eq!(body["counts"]["pending_verifications"], 2);

    assert_eq!(body["recent_providers"].as_array().unwrap().len(), 3);
    assert_eq!(body["recent_clients"].as_array().unwrap().len(), 1);
}

/// Test: recent listings carry the newest five records, newest first
#[tokio::test]
async fn test_admin_dashboard_recent_is_newest_first() {
    let server = create_test_server();
    let admin_cookie = create_admin(&server, "Root", "root@example.com").await;

    for i in 1..=6 {
        let response = server
            .post("/api/admin/clients")
            .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie.clone()))
            .json(&json!({
                "name": format!("Client {}", i),
                "email": format!("client{}@example.com", i),
            }))
            .await;
        assert_eq!(response.status_code(), 200);
    }

    let body: Value = server
        .get("/admin/dashboard")
        .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie))
        .await
        .json();

    let recent = body["recent_clients"].as_array().unwrap();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0]["name"], "Client 6");
    assert_eq!(recent[4]["name"], "Client 2");
}

/// Test: the provider dashboard shows the caller's own profile card
#[tokio::test]
async fn test_provider_dashboard_profile() {
    let server = create_test_server();

    let provider_cookie = create_provider(&server, "Shown", "shown@example.com").await;

    let response = server
        .get("/provider/dashboard")
        .add_cookie(cookie::Cookie::new("wellbook_session", provider_cookie))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["account"]["email"], "shown@example.com");
    assert_eq!(body["profile"]["specialty"], "Massage Therapy");
}
