//! Tests for the resolution time budget

mod common;

use std::time::Duration;

use common::{create_test_server_with_stores, signup};
use serde_json::Value;
use wellbook_portal::Config;

fn short_budget_config() -> Config {
    Config {
        resolve_timeout: Duration::from_millis(50),
        ..Config::default()
    }
}

/// Test: a slow session lookup times out resolution on API routes
#[tokio::test]
async fn test_slow_backend_times_out_api() {
    let (server, accounts, _) = create_test_server_with_stores(short_budget_config());

    let session_cookie = signup(&server, "Waiting", "waiting@example.com").await;

    accounts.set_session_delay(Duration::from_millis(500));

    let response = server
        .get("/api/identity")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .await;

    assert_eq!(response.status_code(), 504);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

/// Test: a timed-out page guard falls back to the login redirect
#[tokio::test]
async fn test_slow_backend_redirects_pages_to_login() {
    let (server, accounts, _) = create_test_server_with_stores(short_budget_config());

    let session_cookie = signup(&server, "Stalled", "stalled@example.com").await;

    accounts.set_session_delay(Duration::from_millis(500));

    let response = server
        .get("/admin/dashboard")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/login");
}

/// Test: a lookup inside the budget resolves normally
#[tokio::test]
async fn test_fast_backend_is_unaffected() {
    let (server, accounts, _) = create_test_server_with_stores(Config::default());

    let session_cookie = signup(&server, "Prompt", "prompt@example.com").await;

    // A small delay, well within the default budget
    accounts.set_session_delay(Duration::from_millis(10));

    let response = server
        .get("/api/identity")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
}
