//! Common test utilities for portal integration tests

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::json;
use wellbook_portal::{routes, AppState, Config, MemoryAccounts, MemoryDirectory};

/// Create a test server over fresh in-memory stores
pub fn create_test_server() -> TestServer {
    let (server, _, _) = create_test_server_with_stores(Config::default());
    server
}

/// Create a test server and keep handles to the stores, for seeding
/// and fault injection
pub fn create_test_server_with_stores(
    config: Config,
) -> (TestServer, MemoryAccounts, MemoryDirectory) {
    let accounts = MemoryAccounts::new();
    let directory = MemoryDirectory::new();

    let state = Arc::new(AppState::new(accounts.clone(), directory.clone(), config));
    let app = routes::create_router(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, accounts, directory)
}

/// Sign up an account and return the session cookie value
pub async fn signup(server: &TestServer, name: &str, email: &str) -> String {
    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "name": name,
            "email": email,
            "password": "thisismypassword",
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    response
        .maybe_cookie("wellbook_session")
        .expect("No session cookie")
        .value()
        .to_string()
}

/// Sign up an account with a provider profile; returns the session cookie
pub async fn create_provider(server: &TestServer, name: &str, email: &str) -> String {
    let session_cookie = signup(server, name, email).await;

    let response = server
        .post("/api/profile/setup")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie.clone()))
        .json(&json!({
            "kind": "provider",
            "specialty": "Massage Therapy",
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    session_cookie
}

/// Sign up an account with an admin provider profile; returns the session cookie
pub async fn create_admin(server: &TestServer, name: &str, email: &str) -> String {
    let session_cookie = signup(server, name, email).await;

    let response = server
        .post("/api/profile/setup")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie.clone()))
        .json(&json!({
            "kind": "provider",
            "role": "admin",
        }))
        .await;
    assert_eq!(response.status_code(), 200);

    session_cookie
}

/// Sign up an account with a client profile; returns the session cookie
pub async fn create_client(server: &TestServer, name: &str, email: &str) -> String {
    let session_cookie = signup(server, name, email).await;

    let response = server
        .post("/api/profile/setup")
        .add_cookie(cookie::Cookie::new("wellbook_session", session_cookie.clone()))
        .json(&json!({ "kind": "client" }))
        .await;
    assert_eq!(response.status_code(), 200);

    session_cookie
}
