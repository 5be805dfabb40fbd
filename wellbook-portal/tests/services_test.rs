//! Tests for service administration

mod common;

use common::{create_admin, create_test_server};
use serde_json::{json, Value};

async fn seed_discipline(server: &axum_test::TestServer, admin_cookie: &str) -> String {
    let body: Value = server
        .post("/api/admin/disciplines")
        .add_cookie(cookie::Cookie::new(
            "wellbook_session",
            admin_cookie.to_string(),
        ))
        .json(&json!({ "name": "Massage" }))
        .await
        .json();
    body["discipline"]["id"].as_str().unwrap().to_string()
}

/// Test: create fills in the catalog defaults
#[tokio::test]
async fn test_service_defaults() {
    let server = create_test_server();
    let admin_cookie = create_admin(&server, "Root", "root@example.com").await;
    let discipline_id = seed_discipline(&server, &admin_cookie).await;

    let response = server
        .post("/api/admin/services")
        .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie))
        .json(&json!({
            "name": "Intro Session",
            "discipline_id": discipline_id,
        }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["service"]["service_type"], "clinical");
    assert_eq!(body["service"]["duration_minutes"], 60);
    assert_eq!(body["service"]["cost"], 0.0);
    assert_eq!(body["service"]["capacity"], 1);
    assert_eq!(body["service"]["status"], "active");
}

/// Test: an active service records the approving admin
#[tokio::test]
async fn test_active_service_records_approver() {
    let server = create_test_server();
    let admin_cookie = create_admin(&server, "Root", "root@example.com").await;
    let discipline_id = seed_discipline(&server, &admin_cookie).await;

    // The admin's own account id, for comparison
    let session: Value = server
        .get("/api/auth/session")
        .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie.clone()))
        .await
        .json();
    let admin_id = session["account"]["id"].as_str().unwrap().to_string();

    let body: Value = server
        .post("/api/admin/services")
        .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie.clone()))
        .json(&json!({
            "name": "Consultation",
            "discipline_id": discipline_id.clone(),
            "status": "active",
        }))
        .await
        .json();
    assert_eq!(body["service"]["approved_by"], admin_id.as_str());
    let service_id = body["service"]["id"].as_str().unwrap().to_string();

    // Deactivating clears the approval
    let body: Value = server
        .put(&format!("/api/admin/services/{}", service_id))
        .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie.clone()))
        .json(&json!({
            "name": "Consultation",
            "discipline_id": discipline_id.clone(),
            "status": "inactive",
        }))
        .await
        .json();
    assert!(body["service"]["approved_by"].is_null());

    // Reactivating stamps whoever saved it
    let body: Value = server
        .put(&format!("/api/admin/services/{}", service_id))
        .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie))
        .json(&json!({
            "name": "Consultation",
            "discipline_id": discipline_id,
            "status": "active",
        }))
        .await
        .json();
    assert_eq!(body["service"]["approved_by"], admin_id.as_str());
}

/// Test: an inactive service carries no approver
#[tokio::test]
async fn test_inactive_service_has_no_approver() {
    let server = create_test_server();
    let admin_cookie = create_admin(&server, "Root", "root@example.com").await;
    let discipline_id = seed_discipline(&server, &admin_cookie).await;

    let body: Value = server
        .post("/api/admin/services")
        .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie))
        .json(&json!({
            "name": "Draft Offering",
            "discipline_id": discipline_id,
            "status": "inactive",
        }))
        .await
        .json();

    assert!(body["service"]["approved_by"].is_null());
}

/// Test: services must reference an existing discipline
#[tokio::test]
async fn test_service_requires_known_discipline() {
    let server = create_test_server();
    let admin_cookie = create_admin(&server, "Root", "root@example.com").await;

    let response = server
        .post("/api/admin/services")
        .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie))
        .json(&json!({
            "name": "Orphan",
            "discipline_id": "no-such-discipline",
        }))
        .await;

    assert_eq!(response.status_code(), 400);
}

/// Test: service stats split by status, type and cost
#[tokio::test]
async fn test_service_stats() {
    let server = create_test_server();
    let admin_cookie = create_admin(&server, "Root", "root@example.com").await;
    let discipline_id = seed_discipline(&server, &admin_cookie).await;

    for payload in [
        json!({
            "name": "Clinical Paid",
            "discipline_id": discipline_id.clone(),
            "cost": 80.0,
        }),
        json!({
            "name": "Community Free",
            "discipline_id": discipline_id.clone(),
            "service_type": "community",
        }),
        json!({
            "name": "Shelved",
            "discipline_id": discipline_id.clone(),
            "status": "inactive",
        }),
    ] {
        let response = server
            .post("/api/admin/services")
            .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie.clone()))
            .json(&payload)
            .await;
        assert_eq!(response.status_code(), 200);
    }

    let body: Value = server
        .get("/api/admin/services")
        .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie))
        .await
        .json();

    assert_eq!(body["stats"]["total"], 3);
    assert_eq!(body["stats"]["active"], 2);
    assert_eq!(body["stats"]["clinical"], 2);
    assert_eq!(body["stats"]["community"], 1);
    assert_eq!(body["stats"]["paid"], 1);
}

/// Test: delete removes the service
#[tokio::test]
async fn test_service_delete() {
    let server = create_test_server();
    let admin_cookie = create_admin(&server, "Root", "root@example.com").await;
    let discipline_id = seed_discipline(&server, &admin_cookie).await;

    let body: Value = server
        .post("/api/admin/services")
        .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie.clone()))
        .json(&json!({
            "name": "Short Lived",
            "discipline_id": discipline_id,
        }))
        .await
        .json();
    let service_id = body["service"]["id"].as_str().unwrap().to_string();

    let response = server
        .delete(&format!("/api/admin/services/{}", service_id))
        .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie.clone()))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = server
        .get("/api/admin/services")
        .add_cookie(cookie::Cookie::new("wellbook_session", admin_cookie))
        .await
        .json();
    assert_eq!(body["stats"]["total"], 0);
}
