//! API Integration Tests for TaskForge Server
//!
//! Tests the REST API endpoints using axum-test.
//! Runs against the local backend profile with an isolated store per
//! test case.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, header::AUTHORIZATION, HeaderValue, StatusCode};
use axum::Router;
use axum_test::TestServer;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use serde_json::{json, Value};
use taskforge::api;
use taskforge::backend::LocalBackend;
use taskforge::config::AuthConfig;
use taskforge::middleware::SESSION_COOKIE_NAME;
use taskforge::store::Store;
use taskforge::AppState;

// ============================================================================
// Test Setup Helpers
// ============================================================================

/// Build a test server over a fresh, empty local store with the auth
/// gate open.
fn build_test_app() -> TestServer {
    build_app_with_store(Store::new(), None)
}

/// Build a test server over the given store, optionally with a session
/// secret so the auth gate is enforced.
fn build_app_with_store(store: Store, session_secret: Option<&str>) -> TestServer {
    let state = AppState::with_backend(
        Arc::new(LocalBackend::new(Arc::new(store))),
        AuthConfig {
            session_secret: session_secret.map(String::from),
        },
    );

    let app = Router::new()
        .merge(api::routes(state.clone()))
        .with_state(state);

    TestServer::new(app).expect("Failed to create test server")
}

/// Helper function to create a Bearer Authorization header value
fn bearer_auth(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

#[derive(Serialize)]
struct TestClaims {
    sub: String,
    exp: i64,
}

/// Mint a session token the way the external identity provider would.
fn session_token(secret: &str, expires_in_seconds: i64) -> String {
    let claims = TestClaims {
        sub: "user-1".to_string(),
        exp: Utc::now().timestamp() + expires_in_seconds,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}

// ============================================================================
// Health Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_health_check_returns_ok() {
    let server = build_test_app();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["ok"], true);
    assert!(body["version"].is_string());
}

// ============================================================================
// Job Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_create_job_returns_created_entity() {
    let server = build_test_app();

    let response = server
        .post("/api/jobs")
        .json(&json!({ "title": "Wash deck" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let job: Value = response.json();
    assert_eq!(job["title"], "Wash deck");
    assert_eq!(job["status"], "New");
    assert!(job["id"].is_string());
    assert!(job["createdAt"].is_string());

    let list: Value = server.get("/api/jobs").await.json();
    assert_eq!(list["jobs"][0]["id"], job["id"]);
}

#[tokio::test]
async fn test_create_job_with_blank_title_is_rejected() {
    let server = build_test_app();

    let response = server
        .post("/api/jobs")
        .json(&json!({ "title": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("title"));

    let list: Value = server.get("/api/jobs").await.json();
    assert_eq!(list["jobs"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_job_without_title_is_rejected() {
    let server = build_test_app();

    let response = server.post("/api/jobs").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_body_is_a_bad_request() {
    let server = build_test_app();

    let response = server.post("/api/jobs").text("{ not json").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_list_jobs_newest_first() {
    let server = build_test_app();

    server
        .post("/api/jobs")
        .json(&json!({ "title": "First" }))
        .await
        .assert_status(StatusCode::CREATED);
    tokio::time::sleep(Duration::from_millis(5)).await;
    server
        .post("/api/jobs")
        .json(&json!({ "title": "Second" }))
        .await
        .assert_status(StatusCode::CREATED);

    let list: Value = server.get("/api/jobs").await.json();
    let jobs = list["jobs"].as_array().unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0]["title"], "Second");
    assert_eq!(jobs[1]["title"], "First");
}

#[tokio::test]
async fn test_get_unknown_job_returns_not_found() {
    let server = build_test_app();

    let response = server.get("/api/jobs/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_update_job_merges_partial_patch() {
    let server = build_test_app();

    let created: Value = server
        .post("/api/jobs")
        .json(&json!({ "title": "Gutter clean", "customer": "Ava C.", "price": 120 }))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = server
        .put(&format!("/api/jobs/{}", id))
        .json(&json!({ "status": "Done" }))
        .await;
    response.assert_status_ok();

    let updated: Value = server.get(&format!("/api/jobs/{}", id)).await.json();
    assert_eq!(updated["status"], "Done");
    assert_eq!(updated["title"], "Gutter clean");
    assert_eq!(updated["customer"], "Ava C.");
    assert_eq!(updated["price"], 120);
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_update_job_ignores_unrecognized_keys() {
    let server = build_test_app();

    let created: Value = server
        .post("/api/jobs")
        .json(&json!({ "title": "Patio wash" }))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = server
        .put(&format!("/api/jobs/{}", id))
        .json(&json!({
            "id": "forged",
            "createdAt": "1999-01-01T00:00:00Z",
            "status": "Done"
        }))
        .await;
    response.assert_status_ok();

    let updated: Value = response.json();
    assert_eq!(updated["id"], id);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["status"], "Done");
}

#[tokio::test]
async fn test_update_unknown_job_returns_not_found() {
    let server = build_test_app();

    let response = server
        .put("/api/jobs/missing")
        .json(&json!({ "status": "Done" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_job_with_invalid_status_is_rejected() {
    let server = build_test_app();

    let created: Value = server
        .post("/api/jobs")
        .json(&json!({ "title": "Roof wash" }))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = server
        .put(&format!("/api/jobs/{}", id))
        .json(&json!({ "status": "paid" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("status"));
}

#[tokio::test]
async fn test_delete_job_then_get_returns_not_found() {
    let server = build_test_app();

    let created: Value = server
        .post("/api/jobs")
        .json(&json!({ "title": "Short-lived" }))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = server.delete(&format!("/api/jobs/{}", id)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["ok"], true);

    server
        .get(&format!("/api/jobs/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete(&format!("/api/jobs/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// Lead Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_create_lead_defaults_to_new_status() {
    let server = build_test_app();

    let response = server
        .post("/api/leads")
        .json(&json!({ "name": "Maria R.", "phone": "555-111-2222" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let lead: Value = response.json();
    assert_eq!(lead["name"], "Maria R.");
    assert_eq!(lead["status"], "New");
    assert_eq!(lead["phone"], "555-111-2222");

    let list: Value = server.get("/api/leads").await.json();
    assert_eq!(list["leads"][0]["id"], lead["id"]);
}

#[tokio::test]
async fn test_create_lead_with_blank_name_is_rejected() {
    let server = build_test_app();

    let response = server.post("/api/leads").json(&json!({ "name": "" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let list: Value = server.get("/api/leads").await.json();
    assert_eq!(list["leads"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_update_lead_status_and_delete() {
    let server = build_test_app();

    let created: Value = server
        .post("/api/leads")
        .json(&json!({ "name": "Oak Apartments" }))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = server
        .put(&format!("/api/leads/{}", id))
        .json(&json!({ "status": "Contacted" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "Contacted");

    server
        .put(&format!("/api/leads/{}", id))
        .json(&json!({ "status": "won" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let del = server.delete(&format!("/api/leads/{}", id)).await;
    del.assert_status_ok();
    assert_eq!(del.json::<Value>()["ok"], true);
    server
        .delete(&format!("/api/leads/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// Find-Leads Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_find_leads_lists_seeded_prospects() {
    let server = build_app_with_store(Store::with_demo_data(), None);

    let body: Value = server.get("/api/find-leads").await.json();
    let prospects = body["prospects"].as_array().unwrap();

    assert_eq!(prospects.len(), 2);
    assert_eq!(prospects[0]["city"], "San Mateo");
    assert_eq!(prospects[1]["service"], "House Wash");
}

// ============================================================================
// Stats & Dashboard Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_stats_reflect_job_collection() {
    let server = build_test_app();

    server
        .post("/api/jobs")
        .json(&json!({ "title": "Roof wash", "price": 600, "status": "Done" }))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/api/jobs")
        .json(&json!({ "title": "Patio", "price": 150 }))
        .await
        .assert_status(StatusCode::CREATED);

    let stats: Value = server.get("/api/stats").await.json();
    assert_eq!(stats["weeklyEarnings"], 600);
    assert_eq!(stats["monthEarnings"], 600);
    assert_eq!(stats["activeJobs"], 1);
}

#[tokio::test]
async fn test_dashboard_reports_counts_and_recents() {
    let server = build_test_app();

    for title in ["One", "Two", "Three", "Four"] {
        server
            .post("/api/jobs")
            .json(&json!({ "title": title }))
            .await
            .assert_status(StatusCode::CREATED);
        tokio::time::sleep(Duration::from_millis(3)).await;
    }
    server
        .post("/api/leads")
        .json(&json!({ "name": "Maria R." }))
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = server.get("/api/dashboard").await.json();
    assert_eq!(body["summary"]["jobs"], 4);
    assert_eq!(body["summary"]["leads"], 1);
    assert!(body["summary"]["updatedAt"].is_string());

    let recent = body["recentJobs"].as_array().unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0]["title"], "Four");
    assert_eq!(body["recentLeads"][0]["name"], "Maria R.");
}

// ============================================================================
// Auth Gate Tests
// ============================================================================

#[tokio::test]
async fn test_gated_routes_require_a_session() {
    let server = build_app_with_store(Store::new(), Some("test-secret"));

    server
        .get("/api/jobs")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    // Health stays public
    server.get("/health").await.assert_status_ok();

    let token = session_token("test-secret", 3600);
    server
        .get("/api/jobs")
        .add_header(AUTHORIZATION, bearer_auth(&token))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_session_cookie_is_accepted() {
    let server = build_app_with_store(Store::new(), Some("test-secret"));

    let token = session_token("test-secret", 3600);
    let cookie = format!("{}={}", SESSION_COOKIE_NAME, token);
    server
        .get("/api/jobs")
        .add_header(
            header::COOKIE,
            HeaderValue::from_str(&cookie).expect("invalid cookie header"),
        )
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_expired_or_forged_sessions_are_rejected() {
    let server = build_app_with_store(Store::new(), Some("test-secret"));

    let expired = session_token("test-secret", -3600);
    server
        .get("/api/jobs")
        .add_header(AUTHORIZATION, bearer_auth(&expired))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let forged = session_token("other-secret", 3600);
    server
        .get("/api/jobs")
        .add_header(AUTHORIZATION, bearer_auth(&forged))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
