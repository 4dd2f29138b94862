//! Status Routes
//!
//! Health checks for load balancers and uptime monitors.
//!
//! Routes:
//! - GET /health - Basic health check
//! - GET /health/live - Liveness check (server responding)

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::AppState;

/// Build status routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness_check))
}

/// Basic health check.
///
/// GET /health
async fn health_check() -> Json<Value> {
    Json(json!({ "ok": true, "version": env!("CARGO_PKG_VERSION") }))
}

/// Liveness check.
///
/// GET /health/live
async fn liveness_check() -> Json<Value> {
    Json(json!({ "status": "alive" }))
}
