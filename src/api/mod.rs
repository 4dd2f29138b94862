//! API Routes for TaskForge
//!
//! This module combines all API routes into a single router.
//! Routes are organized by domain and apply appropriate middleware.

mod dashboard;
mod jobs;
mod leads;
mod prospects;
mod stats;
pub mod status;

use axum::Router;

use crate::middleware::require_session;
use crate::AppState;

/// Build the complete API router.
///
/// Route structure:
/// - /health - Health checks (public)
/// - /api/jobs/* - Job CRUD (session-gated)
/// - /api/leads/* - Lead CRUD (session-gated)
/// - /api/find-leads - Prospect directory (session-gated)
/// - /api/stats, /api/dashboard - Read models (session-gated)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health endpoints (public)
        .merge(status::routes())
        // Everything else sits behind the auth gate
        .nest("/api", gated_routes(state))
}

/// Routes behind the auth gate.
fn gated_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/jobs", jobs::routes())
        .nest("/leads", leads::routes())
        .merge(prospects::routes())
        .merge(stats::routes())
        .merge(dashboard::routes())
        .layer(axum::middleware::from_fn_with_state(state, require_session))
}
