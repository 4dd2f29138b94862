//! Find-leads Routes
//!
//! Read-only directory of prospects surfaced on the find-leads page.
//!
//! Routes:
//! - GET /api/find-leads - List prospects

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::models::Prospect;
use crate::{AppState, Result};

/// Build find-leads routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/find-leads", get(list_prospects))
}

/// List of prospects response.
#[derive(Debug, Serialize)]
pub struct ListProspectsResponse {
    pub prospects: Vec<Prospect>,
}

/// List the prospect directory.
///
/// GET /api/find-leads
#[axum::debug_handler]
async fn list_prospects(State(state): State<AppState>) -> Result<Json<ListProspectsResponse>> {
    let prospects = state.backend.list_prospects().await?;
    Ok(Json(ListProspectsResponse { prospects }))
}
