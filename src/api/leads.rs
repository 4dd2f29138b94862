//! Leads Routes
//!
//! CRUD operations for leads.
//!
//! Routes:
//! - GET /api/leads - List all leads
//! - POST /api/leads - Create a new lead
//! - GET /api/leads/:id - Get lead details
//! - PUT /api/leads/:id - Update lead
//! - DELETE /api/leads/:id - Delete lead

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::models::{CreateLead, Lead, LeadPatch, LeadStatus};
use crate::{AppState, Error, Result};

/// Build lead routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_leads).post(create_lead))
        .route("/:id", get(get_lead).put(update_lead).delete(delete_lead))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to create a new lead.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    /// Pipeline stage by name; defaults to "New".
    pub status: Option<String>,
}

/// Request to update a lead. Unrecognized keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeadRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

/// List of leads response.
#[derive(Debug, Serialize)]
pub struct ListLeadsResponse {
    pub leads: Vec<Lead>,
}

// ============================================================================
// Handlers
// ============================================================================

/// List all leads, newest first.
///
/// GET /api/leads
#[axum::debug_handler]
async fn list_leads(State(state): State<AppState>) -> Result<Json<ListLeadsResponse>> {
    let leads = state.backend.list_leads().await?;
    Ok(Json(ListLeadsResponse { leads }))
}

/// Create a new lead.
///
/// POST /api/leads
#[axum::debug_handler]
async fn create_lead(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateLeadRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Lead>)> {
    let Json(request) = payload.map_err(bad_request)?;

    let input = CreateLead {
        name: request.name.unwrap_or_default(),
        email: request.email,
        phone: request.phone,
        company: request.company,
        notes: request.notes,
        status: parse_status(request.status)?,
    };

    let lead = state.backend.create_lead(input).await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

/// Get a lead by id.
///
/// GET /api/leads/:id
#[axum::debug_handler]
async fn get_lead(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Lead>> {
    let lead = state
        .backend
        .get_lead(&id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Lead {}", id)))?;
    Ok(Json(lead))
}

/// Apply a partial patch to a lead.
///
/// PUT /api/leads/:id
#[axum::debug_handler]
async fn update_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateLeadRequest>, JsonRejection>,
) -> Result<Json<Lead>> {
    let Json(request) = payload.map_err(bad_request)?;

    let patch = LeadPatch {
        name: request.name,
        email: request.email,
        phone: request.phone,
        company: request.company,
        notes: request.notes,
        status: parse_status(request.status)?,
    };

    let lead = state
        .backend
        .update_lead(&id, patch)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Lead {}", id)))?;
    Ok(Json(lead))
}

/// Delete a lead.
///
/// DELETE /api/leads/:id
#[axum::debug_handler]
async fn delete_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    if state.backend.delete_lead(&id).await? {
        Ok(Json(serde_json::json!({ "ok": true })))
    } else {
        Err(Error::NotFound(format!("Lead {}", id)))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn bad_request(rejection: JsonRejection) -> Error {
    Error::BadRequest(rejection.body_text())
}

fn parse_status(status: Option<String>) -> Result<Option<LeadStatus>> {
    status
        .as_deref()
        .map(|s| s.parse::<LeadStatus>().map_err(Error::Validation))
        .transpose()
}
