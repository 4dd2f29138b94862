//! Jobs Routes
//!
//! CRUD operations for jobs.
//!
//! Routes:
//! - GET /api/jobs - List all jobs
//! - POST /api/jobs - Create a new job
//! - GET /api/jobs/:id - Get job details
//! - PUT /api/jobs/:id - Update job
//! - DELETE /api/jobs/:id - Delete job

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::models::{CreateJob, Job, JobPatch, JobStatus};
use crate::{AppState, Error, Result};

/// Build job routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_jobs).post(create_job))
        .route("/:id", get(get_job).put(update_job).delete(delete_job))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to create a new job.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub customer: Option<String>,
    pub notes: Option<String>,
    pub price: Option<i64>,
    /// Target status by name; defaults to "New".
    pub status: Option<String>,
}

/// Request to update a job. Unrecognized keys are ignored, so `id` and
/// `createdAt` can never be overwritten.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub customer: Option<String>,
    pub notes: Option<String>,
    pub price: Option<i64>,
    pub status: Option<String>,
}

/// List of jobs response.
#[derive(Debug, Serialize)]
pub struct ListJobsResponse {
    pub jobs: Vec<Job>,
}

// ============================================================================
// Handlers
// ============================================================================

/// List all jobs, newest first.
///
/// GET /api/jobs
#[axum::debug_handler]
async fn list_jobs(State(state): State<AppState>) -> Result<Json<ListJobsResponse>> {
    let jobs = state.backend.list_jobs().await?;
    Ok(Json(ListJobsResponse { jobs }))
}

/// Create a new job.
///
/// POST /api/jobs
#[axum::debug_handler]
async fn create_job(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateJobRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Job>)> {
    let Json(request) = payload.map_err(bad_request)?;

    let input = CreateJob {
        title: request.title.unwrap_or_default(),
        customer: request.customer,
        notes: request.notes,
        price: request.price,
        status: parse_status(request.status)?,
    };

    let job = state.backend.create_job(input).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// Get a job by id.
///
/// GET /api/jobs/:id
#[axum::debug_handler]
async fn get_job(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Job>> {
    let job = state
        .backend
        .get_job(&id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Job {}", id)))?;
    Ok(Json(job))
}

/// Apply a partial patch to a job.
///
/// PUT /api/jobs/:id
#[axum::debug_handler]
async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateJobRequest>, JsonRejection>,
) -> Result<Json<Job>> {
    let Json(request) = payload.map_err(bad_request)?;

    let patch = JobPatch {
        title: request.title,
        customer: request.customer,
        notes: request.notes,
        price: request.price,
        status: parse_status(request.status)?,
    };

    let job = state
        .backend
        .update_job(&id, patch)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Job {}", id)))?;
    Ok(Json(job))
}

/// Delete a job.
///
/// DELETE /api/jobs/:id
#[axum::debug_handler]
async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    if state.backend.delete_job(&id).await? {
        Ok(Json(serde_json::json!({ "ok": true })))
    } else {
        Err(Error::NotFound(format!("Job {}", id)))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn bad_request(rejection: JsonRejection) -> Error {
    Error::BadRequest(rejection.body_text())
}

fn parse_status(status: Option<String>) -> Result<Option<JobStatus>> {
    status
        .as_deref()
        .map(|s| s.parse::<JobStatus>().map_err(Error::Validation))
        .transpose()
}
