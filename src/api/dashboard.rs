//! Dashboard Routes
//!
//! Aggregated snapshot for the landing page: collection counts plus the
//! most recent jobs and leads.
//!
//! Routes:
//! - GET /api/dashboard - Dashboard snapshot

use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{now, JobStatus, LeadStatus};
use crate::{AppState, Result};

/// How many recent entries each list carries.
const RECENT_LIMIT: usize = 3;

/// Build dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

// ============================================================================
// Response Types
// ============================================================================

/// Dashboard response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub summary: DashboardSummary,
    pub recent_jobs: Vec<RecentJob>,
    pub recent_leads: Vec<RecentLead>,
}

/// Collection counts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub jobs: usize,
    pub leads: usize,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct RecentJob {
    pub id: String,
    pub title: String,
    pub status: JobStatus,
}

#[derive(Debug, Serialize)]
pub struct RecentLead {
    pub id: String,
    pub name: String,
    pub status: LeadStatus,
}

// ============================================================================
// Handlers
// ============================================================================

/// Dashboard snapshot.
///
/// GET /api/dashboard
#[axum::debug_handler]
async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>> {
    let jobs = state.backend.list_jobs().await?;
    let leads = state.backend.list_leads().await?;

    let recent_jobs = jobs
        .iter()
        .take(RECENT_LIMIT)
        .map(|j| RecentJob {
            id: j.id.clone(),
            title: j.title.clone(),
            status: j.status,
        })
        .collect();

    let recent_leads = leads
        .iter()
        .take(RECENT_LIMIT)
        .map(|l| RecentLead {
            id: l.id.clone(),
            name: l.name.clone(),
            status: l.status,
        })
        .collect();

    Ok(Json(DashboardResponse {
        summary: DashboardSummary {
            jobs: jobs.len(),
            leads: leads.len(),
            updated_at: now(),
        },
        recent_jobs,
        recent_leads,
    }))
}
