//! Stats Routes
//!
//! Earnings and workload summary computed from the job collection.
//!
//! Routes:
//! - GET /api/stats - Earnings and active-job counts

use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::models::{now, Job, JobStatus};
use crate::{AppState, Result};

/// Build stats routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

/// Stats response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Earnings from jobs completed in the last 7 days.
    pub weekly_earnings: i64,
    /// Earnings from jobs completed in the last 30 days.
    pub month_earnings: i64,
    /// Jobs not yet done.
    pub active_jobs: usize,
}

/// Earnings and workload summary.
///
/// GET /api/stats
#[axum::debug_handler]
async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let jobs = state.backend.list_jobs().await?;

    Ok(Json(StatsResponse {
        weekly_earnings: earnings_since(&jobs, now() - Duration::days(7)),
        month_earnings: earnings_since(&jobs, now() - Duration::days(30)),
        active_jobs: jobs.iter().filter(|j| j.status != JobStatus::Done).count(),
    }))
}

/// Sum the price of completed jobs created on or after the cutoff.
fn earnings_since(jobs: &[Job], cutoff: DateTime<Utc>) -> i64 {
    jobs.iter()
        .filter(|j| j.status == JobStatus::Done && j.created_at >= cutoff)
        .filter_map(|j| j.price)
        .sum()
}
