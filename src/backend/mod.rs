//! Backend port abstraction.
//!
//! The API layer talks to one of two interchangeable backends:
//! - `local` - the in-process entity store (demo profile)
//! - `remote` - a proxy to an upstream HTTP backend
//!
//! Selection happens once at startup from configuration.

mod local;
mod remote;

pub use local::LocalBackend;
pub use remote::RemoteBackend;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::{BackendConfig, BackendMode};
use crate::models::{CreateJob, CreateLead, Job, JobPatch, Lead, LeadPatch, Prospect};
use crate::store::Store;
use crate::Result;

/// Operations the API layer needs from a backend.
///
/// `get`/`update` return `None` for an unknown id and `delete` reports
/// whether a removal occurred; only validation failures and upstream
/// unavailability surface as errors.
#[async_trait]
pub trait BackendPort: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<Job>>;
    async fn get_job(&self, id: &str) -> Result<Option<Job>>;
    async fn create_job(&self, input: CreateJob) -> Result<Job>;
    async fn update_job(&self, id: &str, patch: JobPatch) -> Result<Option<Job>>;
    async fn delete_job(&self, id: &str) -> Result<bool>;

    async fn list_leads(&self) -> Result<Vec<Lead>>;
    async fn get_lead(&self, id: &str) -> Result<Option<Lead>>;
    async fn create_lead(&self, input: CreateLead) -> Result<Lead>;
    async fn update_lead(&self, id: &str, patch: LeadPatch) -> Result<Option<Lead>>;
    async fn delete_lead(&self, id: &str) -> Result<bool>;

    async fn list_prospects(&self) -> Result<Vec<Prospect>>;
}

/// Build the backend selected by configuration.
pub fn from_config(config: &BackendConfig, seed_demo: bool) -> Arc<dyn BackendPort> {
    match config.mode {
        BackendMode::Local => {
            let store = if seed_demo {
                Store::with_demo_data()
            } else {
                Store::new()
            };
            info!(seed_demo, "Using local in-memory backend");
            Arc::new(LocalBackend::new(Arc::new(store)))
        }
        BackendMode::Remote => {
            info!(upstream = %config.upstream_url, "Using remote backend");
            Arc::new(RemoteBackend::new(&config.upstream_url))
        }
    }
}
