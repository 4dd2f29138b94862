//! Local backend over the in-memory entity store.

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{CreateJob, CreateLead, Job, JobPatch, Lead, LeadPatch, Prospect};
use crate::store::Store;
use crate::Result;

use super::BackendPort;

/// Demo-profile backend backed by the in-process store.
pub struct LocalBackend {
    store: Arc<Store>,
}

impl LocalBackend {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BackendPort for LocalBackend {
    async fn list_jobs(&self) -> Result<Vec<Job>> {
        Ok(self.store.list_jobs())
    }

    async fn get_job(&self, id: &str) -> Result<Option<Job>> {
        Ok(self.store.get_job(id))
    }

    async fn create_job(&self, input: CreateJob) -> Result<Job> {
        self.store.add_job(input)
    }

    async fn update_job(&self, id: &str, patch: JobPatch) -> Result<Option<Job>> {
        self.store.update_job(id, patch)
    }

    async fn delete_job(&self, id: &str) -> Result<bool> {
        Ok(self.store.delete_job(id))
    }

    async fn list_leads(&self) -> Result<Vec<Lead>> {
        Ok(self.store.list_leads())
    }

    async fn get_lead(&self, id: &str) -> Result<Option<Lead>> {
        Ok(self.store.get_lead(id))
    }

    async fn create_lead(&self, input: CreateLead) -> Result<Lead> {
        self.store.add_lead(input)
    }

    async fn update_lead(&self, id: &str, patch: LeadPatch) -> Result<Option<Lead>> {
        self.store.update_lead(id, patch)
    }

    async fn delete_lead(&self, id: &str) -> Result<bool> {
        Ok(self.store.delete_lead(id))
    }

    async fn list_prospects(&self) -> Result<Vec<Prospect>> {
        Ok(self.store.list_prospects())
    }
}
