//! Job collection operations.

use crate::error::{Error, Result};
use crate::models::{new_id, now, CreateJob, Job, JobPatch, JobStatus};

use super::{non_empty, trimmed, Store};

impl Store {
    /// List all jobs, newest first.
    pub fn list_jobs(&self) -> Vec<Job> {
        let mut jobs = self.jobs.read().expect("jobs lock poisoned").clone();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        jobs
    }

    /// Look up a job by id.
    pub fn get_job(&self, id: &str) -> Option<Job> {
        self.jobs
            .read()
            .expect("jobs lock poisoned")
            .iter()
            .find(|j| j.id == id)
            .cloned()
    }

    /// Validate and insert a new job at the head of the collection.
    pub fn add_job(&self, input: CreateJob) -> Result<Job> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(Error::Validation("Job title must not be empty".into()));
        }
        if input.price.is_some_and(|p| p < 0) {
            return Err(Error::Validation("Job price must not be negative".into()));
        }

        let job = Job {
            id: new_id(),
            title,
            customer: trimmed(input.customer),
            notes: trimmed(input.notes),
            price: input.price,
            status: input.status.unwrap_or(JobStatus::New),
            created_at: now(),
        };

        self.jobs
            .write()
            .expect("jobs lock poisoned")
            .insert(0, job.clone());
        Ok(job)
    }

    /// Merge a partial patch into an existing job.
    ///
    /// Only explicitly-provided fields are applied; `id` and
    /// `created_at` are never touched. Returns `None` when the id is
    /// unknown, leaving the collection unchanged.
    pub fn update_job(&self, id: &str, patch: JobPatch) -> Result<Option<Job>> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(Error::Validation("Job title must not be empty".into()));
            }
        }
        if patch.price.is_some_and(|p| p < 0) {
            return Err(Error::Validation("Job price must not be negative".into()));
        }

        let mut jobs = self.jobs.write().expect("jobs lock poisoned");
        let Some(job) = jobs.iter_mut().find(|j| j.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            job.title = title.trim().to_string();
        }
        if let Some(customer) = patch.customer {
            job.customer = non_empty(customer);
        }
        if let Some(notes) = patch.notes {
            job.notes = non_empty(notes);
        }
        if let Some(price) = patch.price {
            job.price = Some(price);
        }
        if let Some(status) = patch.status {
            job.status = status;
        }

        Ok(Some(job.clone()))
    }

    /// Remove a job. Returns whether a removal occurred.
    pub fn delete_job(&self, id: &str) -> bool {
        let mut jobs = self.jobs.write().expect("jobs lock poisoned");
        let before = jobs.len();
        jobs.retain(|j| j.id != id);
        jobs.len() != before
    }
}
