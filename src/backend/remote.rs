//! Remote backend proxying to an upstream HTTP service.
//!
//! The upstream speaks the same entity JSON as the local profile, with
//! list endpoints returning bare arrays. Network failures and upstream
//! error statuses are converted into `Error::Upstream` at this
//! boundary; they never crash a handler.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::{CreateJob, CreateLead, Job, JobPatch, Lead, LeadPatch, Prospect};

use super::BackendPort;

/// Per-request timeout toward the upstream; an unresponsive upstream
/// fails the request instead of stalling it indefinitely.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Proxy backend forwarding entity operations to an upstream service.
pub struct RemoteBackend {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Read a success body as JSON, converting any failure status into
    /// an upstream error carrying the original status and detail.
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(upstream_error(status, response).await);
        }

        response.json::<T>().await.map_err(|e| Error::Upstream {
            status: 502,
            detail: format!("Invalid upstream response: {}", e),
        })
    }
}

async fn upstream_error(status: StatusCode, response: reqwest::Response) -> Error {
    let detail = response.text().await.unwrap_or_default();
    Error::Upstream {
        status: status.as_u16(),
        detail: if detail.is_empty() {
            "Upstream request failed".to_string()
        } else {
            detail
        },
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    Error::Upstream {
        status: 502,
        detail: format!("Upstream unreachable: {}", err),
    }
}

#[async_trait]
impl BackendPort for RemoteBackend {
    async fn list_jobs(&self) -> Result<Vec<Job>> {
        let response = self
            .client
            .get(self.url("/jobs"))
            .timeout(UPSTREAM_TIMEOUT)
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_json(response).await
    }

    async fn get_job(&self, id: &str) -> Result<Option<Job>> {
        let response = self
            .client
            .get(self.url(&format!("/jobs/{}", id)))
            .timeout(UPSTREAM_TIMEOUT)
            .send()
            .await
            .map_err(transport_error)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::read_json(response).await?))
    }

    async fn create_job(&self, input: CreateJob) -> Result<Job> {
        let response = self
            .client
            .post(self.url("/jobs"))
            .timeout(UPSTREAM_TIMEOUT)
            .json(&input)
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_json(response).await
    }

    async fn update_job(&self, id: &str, patch: JobPatch) -> Result<Option<Job>> {
        let response = self
            .client
            .put(self.url(&format!("/jobs/{}", id)))
            .timeout(UPSTREAM_TIMEOUT)
            .json(&patch)
            .send()
            .await
            .map_err(transport_error)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::read_json(response).await?))
    }

    async fn delete_job(&self, id: &str) -> Result<bool> {
        let response = self
            .client
            .delete(self.url(&format!("/jobs/{}", id)))
            .timeout(UPSTREAM_TIMEOUT)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !status.is_success() {
            return Err(upstream_error(status, response).await);
        }
        Ok(true)
    }

    async fn list_leads(&self) -> Result<Vec<Lead>> {
        let response = self
            .client
            .get(self.url("/leads"))
            .timeout(UPSTREAM_TIMEOUT)
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_json(response).await
    }

    async fn get_lead(&self, id: &str) -> Result<Option<Lead>> {
        let response = self
            .client
            .get(self.url(&format!("/leads/{}", id)))
            .timeout(UPSTREAM_TIMEOUT)
            .send()
            .await
            .map_err(transport_error)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::read_json(response).await?))
    }

    async fn create_lead(&self, input: CreateLead) -> Result<Lead> {
        let response = self
            .client
            .post(self.url("/leads"))
            .timeout(UPSTREAM_TIMEOUT)
            .json(&input)
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_json(response).await
    }

    async fn update_lead(&self, id: &str, patch: LeadPatch) -> Result<Option<Lead>> {
        let response = self
            .client
            .put(self.url(&format!("/leads/{}", id)))
            .timeout(UPSTREAM_TIMEOUT)
            .json(&patch)
            .send()
            .await
            .map_err(transport_error)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::read_json(response).await?))
    }

    async fn delete_lead(&self, id: &str) -> Result<bool> {
        let response = self
            .client
            .delete(self.url(&format!("/leads/{}", id)))
            .timeout(UPSTREAM_TIMEOUT)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !status.is_success() {
            return Err(upstream_error(status, response).await);
        }
        Ok(true)
    }

    async fn list_prospects(&self) -> Result<Vec<Prospect>> {
        let response = self
            .client
            .get(self.url("/find-leads"))
            .timeout(UPSTREAM_TIMEOUT)
            .send()
            .await
            .map_err(transport_error)?;
        // Older upstreams do not expose a prospect directory
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        Self::read_json(response).await
    }
}
