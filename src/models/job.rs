//! Job entity and its input shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unit of work for a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Opaque identifier, generated at creation and never changed.
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Quoted price in whole dollars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    pub status: JobStatus,
    /// Set once at insertion; update operations never touch it.
    pub created_at: DateTime<Utc>,
}

/// Lifecycle state of a job.
///
/// Any state in the set may be assigned from any other; there is no
/// enforced transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "in progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(format!("Unknown job status: {}", s)),
        }
    }
}

/// Fields accepted when creating a job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJob {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

/// Partial update for a job.
///
/// Absent fields retain their prior values; `id` and `created_at` are
/// not part of the patch and can never be overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_status_parsing() {
        assert_eq!("new".parse::<JobStatus>().unwrap(), JobStatus::New);
        assert_eq!(
            "In Progress".parse::<JobStatus>().unwrap(),
            JobStatus::InProgress
        );
        assert_eq!("DONE".parse::<JobStatus>().unwrap(), JobStatus::Done);
        assert!("paid".parse::<JobStatus>().is_err());
    }

    #[test]
    fn test_job_status_wire_format() {
        assert_eq!(
            serde_json::to_value(JobStatus::InProgress).unwrap(),
            "In Progress"
        );
        assert_eq!(serde_json::to_value(JobStatus::New).unwrap(), "New");
    }
}
