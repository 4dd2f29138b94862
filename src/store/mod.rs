//! In-memory entity store.
//!
//! Collections for jobs, leads and prospects held in process memory.
//! Nothing is persisted; all state is lost on restart. Listing imposes
//! newest-first order at read time. Each collection lives behind an
//! `RwLock`, which serializes mutations across the server's worker
//! tasks; operations hold the lock for their full duration, so there is
//! no interleaving within a single operation.

mod jobs;
mod leads;
mod prospects;

use std::sync::RwLock;

use crate::models::{new_id, now, Job, JobStatus, Lead, LeadStatus, Prospect};

/// In-memory collections for the local backend profile.
///
/// Constructed explicitly at process start (or per test case); there is
/// no module-level singleton.
pub struct Store {
    jobs: RwLock<Vec<Job>>,
    leads: RwLock<Vec<Lead>>,
    prospects: Vec<Prospect>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(Vec::new()),
            leads: RwLock::new(Vec::new()),
            prospects: Vec::new(),
        }
    }

    /// Create a store seeded with demo records.
    pub fn with_demo_data() -> Self {
        let jobs = vec![
            Job {
                id: new_id(),
                title: "Driveway Wash".to_string(),
                customer: Some("Ava C.".to_string()),
                notes: None,
                price: Some(250),
                status: JobStatus::InProgress,
                created_at: now(),
            },
            Job {
                id: new_id(),
                title: "Patio Clean".to_string(),
                customer: Some("Derrick M.".to_string()),
                notes: None,
                price: Some(180),
                status: JobStatus::Done,
                created_at: now(),
            },
            Job {
                id: new_id(),
                title: "Roof Soft Wash".to_string(),
                customer: Some("Priya T.".to_string()),
                notes: None,
                price: Some(620),
                status: JobStatus::Done,
                created_at: now(),
            },
        ];

        let leads = vec![Lead {
            id: new_id(),
            name: "Maria R.".to_string(),
            email: None,
            phone: Some("555-111-2222".to_string()),
            company: None,
            notes: Some("House Wash".to_string()),
            status: LeadStatus::New,
            created_at: now(),
        }];

        let prospects = vec![
            Prospect {
                id: "fl1".to_string(),
                name: "Jeff P.".to_string(),
                phone: "555-333-4444".to_string(),
                service: "Gutter Clean".to_string(),
                city: "San Mateo".to_string(),
            },
            Prospect {
                id: "fl2".to_string(),
                name: "Lauren H.".to_string(),
                phone: "555-222-3333".to_string(),
                service: "House Wash".to_string(),
                city: "San Jose".to_string(),
            },
        ];

        Self {
            jobs: RwLock::new(jobs),
            leads: RwLock::new(leads),
            prospects,
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim an optional string field, mapping blank values to `None`.
fn trimmed(value: Option<String>) -> Option<String> {
    value.and_then(non_empty)
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
