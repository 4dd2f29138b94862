//! Data models for TaskForge.
//!
//! Defines the entity types exchanged between the API layer, the
//! backend port and the in-memory store.

mod job;
mod lead;
mod prospect;

pub use job::*;
pub use lead::*;
pub use prospect::*;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new entity identifier
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
