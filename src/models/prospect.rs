//! Prospect entity.

use serde::{Deserialize, Serialize};

/// A potential customer surfaced on the find-leads page.
///
/// Prospects are a read-only directory; converting one into a real
/// `Lead` happens through the regular lead-creation flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prospect {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub service: String,
    pub city: String,
}
