//! Prospect list operations.

use crate::models::Prospect;

use super::Store;

impl Store {
    /// List the prospect directory. Read-only; seeded at construction.
    pub fn list_prospects(&self) -> Vec<Prospect> {
        self.prospects.clone()
    }
}
