//! Lead collection operations.

use crate::error::{Error, Result};
use crate::models::{new_id, now, CreateLead, Lead, LeadPatch, LeadStatus};

use super::{non_empty, trimmed, Store};

impl Store {
    /// List all leads, newest first.
    pub fn list_leads(&self) -> Vec<Lead> {
        let mut leads = self.leads.read().expect("leads lock poisoned").clone();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        leads
    }

    /// Look up a lead by id.
    pub fn get_lead(&self, id: &str) -> Option<Lead> {
        self.leads
            .read()
            .expect("leads lock poisoned")
            .iter()
            .find(|l| l.id == id)
            .cloned()
    }

    /// Validate and insert a new lead at the head of the collection.
    pub fn add_lead(&self, input: CreateLead) -> Result<Lead> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::Validation("Lead name must not be empty".into()));
        }

        let lead = Lead {
            id: new_id(),
            name,
            email: trimmed(input.email),
            phone: trimmed(input.phone),
            company: trimmed(input.company),
            notes: trimmed(input.notes),
            status: input.status.unwrap_or(LeadStatus::New),
            created_at: now(),
        };

        self.leads
            .write()
            .expect("leads lock poisoned")
            .insert(0, lead.clone());
        Ok(lead)
    }

    /// Merge a partial patch into an existing lead.
    ///
    /// Returns `None` when the id is unknown, leaving the collection
    /// unchanged.
    pub fn update_lead(&self, id: &str, patch: LeadPatch) -> Result<Option<Lead>> {
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(Error::Validation("Lead name must not be empty".into()));
            }
        }

        let mut leads = self.leads.write().expect("leads lock poisoned");
        let Some(lead) = leads.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            lead.name = name.trim().to_string();
        }
        if let Some(email) = patch.email {
            lead.email = non_empty(email);
        }
        if let Some(phone) = patch.phone {
            lead.phone = non_empty(phone);
        }
        if let Some(company) = patch.company {
            lead.company = non_empty(company);
        }
        if let Some(notes) = patch.notes {
            lead.notes = non_empty(notes);
        }
        if let Some(status) = patch.status {
            lead.status = status;
        }

        Ok(Some(lead.clone()))
    }

    /// Remove a lead. Returns whether a removal occurred.
    pub fn delete_lead(&self, id: &str) -> bool {
        let mut leads = self.leads.write().expect("leads lock poisoned");
        let before = leads.len();
        leads.retain(|l| l.id != id);
        leads.len() != before
    }
}
