//! Application state for TaskForge.
//!
//! Contains the shared state that is passed to all handlers.

use std::sync::Arc;

use crate::backend::{self, BackendPort};
use crate::config::{self, AuthConfig};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Backend serving entity operations (local store or upstream proxy).
    pub backend: Arc<dyn BackendPort>,
    /// Auth gate configuration.
    pub auth: AuthConfig,
}

impl AppState {
    /// Create the application state from global configuration.
    pub fn new() -> Self {
        let config = config::config();

        Self {
            backend: backend::from_config(&config.backend, config.store.seed_demo),
            auth: config.auth.clone(),
        }
    }

    /// Create state over an explicit backend. Used by tests to run each
    /// case against an isolated store.
    pub fn with_backend(backend: Arc<dyn BackendPort>, auth: AuthConfig) -> Self {
        Self { backend, auth }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
