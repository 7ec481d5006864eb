//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::auth::AuthSystem;
use crate::config::Config;
use crate::core::batch::BatchProcessor;
use crate::core::store::ContentStore;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc so cloning the state per worker is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authentication system
    pub auth: Arc<AuthSystem>,
    /// Host content store
    pub store: Arc<dyn ContentStore>,
    /// Batch processor bound to `store`
    pub processor: BatchProcessor,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, auth: AuthSystem, store: Arc<dyn ContentStore>) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            processor: BatchProcessor::new(Arc::clone(&store)),
            store,
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
