//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server entry point used by the binary.

use crate::config::Config;
use crate::core::store::ContentStore;
use crate::server::routes::{admin, ajax};
use crate::server::server::HttpServer;
use crate::utils::error::{Result, TrashError};
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    store: Option<Arc<dyn ContentStore>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use this store instead of one built from the configuration
    pub fn with_store(mut self, store: Arc<dyn ContentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| TrashError::Config("Configuration is required".to_string()))?;

        match self.store {
            Some(store) => Ok(HttpServer::with_store(config, store)),
            None => HttpServer::new(&config).await,
        }
    }
}

/// Build the server from `config`, log the endpoints and serve until stopped
pub async fn run_server(config: Config) -> Result<()> {
    info!("🚀 Starting trash-by-url admin server");

    let server = ServerBuilder::new().with_config(config.clone()).build().await?;
    info!(
        "🌐 Server starting at: http://{}",
        config.server().address()
    );
    info!("📋 Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  {} - Admin page", admin::ADMIN_PAGE_PATH);
    info!("   GET  {} - Token for drivers", admin::NONCE_PATH);
    info!("   POST {} - Batch action", ajax::AJAX_PATH);

    server.start().await
}
