//! Configuration loading from the environment
//!
//! Variables override whatever the YAML file provided.

use super::models::*;
use crate::utils::error::{Result, TrashError};
use std::env;
use tracing::debug;

impl ServiceConfig {
    /// Apply `TRASH_*` environment overrides on top of this configuration
    pub fn apply_env(mut self) -> Result<Self> {
        self.apply_env_from(|key| env::var(key).ok())?;
        Ok(self)
    }

    pub(crate) fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("TRASH_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("TRASH_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| TrashError::config(format!("Invalid port: {}", e)))?;
        }
        if let Some(workers) = lookup("TRASH_WORKERS") {
            self.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| TrashError::config(format!("Invalid workers count: {}", e)))?,
            );
        }
        if let Some(secret) = lookup("TRASH_NONCE_SECRET") {
            self.auth.nonce_secret = secret;
        }
        if let Some(size) = lookup("TRASH_BATCH_SIZE") {
            self.batch.size = size
                .parse()
                .map_err(|e| TrashError::config(format!("Invalid batch size: {}", e)))?;
        }
        if let Some(home) = lookup("TRASH_HOME_URL") {
            self.store.home_url = home;
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}
