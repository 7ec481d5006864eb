//! Configuration management for the trash service
//!
//! This module handles loading, validation, and management of all service configuration.

mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, TrashError};
use std::path::Path;
use tracing::{debug, info, warn};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/trash.yaml";

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TrashError::config(format!("Failed to read config file: {}", e)))?;

        let service: ServiceConfig = serde_yaml::from_str(&content)
            .map_err(|e| TrashError::config(format!("Failed to parse config: {}", e)))?;

        let config = Self { service };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load the file if it exists, fall back to defaults otherwise, then apply
    /// environment overrides
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let base = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            warn!("Configuration file {:?} not found, using defaults", path);
            Self::default()
        };

        let config = Self {
            service: base.service.apply_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.service.auth
    }

    /// Get batching configuration
    pub fn batch(&self) -> &BatchConfig {
        &self.service.batch
    }

    /// Get content store configuration
    pub fn store(&self) -> &StoreConfig {
        &self.service.store
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.service
            .server
            .validate()
            .map_err(|e| TrashError::config(format!("Server config error: {}", e)))?;

        self.service
            .auth
            .validate()
            .map_err(|e| TrashError::config(format!("Auth config error: {}", e)))?;

        self.service
            .batch
            .validate()
            .map_err(|e| TrashError::config(format!("Batch config error: {}", e)))?;

        self.service
            .store
            .validate()
            .map_err(|e| TrashError::config(format!("Store config error: {}", e)))?;

        crate::config::models::auth::warn_insecure_config(&self.service.auth);

        debug!("Configuration validation completed");
        Ok(())
    }
}
