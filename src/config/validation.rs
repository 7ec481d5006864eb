//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use std::collections::HashSet;
use tracing::debug;
use url::Url;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating service configuration");

        self.server.validate()?;
        self.auth.validate()?;
        self.batch.validate()?;
        self.store.validate()?;

        debug!("Service configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.timeout == 0 {
            return Err("Timeout cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count cannot be 0".to_string());
        }

        Ok(())
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), String> {
        if self.nonce_lifetime < 60 {
            return Err("Nonce lifetime should be at least 60 seconds".to_string());
        }

        if self.api_key_header.is_empty() {
            return Err("API key header name cannot be empty".to_string());
        }

        let mut names = HashSet::new();
        let mut keys = HashSet::new();
        for actor in &self.actors {
            if actor.name.is_empty() {
                return Err("Actor name cannot be empty".to_string());
            }
            if actor.api_key.is_empty() {
                return Err(format!("Actor {} has an empty API key", actor.name));
            }
            if !names.insert(actor.name.as_str()) {
                return Err(format!("Duplicate actor name: {}", actor.name));
            }
            if !keys.insert(actor.api_key.as_str()) {
                return Err(format!("Actor {} reuses another actor's API key", actor.name));
            }
        }

        Ok(())
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err("Batch size must be at least 1".to_string());
        }

        if self.action.is_empty() || !self.action.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(format!(
                "Batch action must be a non-empty identifier, got: {:?}",
                self.action
            ));
        }

        Ok(())
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<(), String> {
        let home = Url::parse(&self.home_url)
            .map_err(|e| format!("Store home_url is invalid: {}", e))?;
        match home.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "Store home_url must use http:// or https://, got: {}",
                    scheme
                ));
            }
        }

        let mut ids = HashSet::new();
        for record in &self.records {
            if record.id == 0 {
                return Err("Record id 0 is reserved".to_string());
            }
            if !ids.insert(record.id) {
                return Err(format!("Duplicate record id: {}", record.id));
            }
        }

        Ok(())
    }
}
