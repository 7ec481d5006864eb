//! Content store configuration

use super::*;
use crate::core::store::Record;
use serde::{Deserialize, Serialize};

/// In-memory content store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Site home URL; only URLs on this host resolve to records
    #[serde(default = "default_home_url")]
    pub home_url: String,
    /// Optional YAML file holding a list of records
    #[serde(default)]
    pub seed_file: Option<String>,
    /// Records declared inline
    #[serde(default)]
    pub records: Vec<Record>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            home_url: default_home_url(),
            seed_file: None,
            records: Vec::new(),
        }
    }
}
