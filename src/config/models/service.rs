//! Top-level service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Service configuration as read from `config/trash.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Batching configuration
    #[serde(default)]
    pub batch: BatchConfig,
    /// Content store configuration
    #[serde(default)]
    pub store: StoreConfig,
}
