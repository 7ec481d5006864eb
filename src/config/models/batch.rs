//! Batching configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Batching configuration shared by the admin page and the endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// URLs per request sent by the admin page
    #[serde(default = "default_batch_size")]
    pub size: usize,
    /// AJAX action name that dispatches to the batch processor
    #[serde(default = "default_batch_action")]
    pub action: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            size: default_batch_size(),
            action: default_batch_action(),
        }
    }
}
