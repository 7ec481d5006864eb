//! Authentication configuration

use super::*;
use crate::auth::Capability;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret used to sign anti-forgery tokens
    #[serde(default)]
    pub nonce_secret: String,
    /// Token lifetime in seconds
    #[serde(default = "default_nonce_lifetime")]
    pub nonce_lifetime: u64,
    /// API key header name
    #[serde(default = "default_api_key_header")]
    pub api_key_header: String,
    /// Known operators
    #[serde(default)]
    pub actors: Vec<ActorConfig>,
}

/// One operator and the capabilities granted to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorConfig {
    pub name: String,
    pub api_key: String,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            nonce_secret: String::new(),
            nonce_lifetime: default_nonce_lifetime(),
            api_key_header: default_api_key_header(),
            actors: Vec::new(),
        }
    }
}

impl AuthConfig {
    /// Nonce secret, generating a random one when none is configured.
    ///
    /// A generated secret lives only as long as the process, so tokens handed
    /// out before a restart stop verifying.
    pub fn effective_nonce_secret(&self) -> String {
        if self.nonce_secret.is_empty() {
            warn!("No nonce_secret configured; generating an ephemeral one");
            generate_secure_secret()
        } else {
            self.nonce_secret.clone()
        }
    }
}

/// Generate a 64-character random secret
fn generate_secure_secret() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Warn about configurations that cannot trash anything
pub fn warn_insecure_config(config: &AuthConfig) {
    if config.actors.is_empty() {
        warn!("No actors configured; every request will be treated as anonymous");
    }
    if !config.nonce_secret.is_empty() && config.nonce_secret.len() < 32 {
        warn!("nonce_secret is shorter than 32 characters");
    }
}
