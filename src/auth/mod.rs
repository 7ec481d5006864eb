//! Authentication and authorization
//!
//! Operators are identified by API key; the anti-forgery token ties each
//! batch request to a page or token issued to the same operator.

mod types;

pub use types::{Actor, Capability};

use crate::config::AuthConfig;
use crate::utils::auth::{NonceManager, NonceVerdict};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Main authentication system
#[derive(Debug, Clone)]
pub struct AuthSystem {
    /// Actors keyed by API key
    actors: HashMap<String, Actor>,
    /// Header carrying the API key
    api_key_header: String,
    /// Anti-forgery token handler
    nonces: NonceManager,
}

impl AuthSystem {
    /// Create a new authentication system
    pub fn new(config: &AuthConfig) -> Self {
        info!("Initializing authentication system");

        let actors = config
            .actors
            .iter()
            .map(|a| {
                (
                    a.api_key.clone(),
                    Actor::new(a.name.clone(), a.capabilities.iter().copied()),
                )
            })
            .collect::<HashMap<_, _>>();

        info!("Authentication system initialized with {} actors", actors.len());

        Self {
            actors,
            api_key_header: config.api_key_header.clone(),
            nonces: NonceManager::new(
                config.effective_nonce_secret(),
                Duration::from_secs(config.nonce_lifetime),
            ),
        }
    }

    /// Name of the header carrying the API key
    pub fn api_key_header(&self) -> &str {
        &self.api_key_header
    }

    /// Resolve an API key to an actor; unknown or missing keys are anonymous
    pub fn authenticate(&self, api_key: Option<&str>) -> Actor {
        match api_key.and_then(|key| self.actors.get(key)) {
            Some(actor) => {
                debug!("Authenticated actor: {}", actor.name());
                actor.clone()
            }
            None => {
                if api_key.is_some() {
                    warn!("Request with unknown API key");
                }
                Actor::anonymous()
            }
        }
    }

    /// Issue an anti-forgery token for `actor` performing `action`
    pub fn create_nonce(&self, action: &str, actor: &Actor) -> Result<String> {
        self.nonces.create(action, actor.name())
    }

    /// Check an anti-forgery token for `actor` performing `action`
    pub fn verify_nonce(&self, token: &str, action: &str, actor: &Actor) -> Result<bool> {
        let verdict = self.nonces.verify(token, action, actor.name())?;
        if verdict == NonceVerdict::Aging {
            debug!("Accepted token from the previous tick for {}", actor.name());
        }
        Ok(verdict.is_valid())
    }
}
