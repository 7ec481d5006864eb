//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

#![allow(missing_docs)]

pub mod auth;
pub mod batch;
pub mod server;
pub mod service;
pub mod store;

// Re-export all configuration types
pub use auth::*;
pub use batch::*;
pub use server::*;
pub use service::*;
pub use store::*;

/// Default values for configuration
pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    256 * 1024
}

pub fn default_nonce_lifetime() -> u64 {
    86400 // 24 hours
}

pub fn default_api_key_header() -> String {
    "X-Api-Key".to_string()
}

pub fn default_batch_size() -> usize {
    5
}

pub fn default_batch_action() -> String {
    "trash_by_url_batch".to_string()
}

pub fn default_home_url() -> String {
    "http://localhost".to_string()
}
