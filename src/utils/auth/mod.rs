//! Authentication and security utilities
//!
//! Anti-forgery tokens for the admin endpoints.

pub mod nonce;

pub use nonce::{NonceManager, NonceVerdict};
