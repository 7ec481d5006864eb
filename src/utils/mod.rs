//! Shared utilities

pub mod auth; // Anti-forgery tokens
pub mod error; // Error handling
