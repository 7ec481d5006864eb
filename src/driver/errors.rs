//! Driver errors

use thiserror::Error;

/// Errors raised while driving batches against the server
#[derive(Error, Debug)]
pub enum DriverError {
    /// Connection, timeout or other transport failure
    #[error("{0}")]
    Transport(String),

    /// HTTP client failure
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Reply body was not the expected JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Reply envelope reported failure
    #[error("{0}")]
    Application(String),

    /// A run is already in progress
    #[error("A deletion run is already in progress")]
    Busy,

    /// Operator declined the confirmation prompt
    #[error("Cancelled by operator")]
    Declined,

    /// Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading the URL list
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, DriverError>;

impl DriverError {
    /// Whether this error ends a run after it started sending
    pub fn is_halting(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Http(_) | Self::InvalidResponse(_) | Self::Application(_)
        )
    }
}
