//! # trash-by-url
//!
//! Moves content records to trash in bulk, given the public URLs they are
//! published at.
//!
//! - **Admin server**: an operator page plus an AJAX endpoint that resolves
//!   each URL to a record and soft-deletes it
//! - **Batch driver**: a client that sends a URL list in fixed-size batches,
//!   one request at a time, stopping at the first failure
//! - **Anti-forgery tokens**: every batch carries a time-bucketed token issued
//!   to the same operator for the same action
//!
//! ## Driving a run
//!
//! ```rust,no_run
//! use trash_by_url::driver::{AjaxTransport, AutoConfirm, BatchDriver, TerminalView, TransportConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport =
//!         AjaxTransport::connect(TransportConfig::new("http://127.0.0.1:8000", "editor-key")).await?;
//!     let size = transport.batch_size();
//!     let driver = BatchDriver::new(transport, size);
//!
//!     let urls = "https://blog.example.com/hello-world/\nhttps://blog.example.com/?p=42";
//!     let summary = driver
//!         .run(urls, &mut AutoConfirm(true), &mut TerminalView::new(std::io::stdout()))
//!         .await?;
//!     println!("{} batches sent", summary.batches_sent);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod driver;
pub mod server;
pub mod utils;

pub use config::Config;
pub use utils::error::{Result, TrashError};

pub use core::batch::{AjaxEnvelope, BatchOutcome, BatchProcessor, BatchRequest, UrlOutcome};
pub use core::store::{ContentStore, MemoryContentStore, Record, RecordId, RecordStatus};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_time: &'static str,
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
