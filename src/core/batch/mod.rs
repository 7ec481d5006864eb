//! Batch processing
//!
//! Server side of a bulk trash run: one call handles one batch of URLs.

mod processor;
pub mod sanitize;
mod types;


pub use processor::{BatchProcessor, decode_urls};
pub use sanitize::sanitize_url;
pub use types::{
    AjaxEnvelope, BatchOutcome, BatchRejection, BatchRequest, INVALID_INPUT_MESSAGE,
    MessagesData, NOT_ALLOWED_MESSAGE, UrlOutcome,
};
