//! Error handling for the trash service
//!
//! This module defines all error types used by the server and the batch processor.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{Result, TrashError};
