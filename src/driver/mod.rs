//! Batch driver
//!
//! Client side of the trash workflow: reads a URL list, asks for
//! confirmation, then sends the list to the admin server in fixed-size
//! batches, strictly one request at a time.

mod batching;
mod errors;
mod runner;
mod transport;
mod view;

pub use batching::{parse_url_list, split_batches};
pub use errors::{DriverError, Result};
pub use runner::{
    BatchDriver, BatchTransport, CONFIRM_PROMPT, DEFAULT_BATCH_SIZE, RunStatus, RunSummary,
};
pub use transport::{AjaxTransport, TransportConfig};
pub use view::{AutoConfirm, Confirm, RecordingView, ResultsView, StdinConfirm, TerminalView};
