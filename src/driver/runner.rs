//! Sequential batch runner
//!
//! Sends one batch at a time and waits for its reply before sending the
//! next. The first transport or application error ends the run.

use super::batching::{parse_url_list, split_batches};
use super::errors::{DriverError, Result};
use super::view::{Confirm, ResultsView};
use crate::core::batch::AjaxEnvelope;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// Asked before a run starts
pub const CONFIRM_PROMPT: &str = "Are you sure you want to move these posts to trash in batches?";

/// Default number of URLs per request
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Sends one batch of URLs and returns the server's envelope
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BatchTransport: Send + Sync {
    async fn send_batch(&self, urls: &[String]) -> Result<AjaxEnvelope>;
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// Every batch was sent and answered
    Completed,
    /// Stopped at a failing batch; later batches were not sent
    Halted { reason: String },
}

/// What a run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub urls: usize,
    pub batches_total: usize,
    pub batches_sent: usize,
    pub messages: usize,
    pub status: RunStatus,
}

impl RunSummary {
    pub fn is_complete(&self) -> bool {
        self.status == RunStatus::Completed
    }
}

/// Drives a URL list through a [`BatchTransport`]
pub struct BatchDriver<T> {
    transport: T,
    batch_size: usize,
    running: AtomicBool,
}

impl<T: BatchTransport> BatchDriver<T> {
    pub fn new(transport: T, batch_size: usize) -> Self {
        Self {
            transport,
            batch_size: batch_size.max(1),
            running: AtomicBool::new(false),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Whether a run is in progress
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Confirm, then send `text` (one URL per line) in batches, writing every
    /// result line to `view`
    pub async fn run(
        &self,
        text: &str,
        confirm: &mut dyn Confirm,
        view: &mut dyn ResultsView,
    ) -> Result<RunSummary> {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(DriverError::Busy);
        }
        let _running = RunningGuard(&self.running);

        if !confirm.confirm(CONFIRM_PROMPT) {
            info!("Run declined by operator");
            return Err(DriverError::Declined);
        }

        let urls = parse_url_list(text);
        let batches = split_batches(&urls, self.batch_size);

        view.clear();
        view.set_busy(true);

        let mut summary = RunSummary {
            urls: urls.len(),
            batches_total: batches.len(),
            batches_sent: 0,
            messages: 0,
            status: RunStatus::Completed,
        };

        for (index, batch) in batches.iter().enumerate() {
            debug!(
                "Sending batch {}/{} with {} URLs",
                index + 1,
                batches.len(),
                batch.len()
            );
            summary.batches_sent += 1;

            let reply = self.transport.send_batch(batch).await.and_then(|envelope| {
                if envelope.success {
                    Ok(envelope.messages().unwrap_or_default())
                } else {
                    Err(DriverError::Application(
                        envelope
                            .error_message()
                            .unwrap_or_else(|| "Request failed.".to_string()),
                    ))
                }
            });

            match reply {
                Ok(messages) => {
                    for message in &messages {
                        view.append(message);
                    }
                    summary.messages += messages.len();
                }
                Err(e) => {
                    warn!("Batch {} failed, halting: {}", index + 1, e);
                    let reason = e.to_string();
                    view.append(&format!("❌ Error: {}", reason));
                    summary.status = RunStatus::Halted { reason };
                    break;
                }
            }
        }

        view.set_busy(false);
        info!(
            "Run finished: {}/{} batches sent, {} messages",
            summary.batches_sent, summary.batches_total, summary.messages
        );
        Ok(summary)
    }
}

/// Clears the in-progress flag when a run ends, however it ends
struct RunningGuard<'a>(&'a AtomicBool);

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
