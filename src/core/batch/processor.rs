//! Batch processor: resolve each URL and move its record to trash

use super::sanitize::sanitize_url;
use super::types::*;
use crate::core::store::{ContentStore, InvalidationPause};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Processes one batch of URLs against a content store
#[derive(Clone)]
pub struct BatchProcessor {
    store: Arc<dyn ContentStore>,
}

impl BatchProcessor {
    /// Create a new batch processor
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Process a batch.
    ///
    /// Authorization is checked once for the whole batch. Per-URL failures
    /// never stop the batch, and records trashed earlier in the batch stay
    /// trashed whatever happens later.
    pub async fn process(&self, request: BatchRequest<'_>) -> BatchOutcome {
        if !request.nonce_verified {
            warn!(actor = request.actor.name(), "Batch rejected: anti-forgery token failed");
            return BatchOutcome::Rejected(BatchRejection::NotAllowed);
        }

        if !self.store.actor_can_delete(request.actor) {
            warn!(actor = request.actor.name(), "Batch rejected: actor may not delete");
            return BatchOutcome::Rejected(BatchRejection::NotAllowed);
        }

        let urls = match decode_urls(request.urls) {
            Some(urls) => urls,
            None => {
                warn!(actor = request.actor.name(), "Batch rejected: urls is not a list");
                return BatchOutcome::Rejected(BatchRejection::InvalidInput);
            }
        };

        let outcomes = {
            let _pause = InvalidationPause::new(self.store.as_ref());

            let mut outcomes = Vec::with_capacity(urls.len());
            for raw in &urls {
                let Some(url) = sanitize_url(raw) else {
                    continue;
                };
                outcomes.push(self.trash_one(url).await);
            }
            outcomes
        };

        let trashed = outcomes.iter().filter(|o| o.is_success()).count();
        info!(
            actor = request.actor.name(),
            received = urls.len(),
            processed = outcomes.len(),
            trashed,
            "Batch processed"
        );

        BatchOutcome::Completed(outcomes)
    }

    async fn trash_one(&self, url: String) -> UrlOutcome {
        let id = match self.store.resolve_url(&url).await {
            Ok(Some(id)) => id,
            Ok(None) => {
                debug!("No record for {}", url);
                return UrlOutcome::NotFound(url);
            }
            Err(e) => {
                warn!("Lookup failed for {}: {}", url, e);
                return UrlOutcome::DeleteFailed(url);
            }
        };

        match self.store.soft_delete(id).await {
            Ok(true) => {
                debug!("Trashed record {} for {}", id, url);
                UrlOutcome::Trashed(id)
            }
            Ok(false) => {
                debug!("Store refused to trash record {} for {}", id, url);
                UrlOutcome::DeleteFailed(url)
            }
            Err(e) => {
                warn!("Trashing record {} failed: {}", id, e);
                UrlOutcome::DeleteFailed(url)
            }
        }
    }
}

/// Decode the `urls` form field.
///
/// A missing field is an empty batch. Strings and numbers are taken as URL
/// text; other list members cannot be URLs and come out empty, so they are
/// skipped like blank lines. Anything that is not a JSON array is `None`.
pub fn decode_urls(field: Option<&str>) -> Option<Vec<String>> {
    let Some(raw) = field else {
        return Some(Vec::new());
    };

    let items: Vec<serde_json::Value> = serde_json::from_str(raw).ok()?;
    Some(
        items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                _ => String::new(),
            })
            .collect(),
    )
}
