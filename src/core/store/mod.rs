//! Content store capability
//!
//! The batch processor never talks to a storage engine directly. Everything it
//! needs from the host (URL lookup, trashing, the delete permission and the
//! cache-invalidation switch) goes through [`ContentStore`].

mod memory;
pub mod permalink;
mod types;

pub use memory::MemoryContentStore;
pub use types::{Record, RecordId, RecordStatus};

use crate::auth::Actor;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Host operations the batch processor depends on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Map a public URL to the record it shows
    async fn resolve_url(&self, url: &str) -> Result<Option<RecordId>>;

    /// Move a record to trash. `Ok(false)` means the store refused.
    async fn soft_delete(&self, id: RecordId) -> Result<bool>;

    /// Whether `actor` may trash content records
    fn actor_can_delete(&self, actor: &Actor) -> bool;

    /// Suspend (`true`) or resume (`false`) cache invalidation. Returns whether
    /// invalidation was suspended before the call.
    fn suspend_cache_invalidation(&self, suspend: bool) -> bool;
}

/// Keeps cache invalidation suspended for as long as it is alive
pub struct InvalidationPause<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> InvalidationPause<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        store.suspend_cache_invalidation(true);
        Self { store }
    }
}

impl Drop for InvalidationPause<'_> {
    fn drop(&mut self) {
        self.store.suspend_cache_invalidation(false);
    }
}
