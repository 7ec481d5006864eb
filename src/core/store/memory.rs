//! In-memory content store
//!
//! Stands in for the host platform's content store: records are seeded from
//! configuration and live for the lifetime of the process.

use super::permalink::{LookupKey, lookup_key, normalize_path};
use super::types::{Record, RecordId, RecordStatus};
use super::ContentStore;
use crate::auth::{Actor, Capability};
use crate::config::StoreConfig;
use crate::utils::error::{Result, TrashError};
use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use tracing::{debug, info};
use url::Url;

#[derive(Debug, Clone)]
struct StoredRecord {
    record: Record,
    /// Status to return to on restore
    trashed_from: Option<RecordStatus>,
}

#[derive(Debug, Default)]
struct InvalidationState {
    /// Outstanding suspensions; invalidation runs only at depth 0
    depth: usize,
    /// Invalidations requested while suspended
    pending: usize,
    /// Number of times the path cache was actually cleared
    flushes: usize,
}

/// Content store kept entirely in memory
#[derive(Debug)]
pub struct MemoryContentStore {
    home: Url,
    records: RwLock<BTreeMap<RecordId, StoredRecord>>,
    /// Memoized path lookups
    path_cache: DashMap<String, Option<RecordId>>,
    invalidation: Mutex<InvalidationState>,
}

impl MemoryContentStore {
    /// Create an empty store for the site at `home_url`
    pub fn new(home_url: &str) -> Result<Self> {
        let home = Url::parse(home_url)
            .map_err(|e| TrashError::config(format!("Invalid home_url {}: {}", home_url, e)))?;

        Ok(Self {
            home,
            records: RwLock::new(BTreeMap::new()),
            path_cache: DashMap::new(),
            invalidation: Mutex::new(InvalidationState::default()),
        })
    }

    /// Build a store from configuration, reading the seed file if one is set
    pub async fn from_config(config: &StoreConfig) -> Result<Self> {
        let store = Self::new(&config.home_url)?;
        store.insert_all(config.records.iter().cloned());

        if let Some(seed_file) = &config.seed_file {
            let content = tokio::fs::read_to_string(seed_file).await.map_err(|e| {
                TrashError::config(format!("Failed to read seed file {}: {}", seed_file, e))
            })?;
            let records: Vec<Record> = serde_yaml::from_str(&content)?;
            store.insert_all(records);
        }

        info!(
            "Content store ready for {} with {} records",
            store.home,
            store.len()
        );
        Ok(store)
    }

    /// Add records, replacing any with the same id
    pub fn insert_all(&self, records: impl IntoIterator<Item = Record>) {
        let mut guard = self.records.write();
        for mut record in records {
            record.path = normalize_path(&record.path);
            guard.insert(
                record.id,
                StoredRecord {
                    record,
                    trashed_from: None,
                },
            );
        }
        drop(guard);
        self.invalidate();
    }

    /// Snapshot of a record
    pub fn get(&self, id: RecordId) -> Option<Record> {
        self.records.read().get(&id).map(|r| r.record.clone())
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take a record back out of trash. Returns `false` if it was not trashed.
    pub fn restore(&self, id: RecordId) -> bool {
        let restored = {
            let mut guard = self.records.write();
            match guard.get_mut(&id) {
                Some(stored) if stored.record.status == RecordStatus::Trash => {
                    stored.record.status = stored.trashed_from.take().unwrap_or_default();
                    true
                }
                _ => false,
            }
        };

        if restored {
            debug!("Restored record {} from trash", id);
            self.invalidate();
        }
        restored
    }

    /// How many times the lookup cache has been cleared
    pub fn cache_flushes(&self) -> usize {
        self.invalidation.lock().flushes
    }

    fn invalidate(&self) {
        let mut state = self.invalidation.lock();
        if state.depth > 0 {
            state.pending += 1;
            return;
        }
        self.path_cache.clear();
        state.flushes += 1;
    }

    fn find_by_path(&self, path: &str) -> Option<RecordId> {
        if let Some(hit) = self.path_cache.get(path) {
            return *hit;
        }

        let found = self
            .records
            .read()
            .values()
            .find(|r| r.record.status != RecordStatus::Trash && r.record.path == path)
            .map(|r| r.record.id);
        self.path_cache.insert(path.to_string(), found);
        found
    }

    fn is_live(&self, id: RecordId) -> bool {
        self.records
            .read()
            .get(&id)
            .is_some_and(|r| r.record.status != RecordStatus::Trash)
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn resolve_url(&self, url: &str) -> Result<Option<RecordId>> {
        let id = match lookup_key(&self.home, url) {
            Some(LookupKey::Id(id)) => Some(id),
            Some(LookupKey::Path(path)) => self.find_by_path(&path),
            None => None,
        };

        // Cached lookups may predate a deferred invalidation
        Ok(id.filter(|id| self.is_live(*id)))
    }

    async fn soft_delete(&self, id: RecordId) -> Result<bool> {
        let trashed = {
            let mut guard = self.records.write();
            match guard.get_mut(&id) {
                Some(stored)
                    if !stored.record.protected
                        && stored.record.status != RecordStatus::Trash =>
                {
                    stored.trashed_from = Some(stored.record.status);
                    stored.record.status = RecordStatus::Trash;
                    true
                }
                _ => false,
            }
        };

        if trashed {
            debug!("Record {} moved to trash", id);
            self.invalidate();
        } else {
            debug!("Record {} was not trashed", id);
        }
        Ok(trashed)
    }

    fn actor_can_delete(&self, actor: &Actor) -> bool {
        actor.can(Capability::DeletePosts)
    }

    fn suspend_cache_invalidation(&self, suspend: bool) -> bool {
        let mut state = self.invalidation.lock();
        let was_suspended = state.depth > 0;

        if suspend {
            state.depth += 1;
        } else {
            state.depth = state.depth.saturating_sub(1);
            if state.depth == 0 && state.pending > 0 {
                debug!("Flushing {} deferred invalidations", state.pending);
                state.pending = 0;
                self.path_cache.clear();
                state.flushes += 1;
            }
        }

        was_suspended
    }
}
