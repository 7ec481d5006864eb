//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! All factories create real objects, not mocks.

use trash_by_url::auth::Capability;
use trash_by_url::config::{ActorConfig, Config};
use trash_by_url::{Record, RecordId, RecordStatus};

pub const HOME_URL: &str = "http://example.com";
pub const EDITOR_KEY: &str = "editor-key";
pub const VIEWER_KEY: &str = "viewer-key";
pub const BATCH_ACTION: &str = "trash_by_url_batch";

/// Factory for content records
pub struct RecordFactory;

impl RecordFactory {
    /// Published record at `path`
    pub fn published(id: RecordId, path: &str) -> Record {
        Record {
            id,
            path: path.to_string(),
            title: format!("Post {}", id),
            status: RecordStatus::Publish,
            protected: false,
        }
    }

    /// Record the store refuses to trash
    pub fn protected(id: RecordId, path: &str) -> Record {
        let mut record = Self::published(id, path);
        record.protected = true;
        record
    }

    /// `count` published records at `/post-<id>` starting from id 100
    pub fn many(count: usize) -> Vec<Record> {
        (0..count as RecordId)
            .map(|i| Self::published(100 + i, &format!("/post-{}", 100 + i)))
            .collect()
    }

    /// Public URL of a record
    pub fn url(record: &Record) -> String {
        format!("{}{}", HOME_URL, record.path)
    }
}

/// Factory for service configuration
pub struct ConfigFactory;

impl ConfigFactory {
    /// Editor and viewer actors, no records
    pub fn base() -> Config {
        let mut config = Config::default();
        config.service.auth.nonce_secret = "integration-secret-integration-secret".to_string();
        config.service.auth.actors = vec![
            ActorConfig {
                name: "editor".to_string(),
                api_key: EDITOR_KEY.to_string(),
                capabilities: vec![Capability::ManageOptions, Capability::DeletePosts],
            },
            ActorConfig {
                name: "viewer".to_string(),
                api_key: VIEWER_KEY.to_string(),
                capabilities: vec![Capability::ManageOptions],
            },
        ];
        config.service.store.home_url = HOME_URL.to_string();
        config
    }

    /// Base config with a small site: `/a` (10), `/locked` (11, protected)
    /// and the records from [`RecordFactory::many`]
    pub fn with_site(extra: usize) -> Config {
        let mut config = Self::base();
        config.service.store.records = vec![
            RecordFactory::published(10, "/a"),
            RecordFactory::protected(11, "/locked"),
        ];
        config.service.store.records.extend(RecordFactory::many(extra));
        config
    }
}

/// `count` URLs, one per line
pub fn url_lines(urls: &[String]) -> String {
    urls.join("\n")
}
