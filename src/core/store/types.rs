//! Content record types

use serde::{Deserialize, Serialize};

/// Identifier of a content record
pub type RecordId = u64;

/// Publication status of a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    #[default]
    Publish,
    Draft,
    Trash,
}

/// A content record as seeded into the in-memory store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    /// Permalink path relative to the site home, e.g. `/2024/05/hello-world/`
    pub path: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: RecordStatus,
    /// Protected records refuse to be trashed
    #[serde(default)]
    pub protected: bool,
}
