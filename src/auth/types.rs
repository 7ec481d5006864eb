//! Actor and capability types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Something an actor is allowed to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// May open the admin page
    ManageOptions,
    /// May move content records to trash
    DeletePosts,
}

/// The operator a request is made on behalf of
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    name: String,
    capabilities: BTreeSet<Capability>,
}

impl Actor {
    pub fn new(name: impl Into<String>, capabilities: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            name: name.into(),
            capabilities: capabilities.into_iter().collect(),
        }
    }

    /// An unauthenticated request
    pub fn anonymous() -> Self {
        Self::new("", [])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}
