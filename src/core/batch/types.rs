//! Batch processing types and the AJAX wire envelope

use crate::core::store::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message returned when the actor may not trash records or the token is bad
pub const NOT_ALLOWED_MESSAGE: &str = "You are not allowed to delete posts.";
/// Message returned when the `urls` field is not a JSON list
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input.";

/// One batch as received by the endpoint
#[derive(Debug, Clone, Copy)]
pub struct BatchRequest<'a> {
    /// Who is asking
    pub actor: &'a crate::auth::Actor,
    /// Whether the anti-forgery token checked out
    pub nonce_verified: bool,
    /// Raw `urls` form field, a JSON array of strings
    pub urls: Option<&'a str>,
}

/// Result for a single URL of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlOutcome {
    /// Record found and moved to trash
    Trashed(RecordId),
    /// URL does not map to a record
    NotFound(String),
    /// Record found (or lookup faulted) but it was not trashed
    DeleteFailed(String),
}

impl UrlOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UrlOutcome::Trashed(_))
    }
}

impl fmt::Display for UrlOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlOutcome::Trashed(id) => write!(f, "✅ Post ID {} moved to trash.", id),
            UrlOutcome::NotFound(url) => write!(f, "❌ No post found for URL \"{}\".", url),
            UrlOutcome::DeleteFailed(url) => {
                write!(f, "❌ Failed to delete post for URL \"{}\".", url)
            }
        }
    }
}

/// Why a whole batch was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchRejection {
    NotAllowed,
    InvalidInput,
}

impl BatchRejection {
    pub fn message(self) -> &'static str {
        match self {
            BatchRejection::NotAllowed => NOT_ALLOWED_MESSAGE,
            BatchRejection::InvalidInput => INVALID_INPUT_MESSAGE,
        }
    }
}

/// What the processor made of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every non-empty URL has an outcome, in input order
    Completed(Vec<UrlOutcome>),
    /// Nothing was touched
    Rejected(BatchRejection),
}

impl BatchOutcome {
    /// Human-readable messages, one per processed URL, or the single
    /// rejection message
    pub fn messages(&self) -> Vec<String> {
        match self {
            BatchOutcome::Completed(outcomes) => outcomes.iter().map(|o| o.to_string()).collect(),
            BatchOutcome::Rejected(rejection) => vec![rejection.message().to_string()],
        }
    }

    pub fn into_envelope(self) -> AjaxEnvelope {
        match &self {
            BatchOutcome::Completed(_) => AjaxEnvelope::success(MessagesData {
                messages: self.messages(),
            }),
            BatchOutcome::Rejected(rejection) => AjaxEnvelope::error(rejection.message()),
        }
    }
}

/// Success payload of the batch action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesData {
    pub messages: Vec<String>,
}

/// JSON envelope of every AJAX reply: `{"success": bool, "data": ...}`.
///
/// On failure `data` is a one-element array holding the explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AjaxEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl AjaxEnvelope {
    pub fn success<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            data: serde_json::to_value(data).unwrap_or(serde_json::Value::Null),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: serde_json::Value::Array(vec![serde_json::Value::String(message.into())]),
        }
    }

    /// The `data.messages` list of a success reply
    pub fn messages(&self) -> Option<Vec<String>> {
        if !self.success {
            return None;
        }
        serde_json::from_value::<MessagesData>(self.data.clone())
            .ok()
            .map(|d| d.messages)
    }

    /// The explanation carried by an error reply
    pub fn error_message(&self) -> Option<String> {
        if self.success {
            return None;
        }
        match &self.data {
            serde_json::Value::Array(items) => items.iter().find_map(|v| v.as_str().map(String::from)),
            serde_json::Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}
