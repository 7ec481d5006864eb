//! Custom test assertions
//!
//! Provides domain-specific assertions for reply envelopes.

use trash_by_url::AjaxEnvelope;

/// Assertions for AjaxEnvelope
pub trait EnvelopeAssertions {
    /// Assert a success envelope carrying exactly `expected`
    fn assert_messages(&self, expected: &[&str]);

    /// Assert an error envelope whose first entry is `expected`
    fn assert_error(&self, expected: &str);
}

impl EnvelopeAssertions for AjaxEnvelope {
    fn assert_messages(&self, expected: &[&str]) {
        assert!(self.success, "Expected success envelope, got {:?}", self);
        let messages = self
            .messages()
            .unwrap_or_else(|| panic!("Expected data.messages in {:?}", self));
        assert_eq!(messages, expected);
    }

    fn assert_error(&self, expected: &str) {
        assert!(!self.success, "Expected error envelope, got {:?}", self);
        assert_eq!(self.error_message().as_deref(), Some(expected));
    }
}
