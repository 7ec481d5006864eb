//! Anti-forgery tokens
//!
//! A token is an HMAC-SHA256 over the time bucket (tick), the action name and
//! the actor it was issued to. Ticks are half a lifetime long and the previous
//! tick is still accepted, so a token stays valid for between half and a full
//! lifetime.

use crate::utils::error::{Result, TrashError};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::Duration;

type HmacSha256 = Hmac<Sha256>;

/// Outcome of a token check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceVerdict {
    /// Issued during the current tick
    Fresh,
    /// Issued during the previous tick
    Aging,
    /// Not a token for this actor and action, or expired
    Invalid,
}

impl NonceVerdict {
    pub fn is_valid(self) -> bool {
        !matches!(self, NonceVerdict::Invalid)
    }
}

/// Issues and verifies anti-forgery tokens
#[derive(Clone)]
pub struct NonceManager {
    secret: String,
    lifetime: Duration,
}

impl std::fmt::Debug for NonceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NonceManager")
            .field("secret", &"[REDACTED]")
            .field("lifetime", &self.lifetime)
            .finish()
    }
}

impl NonceManager {
    /// Create a manager. The lifetime is clamped to at least two seconds so a
    /// tick is never zero.
    pub fn new(secret: impl Into<String>, lifetime: Duration) -> Self {
        Self {
            secret: secret.into(),
            lifetime: lifetime.max(Duration::from_secs(2)),
        }
    }

    /// Issue a token for `actor` performing `action`
    pub fn create(&self, action: &str, actor: &str) -> Result<String> {
        self.create_at(action, actor, unix_now())
    }

    /// Verify a token for `actor` performing `action`
    pub fn verify(&self, token: &str, action: &str, actor: &str) -> Result<NonceVerdict> {
        self.verify_at(token, action, actor, unix_now())
    }

    pub(crate) fn create_at(&self, action: &str, actor: &str, now: u64) -> Result<String> {
        self.sign(self.tick(now), action, actor)
    }

    pub(crate) fn verify_at(
        &self,
        token: &str,
        action: &str,
        actor: &str,
        now: u64,
    ) -> Result<NonceVerdict> {
        if token.is_empty() {
            return Ok(NonceVerdict::Invalid);
        }

        let tick = self.tick(now);
        if constant_time_eq(&self.sign(tick, action, actor)?, token) {
            return Ok(NonceVerdict::Fresh);
        }
        if constant_time_eq(&self.sign(tick.saturating_sub(1), action, actor)?, token) {
            return Ok(NonceVerdict::Aging);
        }

        Ok(NonceVerdict::Invalid)
    }

    fn tick(&self, now: u64) -> u64 {
        let half = (self.lifetime.as_secs() / 2).max(1);
        now.div_ceil(half)
    }

    fn sign(&self, tick: u64, action: &str, actor: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| TrashError::crypto(format!("Invalid HMAC key: {}", e)))?;

        mac.update(format!("{}|{}|{}", tick, action, actor).as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

fn unix_now() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}

/// Constant-time string comparison
pub(crate) fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (a_byte, b_byte) in a.bytes().zip(b.bytes()) {
        result |= a_byte ^ b_byte;
    }

    result == 0
}
