//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

use crate::cache::NEVER_EXPIRE;

// == Cache Entry ==
/// Represents a single cache entry with value and expiration.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Expiration instant, None = no expiration
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry. A `NEVER_EXPIRE` ttl yields an entry
    /// that never expires.
    pub fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: deadline(Instant::now(), ttl),
        }
    }

    // == Rearm ==
    /// Moves the expiration to `now + ttl`, keeping the value.
    pub fn rearm(&mut self, ttl: Duration) {
        self.expires_at = deadline(Instant::now(), ttl);
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Checks expiry against a given instant.
    ///
    /// Boundary condition: an entry is expired once `now >= expires_at`.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns remaining TTL, or None if no expiration is set.
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|expires| expires.saturating_duration_since(Instant::now()))
    }
}

fn deadline(now: Instant, ttl: Duration) -> Option<Instant> {
    if ttl == NEVER_EXPIRE {
        None
    } else {
        // Overflowing deadlines are far enough out to be treated as "never".
        now.checked_add(ttl)
    }
}
