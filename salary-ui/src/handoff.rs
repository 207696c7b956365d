//! Short-lived storage for results on their way to the results view.
//!
//! Each payload is parked under a one-time [`HandoffToken`]. Taking it
//! removes it, and entries older than the store's TTL count as absent.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

use crate::models::HandoffPayload;

/// How long a payload waits to be displayed.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandoffToken(Uuid);

impl HandoffToken {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for HandoffToken {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug)]
struct Entry {
    stored_at: Instant,
    payload: HandoffPayload,
}

#[derive(Debug)]
pub struct HandoffStore {
    entries: HashMap<HandoffToken, Entry>,
    ttl: Duration,
}

impl HandoffStore {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn put(
        &mut self,
        payload: HandoffPayload,
    ) -> HandoffToken {
        self.purge_expired();
        let token = HandoffToken::generate();
        self.entries.insert(
            token,
            Entry {
                stored_at: Instant::now(),
                payload,
            },
        );
        token
    }

    /// Removes and returns the payload. `None` if it was never stored,
    /// was already taken, or has expired.
    pub fn take(
        &mut self,
        token: HandoffToken,
    ) -> Option<HandoffPayload> {
        self.purge_expired();
        self.entries.remove(&token).map(|entry| entry.payload)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn purge_expired(&mut self) {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.stored_at.elapsed() < ttl);
        let purged = before - self.entries.len();
        if purged > 0 {
            debug!(purged, "expired handoff payloads dropped");
        }
    }
}

impl Default for HandoffStore {
    fn default() -> Self {
        Self::new()
    }
}
