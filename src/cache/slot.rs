//! Single-slot in-memory cache with a fixed time-to-live

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

/// Holds at most one value together with the instant it stops being fresh.
///
/// Values are stored behind an `Arc` so readers can keep a value while the
/// slot is refilled.
#[derive(Debug)]
pub struct ResponseCache<T> {
    ttl: Duration,
    slot: Option<(Arc<T>, DateTime<Utc>)>,
}

impl<T> ResponseCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: None }
    }

    /// Returns the stored value if it is still fresh at `now`.
    pub fn get(&self, now: DateTime<Utc>) -> Option<Arc<T>> {
        match &self.slot {
            Some((value, expires_at)) if now < *expires_at => Some(Arc::clone(value)),
            _ => None,
        }
    }

    /// Stores `value`, fresh until `now + ttl`, replacing any previous value.
    pub fn put(&mut self, value: T, now: DateTime<Utc>) -> Arc<T> {
        let value = Arc::new(value);
        self.slot = Some((Arc::clone(&value), now + self.ttl));
        value
    }

    /// Expiry of the stored value, if any
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.slot.as_ref().map(|(_, expires_at)| *expires_at)
    }
}
