//! Caching for provider responses and computed reports
//!
//! Two layers:
//! - [`CacheManager`] persists raw marine series to disk as JSON with an
//!   expiry timestamp. Expired entries are still returned, flagged with
//!   `is_expired`, so a stale forecast can stand in when the provider is down.
//! - [`ResponseCache`] is a single in-memory slot with a fixed time-to-live,
//!   used to memoise the last fetched marine series.

mod manager;
mod slot;

pub use manager::{CacheManager, CachedData};
pub use slot::ResponseCache;
