//! Forecast service: provider fetch, caching and aggregation
//!
//! Ties the marine client, the disk cache and the aggregator together. The
//! fetched series is memoised for one hour; the report is rebuilt on every
//! call so the current hour follows the clock.

use chrono::{DateTime, Duration, Utc};
use log::{debug, info, warn};
use thiserror::Error;

use crate::cache::{CacheManager, ResponseCache};
use crate::data::marine::BAY_TIMEZONE;
use crate::data::{MarineClient, MarineError, MarineSeries};
use crate::forecast::{ForecastAggregator, ForecastError, ForecastReport};

/// Cache key for the raw marine series in the bay timezone
const MARINE_CACHE_KEY: &str = "marine_banderas";

/// How long a fetched series stays fresh, on disk and in memory
pub fn cache_ttl() -> Duration {
    Duration::hours(1)
}

/// Errors from producing a report
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to fetch marine forecast: {0}")]
    Marine(#[from] MarineError),

    #[error("Failed to build forecast: {0}")]
    Forecast(#[from] ForecastError),
}

/// Produces flood-risk reports, fetching and caching provider data as needed
#[derive(Debug)]
pub struct ForecastService {
    client: MarineClient,
    cache: Option<CacheManager>,
    aggregator: ForecastAggregator,
    series: ResponseCache<MarineSeries>,
}

impl ForecastService {
    /// Creates a service. Pass `None` as `cache` to skip the disk cache.
    pub fn new(client: MarineClient, cache: Option<CacheManager>, aggregator: ForecastAggregator) -> Self {
        Self {
            client,
            cache,
            aggregator,
            series: ResponseCache::new(cache_ttl()),
        }
    }

    /// Builds the report for `now`, reusing the last fetched series while
    /// it is fresh.
    pub async fn report(&mut self, now: DateTime<Utc>) -> Result<ForecastReport, ServiceError> {
        let series = match self.series.get(now) {
            Some(series) => {
                if let Some(expires_at) = self.series.expires_at() {
                    debug!("Reusing marine series until {}", expires_at);
                }
                series
            }
            None => {
                let fetched = self.fetch_series().await?;
                self.series.put(fetched, now)
            }
        };

        Ok(self.aggregator.aggregate(&series, now)?)
    }

    /// Disk cache key; series stamped in other timezones are kept apart
    fn cache_key(&self) -> String {
        match self.client.timezone() {
            BAY_TIMEZONE => MARINE_CACHE_KEY.to_string(),
            other => format!("{}_{}", MARINE_CACHE_KEY, other.replace(['/', '+'], "_")),
        }
    }

    /// Gets the marine series from a fresh cache entry or the provider,
    /// falling back to a stale cache entry if the provider fails.
    pub async fn fetch_series(&self) -> Result<MarineSeries, ServiceError> {
        let key = self.cache_key();
        if let Some(ref cache) = self.cache {
            if let Some(cached) = cache.read::<MarineSeries>(&key) {
                if !cached.is_expired {
                    debug!("Using cached marine series from {}", cached.cached_at);
                    return Ok(cached.data);
                }
            }
        }

        match self.client.fetch_marine().await {
            Ok(series) => {
                if let Some(ref cache) = self.cache {
                    if let Err(e) = cache.write(&key, &series, cache_ttl()) {
                        warn!("Failed to cache marine series: {}", e);
                    }
                }
                Ok(series)
            }
            Err(e) => {
                if let Some(ref cache) = self.cache {
                    if let Some(cached) = cache.read::<MarineSeries>(&key) {
                        info!(
                            "Provider unavailable ({}), using stale series from {}",
                            e, cached.cached_at
                        );
                        return Ok(cached.data);
                    }
                }
                Err(e.into())
            }
        }
    }
}
