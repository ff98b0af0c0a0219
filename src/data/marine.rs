//! Open-Meteo Marine API client
//!
//! This module fetches the hourly wave and swell forecast for the centre of
//! the bay and parses it into a [`MarineSeries`].

use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::beach::BAY_CENTER;
use super::MarineSeries;

/// Base URL for the Open-Meteo Marine API
const OPEN_METEO_MARINE_URL: &str = "https://marine-api.open-meteo.com/v1/marine";

/// Timezone the provider reports local times in
pub const BAY_TIMEZONE: &str = "America/Mexico_City";

/// Hours from UTC that [`BAY_TIMEZONE`] keeps all year
pub const BAY_UTC_OFFSET_HOURS: i32 = -6;

/// Forecast horizon requested from the provider
pub const FORECAST_DAYS: u8 = 7;

/// Hourly variables requested from the provider
const HOURLY_VARIABLES: &[&str] = &[
    "wave_height",
    "wave_direction",
    "wave_period",
    "swell_wave_height",
    "swell_wave_direction",
    "swell_wave_period",
    "secondary_swell_wave_height",
    "secondary_swell_wave_direction",
    "secondary_swell_wave_period",
];

/// Errors that can occur when fetching marine data
#[derive(Debug, Error)]
pub enum MarineError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Open-Meteo error: {0}")]
    HttpStatus(u16),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing expected field in response
    #[error("Missing expected field in response: {0}")]
    MissingField(String),
}

/// Provider timezone name whose local stamps match a fixed offset in hours.
///
/// The bay's own offset maps to its named zone; anything else maps to an
/// `Etc/GMT` zone, whose sign is inverted (UTC-7 is `Etc/GMT+7`).
pub fn timezone_for_offset(hours: i32) -> String {
    match hours {
        BAY_UTC_OFFSET_HOURS => BAY_TIMEZONE.to_string(),
        0 => "UTC".to_string(),
        _ => format!("Etc/GMT{:+}", -hours),
    }
}

/// Top-level marine API response
#[derive(Debug, Deserialize)]
struct OpenMeteoMarineResponse {
    hourly: Option<MarineSeries>,
}

/// Client for fetching marine forecasts from Open-Meteo
#[derive(Debug, Clone)]
pub struct MarineClient {
    client: Client,
    base_url: String,
    timezone: String,
    latitude: f64,
    longitude: f64,
}

impl Default for MarineClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MarineClient {
    /// Create a new MarineClient for the bay centre
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Create a new MarineClient with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        let (latitude, longitude) = BAY_CENTER;
        Self {
            client,
            base_url: OPEN_METEO_MARINE_URL.to_string(),
            timezone: BAY_TIMEZONE.to_string(),
            latitude,
            longitude,
        }
    }

    /// Point the client at a different API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create a new MarineClient with a custom timezone
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Timezone the provider is asked to stamp hours in
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Builds the request URL for the configured location
    pub(crate) fn request_url(&self) -> String {
        format!(
            "{}?latitude={}&longitude={}&hourly={}&forecast_days={}&timezone={}",
            self.base_url,
            self.latitude,
            self.longitude,
            HOURLY_VARIABLES.join(","),
            FORECAST_DAYS,
            self.timezone.replace('+', "%2B")
        )
    }

    /// Fetch the hourly marine series
    ///
    /// # Returns
    /// * `Ok(MarineSeries)` - Hourly wave and swell arrays
    /// * `Err(MarineError)` - If the request, status or parsing fails
    pub async fn fetch_marine(&self) -> Result<MarineSeries, MarineError> {
        let url = self.request_url();
        debug!("Fetching marine forecast: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarineError::HttpStatus(status.as_u16()));
        }

        let text = response.text().await?;
        let series = parse_response(&text)?;
        info!("Fetched {} hourly marine records", series.time.len());
        Ok(series)
    }
}

/// Parse an Open-Meteo marine response body into a MarineSeries
pub fn parse_response(body: &str) -> Result<MarineSeries, MarineError> {
    let response: OpenMeteoMarineResponse = serde_json::from_str(body)?;
    response
        .hourly
        .ok_or_else(|| MarineError::MissingField("hourly".to_string()))
}
