//! Core data models for the Banderas Bay flood-risk CLI
//!
//! This module contains the data types shared by the provider client, the
//! risk calculator and the forecast aggregator: beaches and their exposure
//! profiles, swell observations, the raw hourly marine series and the derived
//! per-hour forecast records.

pub mod beach;
pub mod marine;

pub use beach::{all_beaches, find_beach, get_beach_by_id, BEACHES};
pub use marine::{timezone_for_offset, MarineClient, MarineError};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Sensitivity of a beach to swell arriving from a given compass sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exposure {
    #[serde(rename = "MUY ALTA")]
    MuyAlta,
    #[serde(rename = "ALTA")]
    Alta,
    #[serde(rename = "MEDIA")]
    Media,
    #[serde(rename = "BAJA")]
    Baja,
}

impl Exposure {
    /// Multiplier applied to a swell sub-score when the swell comes from
    /// the sector this rating describes.
    pub fn multiplier(self) -> f64 {
        match self {
            Exposure::MuyAlta => 1.0,
            Exposure::Alta => 0.8,
            Exposure::Media => 0.5,
            Exposure::Baja => 0.2,
        }
    }

    /// Returns the display label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Exposure::MuyAlta => "MUY ALTA",
            Exposure::Alta => "ALTA",
            Exposure::Media => "MEDIA",
            Exposure::Baja => "BAJA",
        }
    }
}

/// Area of the bay a beach belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Zone {
    Sur,
    Centro,
    Norte,
}

impl Zone {
    pub fn label(self) -> &'static str {
        match self {
            Zone::Sur => "SUR",
            Zone::Centro => "CENTRO",
            Zone::Norte => "NORTE",
        }
    }
}

/// Represents a beach in the bay together with its exposure profile
///
/// Uses `&'static str` for string fields so the registry can be a static
/// array. Only implements `Serialize`; look beaches up by id with
/// `get_beach_by_id` instead of deserializing them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Beach {
    /// Unique identifier for the beach
    pub id: &'static str,
    /// Human-readable name of the beach
    pub name: &'static str,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
    /// Exposure to NW/W swell (270°-330°)
    pub exposure_nw: Exposure,
    /// Exposure to S/SW swell (150°-240°)
    pub exposure_sw: Exposure,
    /// Season in which the beach is usually hit, free text
    pub risk_season: &'static str,
    /// Area of the bay
    pub zone: Zone,
}

/// One wave train at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwellObservation {
    /// Significant height in meters
    pub height: f64,
    /// Direction the swell comes from, in degrees (0=N, 90=E, 180=S, 270=W)
    pub direction: f64,
    /// Peak period in seconds
    pub period: f64,
}

impl SwellObservation {
    /// Creates an observation, clamping height and period to be non-negative
    /// and wrapping the direction into [0, 360).
    pub fn sanitized(height: f64, direction: f64, period: f64) -> Self {
        let mut direction = direction.rem_euclid(360.0);
        if direction >= 360.0 {
            direction = 0.0;
        }
        Self {
            height: height.max(0.0),
            direction,
            period: period.max(0.0),
        }
    }
}

/// Raw hourly marine series as returned by the provider
///
/// Parallel arrays indexed by hour. Every variable is optional and any
/// element may be `null`; missing values are resolved when the series is
/// turned into [`ForecastHour`] records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarineSeries {
    /// Local time stamps in the bay timezone, e.g. "2024-07-15T05:00"
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub wave_height: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub wave_direction: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub wave_period: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub swell_wave_height: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub swell_wave_direction: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub swell_wave_period: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub secondary_swell_wave_height: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub secondary_swell_wave_direction: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub secondary_swell_wave_period: Option<Vec<Option<f64>>>,
}

/// Returns the value at `index` if the variable is present and not null.
pub fn value_at(values: &Option<Vec<Option<f64>>>, index: usize) -> Option<f64> {
    values.as_ref()?.get(index).copied().flatten()
}

/// Derived conditions for one hour of the forecast horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastHour {
    /// Local time in the bay timezone
    pub time: NaiveDateTime,
    /// Dominant swell (swell fields, falling back to combined-wave fields)
    pub swell: SwellObservation,
    /// Cross swell, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_swell: Option<SwellObservation>,
    /// Combined significant wave height in meters
    pub wave_height: f64,
    /// Approximate tide height in meters
    pub tide_height: f64,
}
