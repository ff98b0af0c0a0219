//! Stylised semidiurnal tide approximation
//!
//! This is not a harmonic tide model. It produces a cosine curve with a
//! 12.42 h period driven by the local time of day, centred on a 0.5 m mean
//! level, whose 0.4 m amplitude is scaled by the spring/neap state of the
//! moon. Good enough to tell "high water" from "low water" when scoring
//! flood risk; not suitable for navigation.

use std::f64::consts::TAU;

use chrono::{DateTime, TimeZone, Timelike};

use crate::moon::moon_phase;

/// Half a lunar day, in hours
pub const TIDAL_PERIOD_HOURS: f64 = 12.42;

/// Mean sea level in meters
pub const MEAN_LEVEL_M: f64 = 0.5;

/// Base amplitude in meters, before the spring/neap multiplier
pub const BASE_AMPLITUDE_M: f64 = 0.4;

/// Approximates the tide height in meters at an instant.
///
/// The curve phase comes from the wall-clock time in `at`'s own timezone,
/// so pass a time expressed in the bay's local offset. The amplitude comes
/// from the moon phase at the same instant.
pub fn approximate_tide<Tz: TimeZone>(at: &DateTime<Tz>) -> f64 {
    let hours = at.hour() as f64 + at.minute() as f64 / 60.0;
    let phase_angle = (hours % TIDAL_PERIOD_HOURS) / TIDAL_PERIOD_HOURS * TAU;
    let amplitude = moon_phase(at).tidal_effect.amplitude_multiplier();

    MEAN_LEVEL_M + BASE_AMPLITUDE_M * amplitude * phase_angle.cos()
}
