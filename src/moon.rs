//! Moon phase and tidal-effect classification
//!
//! A mean-synodic-month approximation anchored on a known new moon. It is
//! accurate to a few hours, which is plenty for classifying spring and neap
//! tides.

use std::f64::consts::TAU;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// Mean length of the synodic month in days
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_587_705_76;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Reference new moon: 2000-01-06 18:14 UTC
fn reference_new_moon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Spring/neap classification of the tide for a given moon phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TidalEffect {
    /// Near new or full moon: larger tidal range
    Spring,
    /// Near the quarters: smaller tidal range
    Neap,
    Normal,
}

impl TidalEffect {
    /// Classifies a phase fraction in [0, 1).
    ///
    /// The 0.07 / 0.43 / 0.57 / 0.93 bounds are roughly two days either side
    /// of new and full moon; 0.18-0.32 and 0.68-0.82 surround the quarters.
    pub fn from_phase(phase: f64) -> Self {
        if phase < 0.07 || phase > 0.93 || (phase > 0.43 && phase < 0.57) {
            TidalEffect::Spring
        } else if (phase > 0.18 && phase < 0.32) || (phase > 0.68 && phase < 0.82) {
            TidalEffect::Neap
        } else {
            TidalEffect::Normal
        }
    }

    /// Scaling of the semidiurnal tide amplitude
    pub fn amplitude_multiplier(self) -> f64 {
        match self {
            TidalEffect::Spring => 1.3,
            TidalEffect::Neap => 0.7,
            TidalEffect::Normal => 1.0,
        }
    }

    /// Scaling applied to a flood-risk total
    pub fn risk_multiplier(self) -> f64 {
        match self {
            TidalEffect::Spring => 1.15,
            TidalEffect::Neap => 0.85,
            TidalEffect::Normal => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TidalEffect::Spring => "Mareas vivas",
            TidalEffect::Neap => "Mareas muertas",
            TidalEffect::Normal => "Normal",
        }
    }
}

/// The eight named phases of the moon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PhaseName {
    #[serde(rename = "Luna Nueva")]
    NewMoon,
    #[serde(rename = "Creciente")]
    WaxingCrescent,
    #[serde(rename = "Cuarto Creciente")]
    FirstQuarter,
    #[serde(rename = "Gibosa Creciente")]
    WaxingGibbous,
    #[serde(rename = "Luna Llena")]
    FullMoon,
    #[serde(rename = "Gibosa Menguante")]
    WaningGibbous,
    #[serde(rename = "Cuarto Menguante")]
    LastQuarter,
    #[serde(rename = "Menguante")]
    WaningCrescent,
}

impl PhaseName {
    /// Bins a phase fraction into one of eight names, each 1/8 turn wide and
    /// centred on a multiple of 1/8.
    pub fn from_phase(phase: f64) -> Self {
        if phase < 0.0625 {
            PhaseName::NewMoon
        } else if phase < 0.1875 {
            PhaseName::WaxingCrescent
        } else if phase < 0.3125 {
            PhaseName::FirstQuarter
        } else if phase < 0.4375 {
            PhaseName::WaxingGibbous
        } else if phase < 0.5625 {
            PhaseName::FullMoon
        } else if phase < 0.6875 {
            PhaseName::WaningGibbous
        } else if phase < 0.8125 {
            PhaseName::LastQuarter
        } else if phase < 0.9375 {
            PhaseName::WaningCrescent
        } else {
            PhaseName::NewMoon
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PhaseName::NewMoon => "Luna Nueva",
            PhaseName::WaxingCrescent => "Creciente",
            PhaseName::FirstQuarter => "Cuarto Creciente",
            PhaseName::WaxingGibbous => "Gibosa Creciente",
            PhaseName::FullMoon => "Luna Llena",
            PhaseName::WaningGibbous => "Gibosa Menguante",
            PhaseName::LastQuarter => "Cuarto Menguante",
            PhaseName::WaningCrescent => "Menguante",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            PhaseName::NewMoon => "🌑",
            PhaseName::WaxingCrescent => "🌒",
            PhaseName::FirstQuarter => "🌓",
            PhaseName::WaxingGibbous => "🌔",
            PhaseName::FullMoon => "🌕",
            PhaseName::WaningGibbous => "🌖",
            PhaseName::LastQuarter => "🌗",
            PhaseName::WaningCrescent => "🌘",
        }
    }
}

/// Moon phase information for one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPhaseInfo {
    /// Fraction of the synodic month in [0, 1): 0 = new, 0.5 = full
    pub phase: f64,
    pub name: PhaseName,
    pub emoji: &'static str,
    /// Illuminated fraction of the disc, in percent
    pub illumination: u8,
    pub tidal_effect: TidalEffect,
}

/// Computes the moon phase for an instant in any timezone.
pub fn moon_phase<Tz: TimeZone>(at: &DateTime<Tz>) -> MoonPhaseInfo {
    let elapsed = at.with_timezone(&Utc) - reference_new_moon();
    let diff_days = elapsed.num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY;

    let mut phase = diff_days.rem_euclid(SYNODIC_MONTH_DAYS) / SYNODIC_MONTH_DAYS;
    // rem_euclid can round up to the modulus for tiny negative inputs
    if phase >= 1.0 {
        phase = 0.0;
    }

    let illumination = ((1.0 - (phase * TAU).cos()) / 2.0 * 100.0).round() as u8;
    let name = PhaseName::from_phase(phase);

    MoonPhaseInfo {
        phase,
        name,
        emoji: name.emoji(),
        illumination,
        tidal_effect: TidalEffect::from_phase(phase),
    }
}
