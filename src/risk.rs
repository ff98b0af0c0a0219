//! Flood-risk scoring for a single beach
//!
//! Combines swell (height, period and direction against the beach's
//! exposure profile), tide height and the spring/neap state of the moon
//! into a 0-100 score and one of four risk levels.

use serde::Serialize;

use crate::data::{Beach, SwellObservation};
use crate::moon::TidalEffect;

/// Exposure multiplier for swell outside both named sectors
const OTHER_SECTOR_MULTIPLIER: f64 = 0.1;

/// Secondary swell below this height is ignored
const SECONDARY_MIN_HEIGHT_M: f64 = 0.3;

/// Weight of the secondary swell relative to the primary one
const SECONDARY_WEIGHT: f64 = 0.5;

/// Compass sector a swell arrives from, as far as beach exposure is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwellSector {
    /// 270°-330°, winter swell from North Pacific storms
    NorthWest,
    /// 150°-240°, summer swell from southern hemisphere and tropical storms
    SouthWest,
    /// Anything else; reaches the bay with little energy
    Other,
}

impl SwellSector {
    pub fn classify(direction: f64) -> Self {
        if (270.0..=330.0).contains(&direction) {
            SwellSector::NorthWest
        } else if (150.0..=240.0).contains(&direction) {
            SwellSector::SouthWest
        } else {
            SwellSector::Other
        }
    }

    /// Exposure multiplier of `beach` to swell from this sector
    pub fn exposure_multiplier(self, beach: &Beach) -> f64 {
        match self {
            SwellSector::NorthWest => beach.exposure_nw.multiplier(),
            SwellSector::SouthWest => beach.exposure_sw.multiplier(),
            SwellSector::Other => OTHER_SECTOR_MULTIPLIER,
        }
    }
}

/// Flood risk levels, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RiskLevel {
    #[serde(rename = "BAJO")]
    Bajo,
    #[serde(rename = "MODERADO")]
    Moderado,
    #[serde(rename = "ALTO")]
    Alto,
    #[serde(rename = "CRÍTICO")]
    Critico,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => RiskLevel::Critico,
            50..=69 => RiskLevel::Alto,
            30..=49 => RiskLevel::Moderado,
            _ => RiskLevel::Bajo,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Bajo => "BAJO",
            RiskLevel::Moderado => "MODERADO",
            RiskLevel::Alto => "ALTO",
            RiskLevel::Critico => "CRÍTICO",
        }
    }

    /// Hex colour used by dashboards
    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Bajo => "#22C55E",
            RiskLevel::Moderado => "#EAB308",
            RiskLevel::Alto => "#F97316",
            RiskLevel::Critico => "#DC2626",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            RiskLevel::Bajo => "🟢",
            RiskLevel::Moderado => "🟡",
            RiskLevel::Alto => "🟠",
            RiskLevel::Critico => "🔴",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskLevel::Bajo => "Condiciones normales.",
            RiskLevel::Moderado => "Oleaje moderado. Atención en pleamar.",
            RiskLevel::Alto => "Oleaje fuerte. Precaución en playas expuestas.",
            RiskLevel::Critico => "Riesgo de inundación. Evitar zona costera.",
        }
    }
}

/// Result of scoring one beach at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskResult {
    pub level: RiskLevel,
    pub color: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    /// Score in 0-100
    pub score: u8,
}

impl RiskResult {
    pub fn from_score(score: u8) -> Self {
        let score = score.min(100);
        let level = RiskLevel::from_score(score);
        Self {
            level,
            color: level.color(),
            emoji: level.emoji(),
            description: level.description(),
            score,
        }
    }
}

/// Height contribution, 0-40 points
fn height_points(height: f64) -> f64 {
    if height >= 2.0 {
        40.0
    } else if height >= 1.5 {
        30.0
    } else if height >= 1.0 {
        20.0
    } else if height >= 0.5 {
        10.0
    } else {
        0.0
    }
}

/// Period contribution, 0-25 points. Longer period carries more energy.
fn period_points(period: f64) -> f64 {
    if period >= 16.0 {
        25.0
    } else if period >= 14.0 {
        20.0
    } else if period >= 12.0 {
        12.0
    } else if period >= 10.0 {
        5.0
    } else {
        0.0
    }
}

/// Tide contribution, 0-20 points
fn tide_points(tide_height: f64) -> f64 {
    if tide_height >= 0.8 {
        20.0
    } else if tide_height >= 0.7 {
        15.0
    } else if tide_height >= 0.6 {
        10.0
    } else if tide_height >= 0.4 {
        5.0
    } else {
        0.0
    }
}

/// Sub-score of one swell train against one beach, before weighting
pub fn swell_score(beach: &Beach, swell: &SwellObservation) -> f64 {
    let exposure = SwellSector::classify(swell.direction).exposure_multiplier(beach);
    (height_points(swell.height) + period_points(swell.period)) * exposure
}

/// Scores the flood risk of `beach` for the given conditions.
///
/// A secondary swell only counts when it is taller than 0.3 m, and then at
/// half weight. The tidal effect scales the combined swell and tide total.
pub fn calculate_risk(
    beach: &Beach,
    swell: &SwellObservation,
    tide_height: f64,
    tidal_effect: TidalEffect,
    secondary_swell: Option<&SwellObservation>,
) -> RiskResult {
    let mut total = swell_score(beach, swell);

    if let Some(secondary) = secondary_swell {
        if secondary.height > SECONDARY_MIN_HEIGHT_M {
            total += swell_score(beach, secondary) * SECONDARY_WEIGHT;
        }
    }

    total += tide_points(tide_height);
    total *= tidal_effect.risk_multiplier();

    let score = total.round().clamp(0.0, 100.0) as u8;
    RiskResult::from_score(score)
}

/// Compass label shown next to a swell direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DirectionLabel {
    N,
    NW,
    SW,
    SE,
    E,
    S,
    W,
}

impl DirectionLabel {
    /// Label for a direction in degrees.
    ///
    /// Ranges overlap, so they are checked in order NW, SW, N, SE and the
    /// first match wins; anything left falls back to a four-quadrant label.
    pub fn from_direction(direction: f64) -> Self {
        if (270.0..=330.0).contains(&direction) {
            DirectionLabel::NW
        } else if (150.0..=240.0).contains(&direction) {
            DirectionLabel::SW
        } else if direction >= 330.0 || direction <= 30.0 {
            DirectionLabel::N
        } else if (60.0..=150.0).contains(&direction) {
            DirectionLabel::SE
        } else {
            Self::quadrant(direction)
        }
    }

    fn quadrant(direction: f64) -> Self {
        if direction >= 315.0 || direction < 45.0 {
            DirectionLabel::N
        } else if direction < 135.0 {
            DirectionLabel::E
        } else if direction < 225.0 {
            DirectionLabel::S
        } else {
            DirectionLabel::W
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DirectionLabel::N => "N",
            DirectionLabel::NW => "NW",
            DirectionLabel::SW => "SW",
            DirectionLabel::SE => "SE",
            DirectionLabel::E => "E",
            DirectionLabel::S => "S",
            DirectionLabel::W => "W",
        }
    }
}
