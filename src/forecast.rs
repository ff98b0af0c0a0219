//! Hourly and daily flood-risk aggregation
//!
//! Turns a raw hourly marine series into per-hour forecast records, finds
//! the current hour, scores every beach for current conditions, and rolls
//! the horizon up into a 48-hour timeline and a 7-day summary.
//!
//! Everything here is a pure function of its inputs; the provider fetch and
//! caching live in [`crate::service`].

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::data::{value_at, Beach, ForecastHour, MarineSeries, SwellObservation};
use crate::moon::{moon_phase, MoonPhaseInfo, TidalEffect};
use crate::risk::{calculate_risk, DirectionLabel, RiskResult};
use crate::tide::approximate_tide;

/// Number of hours in the timeline view
pub const TIMELINE_HOURS: usize = 48;

/// Number of days in the daily summary
pub const SUMMARY_DAYS: usize = 7;

const HOURS_PER_DAY: usize = 24;

/// Errors raised when the raw series cannot be turned into a forecast
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The provider returned no hourly time stamps
    #[error("Hourly marine series is empty")]
    EmptySeries,

    /// A time stamp in the series could not be parsed
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    /// There are no beaches to score
    #[error("Beach registry is empty")]
    NoBeaches,
}

/// How the daily dominant direction is averaged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionMean {
    /// Arithmetic mean of the degree values. Averaging 350° and 10° gives 180°.
    #[default]
    Arithmetic,
    /// Mean of unit vectors, which handles the 0°/360° wrap
    Circular,
}

impl DirectionMean {
    fn mean(self, directions: &[f64]) -> f64 {
        if directions.is_empty() {
            return 0.0;
        }
        match self {
            DirectionMean::Arithmetic => directions.iter().sum::<f64>() / directions.len() as f64,
            DirectionMean::Circular => {
                let (sin, cos) = directions.iter().fold((0.0, 0.0), |(s, c), d| {
                    let rad = d.to_radians();
                    (s + rad.sin(), c + rad.cos())
                });
                sin.atan2(cos).to_degrees().rem_euclid(360.0)
            }
        }
    }
}

/// Risk for one beach under current conditions
#[derive(Debug, Clone, Serialize)]
pub struct BeachRisk {
    #[serde(flatten)]
    pub beach: Beach,
    pub risk: RiskResult,
}

/// Worst risk of the day for one beach
#[derive(Debug, Clone, Serialize)]
pub struct DailyBeachRisk {
    pub name: &'static str,
    pub risk: RiskResult,
}

/// One day of the forecast horizon, folded from up to 24 hours
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Meters, rounded to centimeters
    pub max_swell_height: f64,
    /// Seconds, rounded to one decimal
    pub avg_period: f64,
    /// Degrees, rounded to the nearest integer
    pub dominant_direction: f64,
    pub direction_label: DirectionLabel,
    /// Meters, rounded to centimeters
    pub max_tide: f64,
    pub beaches: Vec<DailyBeachRisk>,
}

/// Conditions at the current hour
#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub time: NaiveDateTime,
    pub swell: SwellObservation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_swell: Option<SwellObservation>,
    pub wave_height: f64,
    pub tide_height: f64,
    pub swell_direction_label: DirectionLabel,
}

/// Complete flood-risk picture for the bay at one instant
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub timestamp: DateTime<Utc>,
    pub moon: MoonPhaseInfo,
    pub current: CurrentConditions,
    /// Beach with the highest current score; first in registry order on ties
    pub overall: BeachRisk,
    pub beaches: Vec<BeachRisk>,
    pub timeline_48h: Vec<ForecastHour>,
    pub daily_summary: Vec<DailySummary>,
}

impl ForecastReport {
    /// Bay-wide risk: the worst beach's result
    pub fn overall_risk(&self) -> &RiskResult {
        &self.overall.risk
    }
}

/// Builds one [`ForecastHour`] per time stamp in the series.
///
/// Swell values come from the `swell_wave_*` variables, falling back to the
/// combined `wave_*` variables and then to zero. A secondary swell is only
/// attached when all three of its variables are present. Tide heights are
/// approximated from each hour's local time in `offset`.
pub fn build_forecast_hours(
    series: &MarineSeries,
    offset: FixedOffset,
) -> Result<Vec<ForecastHour>, ForecastError> {
    if series.time.is_empty() {
        return Err(ForecastError::EmptySeries);
    }

    series
        .time
        .iter()
        .enumerate()
        .map(|(i, raw_time)| {
            let time = parse_hour(raw_time)?;
            let local = offset
                .from_local_datetime(&time)
                .single()
                .ok_or_else(|| ForecastError::InvalidTimeFormat(raw_time.clone()))?;

            let height = value_at(&series.swell_wave_height, i)
                .or_else(|| value_at(&series.wave_height, i))
                .unwrap_or(0.0);
            let direction = value_at(&series.swell_wave_direction, i)
                .or_else(|| value_at(&series.wave_direction, i))
                .unwrap_or(0.0);
            let period = value_at(&series.swell_wave_period, i)
                .or_else(|| value_at(&series.wave_period, i))
                .unwrap_or(0.0);

            let secondary_swell = match (
                value_at(&series.secondary_swell_wave_height, i),
                value_at(&series.secondary_swell_wave_direction, i),
                value_at(&series.secondary_swell_wave_period, i),
            ) {
                (Some(h), Some(d), Some(p)) => Some(SwellObservation::sanitized(h, d, p)),
                _ => None,
            };

            Ok(ForecastHour {
                time,
                swell: SwellObservation::sanitized(height, direction, period),
                secondary_swell,
                wave_height: value_at(&series.wave_height, i).unwrap_or(0.0).max(0.0),
                tide_height: approximate_tide(&local),
            })
        })
        .collect()
}

/// Parses a provider time stamp such as "2024-07-15T05:00"
fn parse_hour(raw: &str) -> Result<NaiveDateTime, ForecastError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| ForecastError::InvalidTimeFormat(raw.to_string()))
}

/// Index of the hour containing `now`, or 0 when no hour matches.
pub fn locate_current_index(hours: &[ForecastHour], now: DateTime<Utc>, offset: FixedOffset) -> usize {
    let local = now.with_timezone(&offset).naive_local();
    let same_hour = |h: &ForecastHour| {
        h.time.date() == local.date() && h.time.hour() == local.hour()
    };

    match hours.iter().position(same_hour) {
        Some(index) => index,
        None => {
            debug!("No forecast hour matches {}, using first hour", local);
            0
        }
    }
}

/// Index of the highest score; the first maximum wins ties.
fn worst_index<I: IntoIterator<Item = u8>>(scores: I) -> usize {
    let mut best = (0, None::<u8>);
    for (i, score) in scores.into_iter().enumerate() {
        if best.1.map_or(true, |max| score > max) {
            best = (i, Some(score));
        }
    }
    best.0
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Aggregates a marine series into a [`ForecastReport`] for a set of beaches
#[derive(Debug, Clone)]
pub struct ForecastAggregator {
    beaches: &'static [Beach],
    offset: FixedOffset,
    direction_mean: DirectionMean,
}

impl ForecastAggregator {
    /// Creates an aggregator for `beaches` in a bay at UTC `offset`.
    pub fn new(beaches: &'static [Beach], offset: FixedOffset) -> Self {
        Self {
            beaches,
            offset,
            direction_mean: DirectionMean::default(),
        }
    }

    /// Selects how the daily dominant direction is averaged
    pub fn with_direction_mean(mut self, direction_mean: DirectionMean) -> Self {
        self.direction_mean = direction_mean;
        self
    }

    /// Builds the full report for the instant `now`.
    ///
    /// # Errors
    /// `ForecastError::EmptySeries` if the series has no hours,
    /// `ForecastError::InvalidTimeFormat` if a time stamp is malformed, or
    /// `ForecastError::NoBeaches` if the aggregator has no beaches.
    pub fn aggregate(
        &self,
        series: &MarineSeries,
        now: DateTime<Utc>,
    ) -> Result<ForecastReport, ForecastError> {
        let hours = build_forecast_hours(series, self.offset)?;
        let current_index = locate_current_index(&hours, now, self.offset);
        let current_hour = &hours[current_index];
        let moon = moon_phase(&now);

        let beaches = self.current_risks(current_hour, moon.tidal_effect);
        let overall = beaches
            .get(worst_index(beaches.iter().map(|b| b.risk.score)))
            .cloned()
            .ok_or(ForecastError::NoBeaches)?;

        let timeline_end = (current_index + TIMELINE_HOURS).min(hours.len());
        let timeline_48h = hours[current_index..timeline_end].to_vec();
        let daily_summary = self.daily_summary(&hours, moon.tidal_effect);

        debug!(
            "Aggregated {} hours: current index {}, worst beach {} ({})",
            hours.len(),
            current_index,
            overall.beach.name,
            overall.risk.score
        );

        Ok(ForecastReport {
            timestamp: now,
            moon,
            current: CurrentConditions {
                time: current_hour.time,
                swell: current_hour.swell,
                secondary_swell: current_hour.secondary_swell,
                wave_height: current_hour.wave_height,
                tide_height: current_hour.tide_height,
                swell_direction_label: DirectionLabel::from_direction(current_hour.swell.direction),
            },
            overall,
            beaches,
            timeline_48h,
            daily_summary,
        })
    }

    /// Scores every beach for the given hour, in registry order.
    pub fn current_risks(&self, hour: &ForecastHour, tidal_effect: TidalEffect) -> Vec<BeachRisk> {
        self.beaches
            .iter()
            .map(|beach| BeachRisk {
                beach: *beach,
                risk: calculate_risk(
                    beach,
                    &hour.swell,
                    hour.tide_height,
                    tidal_effect,
                    hour.secondary_swell.as_ref(),
                ),
            })
            .collect()
    }

    /// Folds the series into at most seven 24-hour days, starting at the
    /// first hour of the series regardless of the current hour.
    ///
    /// Every hour is scored with the same `tidal_effect` and primary swell
    /// only.
    pub fn daily_summary(&self, hours: &[ForecastHour], tidal_effect: TidalEffect) -> Vec<DailySummary> {
        hours
            .chunks(HOURS_PER_DAY)
            .take(SUMMARY_DAYS)
            .map(|day| self.summarize_day(day, tidal_effect))
            .collect()
    }

    fn summarize_day(&self, day: &[ForecastHour], tidal_effect: TidalEffect) -> DailySummary {
        let count = day.len() as f64;
        let max_swell = day.iter().map(|h| h.swell.height).fold(f64::MIN, f64::max);
        let avg_period = day.iter().map(|h| h.swell.period).sum::<f64>() / count;
        let directions: Vec<f64> = day.iter().map(|h| h.swell.direction).collect();
        let dominant_direction = self.direction_mean.mean(&directions).round();
        let max_tide = day.iter().map(|h| h.tide_height).fold(f64::MIN, f64::max);

        let beaches = self
            .beaches
            .iter()
            .map(|beach| {
                let risks: Vec<RiskResult> = day
                    .iter()
                    .map(|h| calculate_risk(beach, &h.swell, h.tide_height, tidal_effect, None))
                    .collect();
                let worst = worst_index(risks.iter().map(|r| r.score));
                DailyBeachRisk {
                    name: beach.name,
                    risk: risks[worst],
                }
            })
            .collect();

        DailySummary {
            date: day[0].time.date(),
            max_swell_height: round_to(max_swell, 2),
            avg_period: round_to(avg_period, 1),
            dominant_direction,
            direction_label: DirectionLabel::from_direction(dominant_direction),
            max_tide: round_to(max_tide, 2),
            beaches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{all_beaches, Exposure};
    use crate::risk::RiskLevel;

    fn bay() -> FixedOffset {
        FixedOffset::west_opt(6 * 3600).unwrap()
    }

    fn hourly_times(start: &str, count: usize) -> Vec<String> {
        let start = NaiveDateTime::parse_from_str(start, "%Y-%m-%dT%H:%M").unwrap();
        (0..count)
            .map(|i| {
                (start + chrono::Duration::hours(i as i64))
                    .format("%Y-%m-%dT%H:%M")
                    .to_string()
            })
            .collect()
    }

    fn uniform_series(count: usize, height: f64, direction: f64, period: f64) -> MarineSeries {
        MarineSeries {
            time: hourly_times("2024-01-10T00:00", count),
            wave_height: Some(vec![Some(height + 0.2); count]),
            wave_direction: Some(vec![Some(direction); count]),
            wave_period: Some(vec![Some(period - 2.0); count]),
            swell_wave_height: Some(vec![Some(height); count]),
            swell_wave_direction: Some(vec![Some(direction); count]),
            swell_wave_period: Some(vec![Some(period); count]),
            ..Default::default()
        }
    }

    fn at_local(s: &str) -> DateTime<Utc> {
        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap();
        bay().from_local_datetime(&naive).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_empty_series_is_rejected() {
        let aggregator = ForecastAggregator::new(all_beaches(), bay());
        let result = aggregator.aggregate(&MarineSeries::default(), Utc::now());
        assert!(matches!(result, Err(ForecastError::EmptySeries)));
    }

    #[test]
    fn test_empty_registry_is_rejected() {
        static NONE: [Beach; 0] = [];
        let aggregator = ForecastAggregator::new(&NONE, bay());
        let result = aggregator.aggregate(&uniform_series(24, 1.0, 300.0, 12.0), Utc::now());
        assert!(matches!(result, Err(ForecastError::NoBeaches)));
    }

    #[test]
    fn test_malformed_time_is_rejected() {
        let series = MarineSeries {
            time: vec!["yesterday".to_string()],
            ..Default::default()
        };
        let result = build_forecast_hours(&series, bay());
        assert!(matches!(result, Err(ForecastError::InvalidTimeFormat(t)) if t == "yesterday"));
    }

    #[test]
    fn test_swell_falls_back_to_wave_then_zero() {
        let series = MarineSeries {
            time: hourly_times("2024-01-10T00:00", 2),
            wave_height: Some(vec![Some(1.4), None]),
            wave_direction: Some(vec![Some(280.0), None]),
            wave_period: Some(vec![Some(11.0), None]),
            swell_wave_height: Some(vec![None, None]),
            ..Default::default()
        };
        let hours = build_forecast_hours(&series, bay()).unwrap();

        assert_eq!(hours[0].swell.height, 1.4);
        assert_eq!(hours[0].swell.direction, 280.0);
        assert_eq!(hours[0].swell.period, 11.0);
        assert_eq!(hours[0].wave_height, 1.4);

        assert_eq!(hours[1].swell.height, 0.0);
        assert_eq!(hours[1].swell.period, 0.0);
        assert_eq!(hours[1].wave_height, 0.0);
    }

    #[test]
    fn test_secondary_swell_requires_all_fields() {
        let mut series = uniform_series(2, 1.0, 300.0, 12.0);
        series.secondary_swell_wave_height = Some(vec![Some(0.8), Some(0.8)]);
        series.secondary_swell_wave_direction = Some(vec![Some(200.0), None]);
        series.secondary_swell_wave_period = Some(vec![Some(15.0), Some(15.0)]);

        let hours = build_forecast_hours(&series, bay()).unwrap();
        assert_eq!(
            hours[0].secondary_swell,
            Some(SwellObservation { height: 0.8, direction: 200.0, period: 15.0 })
        );
        assert!(hours[1].secondary_swell.is_none());
    }

    #[test]
    fn test_tide_follows_local_hour() {
        let hours = build_forecast_hours(&uniform_series(24, 1.0, 300.0, 12.0), bay()).unwrap();
        let expected = approximate_tide(&bay().with_ymd_and_hms(2024, 1, 10, 5, 0, 0).unwrap());
        assert_eq!(hours[5].tide_height, expected);
    }

    #[test]
    fn test_locate_current_index_exact_match() {
        let hours = build_forecast_hours(&uniform_series(48, 1.0, 300.0, 12.0), bay()).unwrap();
        let now = at_local("2024-01-10T13:00") + chrono::Duration::minutes(37);
        assert_eq!(locate_current_index(&hours, now, bay()), 13);
    }

    #[test]
    fn test_locate_current_index_falls_back_to_zero() {
        let hours = build_forecast_hours(&uniform_series(48, 1.0, 300.0, 12.0), bay()).unwrap();
        let now = at_local("2030-06-01T12:00");
        assert_eq!(locate_current_index(&hours, now, bay()), 0);
    }

    #[test]
    fn test_unmatched_now_still_produces_report() {
        let aggregator = ForecastAggregator::new(all_beaches(), bay());
        let series = uniform_series(72, 1.0, 300.0, 12.0);
        let report = aggregator.aggregate(&series, at_local("2030-06-01T12:00")).unwrap();
        assert_eq!(report.current.time, hours_start());
        assert_eq!(report.timeline_48h.len(), 48);
        assert_eq!(report.timeline_48h[0].time, hours_start());
    }

    fn hours_start() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-01-10T00:00", "%Y-%m-%dT%H:%M").unwrap()
    }

    #[test]
    fn test_timeline_runs_short_near_end_of_horizon() {
        let aggregator = ForecastAggregator::new(all_beaches(), bay());
        let series = uniform_series(168, 1.0, 300.0, 12.0);
        let report = aggregator.aggregate(&series, at_local("2024-01-16T10:00")).unwrap();
        // 2024-01-16T10:00 is index 154; 14 hours remain
        assert_eq!(report.timeline_48h.len(), 14);
    }

    #[test]
    fn test_current_risks_follow_registry_order() {
        let aggregator = ForecastAggregator::new(all_beaches(), bay());
        let series = uniform_series(24, 2.0, 300.0, 16.0);
        let report = aggregator.aggregate(&series, at_local("2024-01-10T00:00")).unwrap();

        let names: Vec<&str> = report.beaches.iter().map(|b| b.beach.name).collect();
        let expected: Vec<&str> = all_beaches().iter().map(|b| b.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_overall_risk_ties_go_to_first_beach() {
        let aggregator = ForecastAggregator::new(all_beaches(), bay());
        // NW swell: Los Muertos and Punta Mita are both MUY ALTA
        let series = uniform_series(24, 2.0, 300.0, 16.0);
        let report = aggregator.aggregate(&series, at_local("2024-01-10T00:00")).unwrap();

        assert_eq!(report.overall.beach.id, "los-muertos");
        let max = report.beaches.iter().map(|b| b.risk.score).max().unwrap();
        assert_eq!(report.overall_risk().score, max);
        let punta_mita = report.beaches.iter().find(|b| b.beach.id == "punta-mita").unwrap();
        assert_eq!(punta_mita.risk.score, max);
    }

    #[test]
    fn test_sw_swell_makes_north_shore_worst() {
        let aggregator = ForecastAggregator::new(all_beaches(), bay());
        let series = uniform_series(24, 2.0, 200.0, 16.0);
        let report = aggregator.aggregate(&series, at_local("2024-01-10T00:00")).unwrap();
        assert_eq!(report.overall.beach.id, "bucerias");
        assert_eq!(report.overall.beach.exposure_sw, Exposure::MuyAlta);
    }

    #[test]
    fn test_daily_summary_uniform_input_is_idempotent() {
        let aggregator = ForecastAggregator::new(all_beaches(), bay());
        let hours = build_forecast_hours(&uniform_series(24, 1.5, 300.0, 14.0), bay()).unwrap();
        let summary = aggregator.daily_summary(&hours, TidalEffect::Normal);

        assert_eq!(summary.len(), 1);
        let day = &summary[0];
        assert_eq!(day.max_swell_height, 1.5);
        assert_eq!(day.avg_period, 14.0);
        assert_eq!(day.dominant_direction, 300.0);
        assert_eq!(day.direction_label, DirectionLabel::NW);
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(day.beaches.len(), all_beaches().len());
    }

    #[test]
    fn test_daily_summary_partitions_from_index_zero() {
        let aggregator = ForecastAggregator::new(all_beaches(), bay());
        let hours = build_forecast_hours(&uniform_series(60, 1.0, 300.0, 12.0), bay()).unwrap();
        let summary = aggregator.daily_summary(&hours, TidalEffect::Normal);

        assert_eq!(summary.len(), 3);
        assert_eq!(summary[2].date, NaiveDate::from_ymd_opt(2024, 1, 12).unwrap());
    }

    #[test]
    fn test_daily_summary_caps_at_seven_days() {
        let aggregator = ForecastAggregator::new(all_beaches(), bay());
        let hours = build_forecast_hours(&uniform_series(200, 1.0, 300.0, 12.0), bay()).unwrap();
        assert_eq!(aggregator.daily_summary(&hours, TidalEffect::Normal).len(), 7);
    }

    #[test]
    fn test_daily_worst_hour_is_picked() {
        let mut series = uniform_series(24, 0.4, 300.0, 8.0);
        if let Some(heights) = series.swell_wave_height.as_mut() {
            heights[10] = Some(2.5);
        }
        if let Some(periods) = series.swell_wave_period.as_mut() {
            periods[10] = Some(17.0);
        }
        let aggregator = ForecastAggregator::new(all_beaches(), bay());
        let hours = build_forecast_hours(&series, bay()).unwrap();
        let summary = aggregator.daily_summary(&hours, TidalEffect::Normal);

        let los_muertos = &summary[0].beaches[0];
        assert_eq!(los_muertos.name, "Los Muertos");
        let expected = calculate_risk(
            &all_beaches()[0],
            &hours[10].swell,
            hours[10].tide_height,
            TidalEffect::Normal,
            None,
        );
        assert_eq!(los_muertos.risk, expected);
        assert_eq!(los_muertos.risk.level, RiskLevel::Critico);
        assert_eq!(summary[0].max_swell_height, 2.5);
    }

    #[test]
    fn test_direction_mean_arithmetic_vs_circular() {
        let directions = [350.0, 10.0];
        assert_eq!(DirectionMean::Arithmetic.mean(&directions), 180.0);
        let circular = DirectionMean::Circular.mean(&directions);
        assert!(circular < 1e-6 || (360.0 - circular) < 1e-6, "got {circular}");
    }

    #[test]
    fn test_circular_mean_changes_daily_label() {
        let mut series = uniform_series(24, 1.0, 350.0, 12.0);
        if let Some(dirs) = series.swell_wave_direction.as_mut() {
            for d in dirs.iter_mut().skip(12) {
                *d = Some(10.0);
            }
        }
        let hours = build_forecast_hours(&series, bay()).unwrap();

        let arithmetic = ForecastAggregator::new(all_beaches(), bay());
        let day = &arithmetic.daily_summary(&hours, TidalEffect::Normal)[0];
        assert_eq!(day.dominant_direction, 180.0);
        assert_eq!(day.direction_label, DirectionLabel::SW);

        let circular = ForecastAggregator::new(all_beaches(), bay()).with_direction_mean(DirectionMean::Circular);
        let day = &circular.daily_summary(&hours, TidalEffect::Normal)[0];
        assert_eq!(day.direction_label, DirectionLabel::N);
    }

    #[test]
    fn test_worst_index_prefers_first_maximum() {
        assert_eq!(worst_index([3, 7, 7, 1]), 1);
        assert_eq!(worst_index([0, 0, 0]), 0);
        assert_eq!(worst_index(Vec::<u8>::new()), 0);
    }

    #[test]
    fn test_report_serializes_flat_beach_fields() {
        let aggregator = ForecastAggregator::new(all_beaches(), bay());
        let series = uniform_series(24, 1.0, 300.0, 12.0);
        let report = aggregator.aggregate(&series, at_local("2024-01-10T03:00")).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["beaches"][0]["name"], "Los Muertos");
        assert_eq!(json["beaches"][0]["exposure_nw"], "MUY ALTA");
        assert!(json["beaches"][0]["risk"]["score"].is_number());
        assert_eq!(json["current"]["swell_direction_label"], "NW");
        assert_eq!(json["daily_summary"].as_array().unwrap().len(), 1);
    }
}
