//! Command-line interface parsing for the Banderas Bay flood-risk CLI
//!
//! Parses arguments with clap and validates them into a [`StartupConfig`].

use std::time::Duration;

use chrono::FixedOffset;
use clap::Parser;
use log::LevelFilter;
use thiserror::Error;

use crate::data::marine::BAY_UTC_OFFSET_HOURS;
use crate::data::{find_beach, timezone_for_offset, Beach, MarineClient};
use crate::forecast::DirectionMean;
use crate::refresh::RefreshConfig;

/// Default bay offset: America/Mexico_City, UTC-6 all year
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = BAY_UTC_OFFSET_HOURS;

/// Longest accepted watch interval: one day
pub const MAX_INTERVAL_MINUTES: u64 = 24 * 60;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The beach given with --beach is not in the registry
    #[error("Unknown beach: '{0}'. Valid beaches: los-muertos, olas-altas, malecon, camarones, nuevo-vallarta, bucerias, la-cruz, sayulita, punta-mita")]
    UnknownBeach(String),

    /// The offset given with --utc-offset is not a valid timezone offset
    #[error("Invalid UTC offset: {0}. Expected hours between -12 and 14")]
    InvalidUtcOffset(i32),

    /// The watch interval is outside 1..=MAX_INTERVAL_MINUTES
    #[error("Invalid refresh interval: {0} minutes. Expected 1 to 1440")]
    InvalidInterval(u64),
}

/// Banderas Bay coastal flood risk from swell, tide and moon phase
#[derive(Parser, Debug)]
#[command(name = "pvflood")]
#[command(about = "Coastal flood risk for the beaches of Banderas Bay")]
#[command(version)]
pub struct Cli {
    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Only show one beach in the text report (id or name, e.g. "sayulita")
    #[arg(long, value_name = "BEACH")]
    pub beach: Option<String>,

    /// Keep running and print a new report on every refresh
    #[arg(long)]
    pub watch: bool,

    /// Minutes between refreshes in watch mode
    #[arg(long, value_name = "MINUTES", default_value_t = 10)]
    pub interval: u64,

    /// Skip the on-disk forecast cache
    #[arg(long)]
    pub no_cache: bool,

    /// Average daily swell direction on the circle instead of arithmetically
    #[arg(long)]
    pub circular_direction: bool,

    /// Bay timezone as hours from UTC
    #[arg(long, value_name = "HOURS", default_value_t = DEFAULT_UTC_OFFSET_HOURS, allow_hyphen_values = true)]
    pub utc_offset: i32,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub json: bool,
    pub beach: Option<&'static Beach>,
    pub use_cache: bool,
    pub direction_mean: DirectionMean,
    pub offset: FixedOffset,
    /// Provider timezone whose local stamps agree with `offset`
    pub timezone: String,
    pub refresh: RefreshConfig,
    pub log_level: LevelFilter,
}

/// Resolves a --beach argument against the registry.
pub fn parse_beach_arg(s: &str) -> Result<&'static Beach, CliError> {
    find_beach(s).ok_or_else(|| CliError::UnknownBeach(s.to_string()))
}

/// Converts a --utc-offset argument into a FixedOffset.
pub fn parse_utc_offset(hours: i32) -> Result<FixedOffset, CliError> {
    if !(-12..=14).contains(&hours) {
        return Err(CliError::InvalidUtcOffset(hours));
    }
    FixedOffset::east_opt(hours * 3600).ok_or(CliError::InvalidUtcOffset(hours))
}

impl StartupConfig {
    /// Validates parsed CLI arguments into a StartupConfig.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let beach = cli.beach.as_deref().map(parse_beach_arg).transpose()?;
        let offset = parse_utc_offset(cli.utc_offset)?;
        if !(1..=MAX_INTERVAL_MINUTES).contains(&cli.interval) {
            return Err(CliError::InvalidInterval(cli.interval));
        }

        let direction_mean = if cli.circular_direction {
            DirectionMean::Circular
        } else {
            DirectionMean::Arithmetic
        };

        let log_level = match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        };

        Ok(StartupConfig {
            json: cli.json,
            beach,
            use_cache: !cli.no_cache,
            direction_mean,
            offset,
            timezone: timezone_for_offset(cli.utc_offset),
            refresh: RefreshConfig {
                interval: Duration::from_secs(cli.interval * 60),
                enabled: cli.watch,
            },
            log_level,
        })
    }

    /// Marine client asking the provider for stamps in the configured offset
    pub fn marine_client(&self) -> MarineClient {
        MarineClient::new().with_timezone(self.timezone.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_beach_arg_accepts_id_and_name() {
        assert_eq!(parse_beach_arg("punta-mita").unwrap().name, "Punta Mita");
        assert_eq!(parse_beach_arg("Malecón").unwrap().id, "malecon");
    }

    #[test]
    fn test_parse_beach_arg_invalid() {
        let err = parse_beach_arg("waikiki").unwrap_err();
        assert!(err.to_string().contains("Unknown beach"));
        assert!(err.to_string().contains("waikiki"));
    }

    #[test]
    fn test_parse_utc_offset() {
        assert_eq!(parse_utc_offset(-6).unwrap().local_minus_utc(), -6 * 3600);
        assert_eq!(parse_utc_offset(0).unwrap().local_minus_utc(), 0);
        assert!(parse_utc_offset(-13).is_err());
        assert!(parse_utc_offset(15).is_err());
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["pvflood"]);
        assert!(!cli.json);
        assert!(!cli.watch);
        assert!(cli.beach.is_none());
        assert_eq!(cli.interval, 10);
        assert_eq!(cli.utc_offset, -6);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_negative_offset() {
        let cli = Cli::parse_from(["pvflood", "--utc-offset", "-7"]);
        assert_eq!(cli.utc_offset, -7);
    }

    #[test]
    fn test_cli_parse_verbosity() {
        let cli = Cli::parse_from(["pvflood", "-vv"]);
        assert_eq!(cli.verbose, 2);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_startup_config_defaults() {
        let cli = Cli::parse_from(["pvflood"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(!config.json);
        assert!(config.beach.is_none());
        assert!(config.use_cache);
        assert_eq!(config.direction_mean, DirectionMean::Arithmetic);
        assert_eq!(config.offset.local_minus_utc(), -6 * 3600);
        assert!(!config.refresh.enabled);
        assert_eq!(config.refresh.interval, Duration::from_secs(600));
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_startup_config_watch_and_options() {
        let cli = Cli::parse_from([
            "pvflood",
            "--watch",
            "--interval",
            "30",
            "--beach",
            "sayulita",
            "--no-cache",
            "--circular-direction",
            "--json",
        ]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(config.refresh.enabled);
        assert_eq!(config.refresh.interval, Duration::from_secs(1800));
        assert_eq!(config.beach.map(|b| b.id), Some("sayulita"));
        assert!(!config.use_cache);
        assert_eq!(config.direction_mean, DirectionMean::Circular);
        assert!(config.json);
    }

    #[test]
    fn test_startup_config_rejects_unknown_beach() {
        let cli = Cli::parse_from(["pvflood", "--beach", "atlantis"]);
        assert!(matches!(StartupConfig::from_cli(&cli), Err(CliError::UnknownBeach(_))));
    }

    #[test]
    fn test_startup_config_rejects_overflowing_interval() {
        let cli = Cli::parse_from(["pvflood", "--watch", "--interval", "18446744073709551615"]);
        assert!(matches!(
            StartupConfig::from_cli(&cli),
            Err(CliError::InvalidInterval(u64::MAX))
        ));
    }

    #[test]
    fn test_startup_config_interval_bounds() {
        let one_day = Cli::parse_from(["pvflood", "--interval", "1440"]);
        let config = StartupConfig::from_cli(&one_day).unwrap();
        assert_eq!(config.refresh.interval, Duration::from_secs(86_400));

        let too_long = Cli::parse_from(["pvflood", "--interval", "1441"]);
        assert!(matches!(
            StartupConfig::from_cli(&too_long),
            Err(CliError::InvalidInterval(1441))
        ));
    }

    #[test]
    fn test_default_offset_requests_bay_timezone() {
        let config = StartupConfig::from_cli(&Cli::parse_from(["pvflood"])).unwrap();
        assert_eq!(config.timezone, "America/Mexico_City");
        assert!(config
            .marine_client()
            .request_url()
            .contains("timezone=America/Mexico_City"));
    }

    #[test]
    fn test_custom_offset_is_sent_to_provider() {
        let cli = Cli::parse_from(["pvflood", "--utc-offset", "-7"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.offset.local_minus_utc(), -7 * 3600);
        assert_eq!(config.timezone, "Etc/GMT+7");
        assert!(config.marine_client().request_url().contains("timezone=Etc/GMT%2B7"));
    }

    #[test]
    fn test_startup_config_rejects_zero_interval() {
        let cli = Cli::parse_from(["pvflood", "--interval", "0"]);
        assert!(matches!(StartupConfig::from_cli(&cli), Err(CliError::InvalidInterval(0))));
    }
}
