//! Banderas Bay flood-risk CLI
//!
//! Prints the coastal flooding risk for the beaches of Banderas Bay, once or
//! on a refresh interval with `--watch`.

use std::process;

use chrono::Utc;
use clap::Parser;
use log::{error, info};

use pvflood::cache::CacheManager;
use pvflood::cli::{Cli, StartupConfig};
use pvflood::data::all_beaches;
use pvflood::forecast::{ForecastAggregator, ForecastReport};
use pvflood::refresh::{RefreshHandle, RefreshMessage};
use pvflood::report::render_text;
use pvflood::service::ForecastService;

/// Initialises env_logger; RUST_LOG takes precedence over `-v`.
fn init_logging(config: &StartupConfig) {
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn build_service(config: &StartupConfig) -> ForecastService {
    let cache = if config.use_cache {
        let cache = CacheManager::new();
        if cache.is_none() {
            info!("No cache directory available, caching disabled");
        }
        cache
    } else {
        None
    };

    let aggregator =
        ForecastAggregator::new(all_beaches(), config.offset).with_direction_mean(config.direction_mean);

    ForecastService::new(config.marine_client(), cache, aggregator)
}

fn print_report(report: &ForecastReport, config: &StartupConfig) -> Result<(), Box<dyn std::error::Error>> {
    if config.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_text(report, config.beach)?);
    }
    Ok(())
}

async fn watch(service: ForecastService, config: &StartupConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut handle = RefreshHandle::spawn(service, config.refresh.clone());

    loop {
        tokio::select! {
            message = handle.recv() => match message {
                Some(RefreshMessage::ReportUpdated(report)) => {
                    print_report(&report, config)?;
                    if !config.json {
                        println!();
                    }
                }
                Some(RefreshMessage::RefreshError(e)) => error!("{}", e),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, stopping refresh");
                handle.shutdown().await;
                break;
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    init_logging(&config);

    let mut service = build_service(&config);

    if config.refresh.enabled {
        return watch(service, &config).await;
    }

    match service.report(Utc::now()).await {
        Ok(report) => print_report(&report, &config)?,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    Ok(())
}
