//! Background report refresh
//!
//! Periodically asks the [`ForecastService`] for a report and sends the
//! result to the main task over a tokio channel.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{debug, warn};
use tokio::sync::mpsc;

use crate::forecast::ForecastReport;
use crate::service::ForecastService;

/// Messages sent from background refresh to the main task
#[derive(Debug, Clone)]
pub enum RefreshMessage {
    /// A report was built for the current instant
    ReportUpdated(Arc<ForecastReport>),
    /// Producing the report failed
    RefreshError(String),
}

/// Configuration for the refresh loop
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Time between refreshes
    pub interval: Duration,
    /// Whether the loop runs at all
    pub enabled: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(600), // 10 minutes
            enabled: true,
        }
    }
}

/// Handle for controlling the background refresh task
pub struct RefreshHandle {
    /// Channel for receiving refresh messages
    pub receiver: mpsc::Receiver<RefreshMessage>,
    shutdown_tx: mpsc::Sender<()>,
}

impl RefreshHandle {
    /// Spawns the refresh task, which owns `service` from then on.
    ///
    /// The first report is produced immediately, then once per interval.
    pub fn spawn(mut service: ForecastService, config: RefreshConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(8);
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        if config.enabled {
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(config.interval);

                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            debug!("Refreshing forecast report");
                            let message = match service.report(Utc::now()).await {
                                Ok(report) => RefreshMessage::ReportUpdated(Arc::new(report)),
                                Err(e) => {
                                    warn!("Refresh failed: {}", e);
                                    RefreshMessage::RefreshError(e.to_string())
                                }
                            };
                            if msg_tx.send(message).await.is_err() {
                                break;
                            }
                        }
                        _ = shutdown_rx.recv() => {
                            break;
                        }
                    }
                }
            });
        }

        Self {
            receiver: msg_rx,
            shutdown_tx,
        }
    }

    /// Waits for the next message; `None` once the task has stopped
    pub async fn recv(&mut self) -> Option<RefreshMessage> {
        self.receiver.recv().await
    }

    /// Stops the background task
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}
