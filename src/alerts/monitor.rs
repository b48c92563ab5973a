// src/alerts/monitor.rs

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::{
    alerts::store::AlertStore,
    blockchain::ChainClient,
    utils::{format_number, NATIVE_SYMBOL},
};

/// How often registered alerts are re-checked.
pub const ALERT_CHECK_INTERVAL: Duration = Duration::from_secs(60);

/// Result of checking one alert.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertOutcome {
    /// The balance is below the threshold
    Breach {
        address: String,
        balance: f64,
        threshold: f64,
    },
    Healthy {
        address: String,
        balance: f64,
        threshold: f64,
    },
    /// The balance could not be fetched
    CheckFailed { address: String, error: String },
}

impl AlertOutcome {
    pub fn address(&self) -> &str {
        match self {
            AlertOutcome::Breach { address, .. }
            | AlertOutcome::Healthy { address, .. }
            | AlertOutcome::CheckFailed { address, .. } => address,
        }
    }
}

/// Destination for alert check results.
pub trait AlertSink: Send + Sync {
    fn record(&self, outcome: &AlertOutcome);
}

/// Reports alert outcomes through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAlertSink;

impl AlertSink for TracingAlertSink {
    fn record(&self, outcome: &AlertOutcome) {
        match outcome {
            AlertOutcome::Breach {
                address,
                balance,
                threshold,
            } => warn!(
                "ALERT: {} balance ({} {}) is below threshold ({})",
                address,
                format_number(*balance),
                NATIVE_SYMBOL,
                threshold
            ),
            AlertOutcome::Healthy {
                address,
                balance,
                threshold,
            } => debug!(
                "{} balance ({} {}) is above threshold ({})",
                address,
                format_number(*balance),
                NATIVE_SYMBOL,
                threshold
            ),
            AlertOutcome::CheckFailed { address, error } => {
                error!("Failed to check balance for {}: {}", address, error)
            }
        }
    }
}

/// Periodically compares every stored alert against the live balance.
pub struct AlertMonitor {
    store: AlertStore,
    chain: Arc<dyn ChainClient>,
    sink: Arc<dyn AlertSink>,
}

impl AlertMonitor {
    pub fn new(store: AlertStore, chain: Arc<dyn ChainClient>, sink: Arc<dyn AlertSink>) -> Self {
        Self { store, chain, sink }
    }

    /// Checks a snapshot of the store once.
    ///
    /// Entries are checked one after another; a failed lookup is recorded and
    /// the cycle moves on.
    pub async fn run_cycle(&self) -> Vec<AlertOutcome> {
        let snapshot = self.store.snapshot_all();
        let mut outcomes = Vec::with_capacity(snapshot.len());

        for entry in snapshot {
            let outcome = match self.chain.get_balance(&entry.address).await {
                Ok(balance) if balance < entry.threshold => AlertOutcome::Breach {
                    address: entry.address,
                    balance,
                    threshold: entry.threshold,
                },
                Ok(balance) => AlertOutcome::Healthy {
                    address: entry.address,
                    balance,
                    threshold: entry.threshold,
                },
                Err(e) => AlertOutcome::CheckFailed {
                    address: entry.address,
                    error: format!("{:#}", e),
                },
            };
            self.sink.record(&outcome);
            outcomes.push(outcome);
        }

        debug!("Alert cycle checked {} address(es)", outcomes.len());
        outcomes
    }

    /// Runs forever, one cycle per [`ALERT_CHECK_INTERVAL`]. The first cycle
    /// starts one interval after the call.
    pub async fn run(self) {
        info!(
            "Balance alert monitor started (interval {}s)",
            ALERT_CHECK_INTERVAL.as_secs()
        );

        let mut ticker = interval_at(Instant::now() + ALERT_CHECK_INTERVAL, ALERT_CHECK_INTERVAL);
        // A cycle that overruns its slot must not trigger a burst of catch-up cycles
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.run_cycle().await;
        }
    }
}
