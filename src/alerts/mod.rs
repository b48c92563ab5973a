//! # Alerts Module
//!
//! Low-balance alerts registered through the `set-low-balance-alert`
//! capability, and the background task that re-checks them.

pub mod monitor;
pub mod store;

pub use monitor::{AlertMonitor, AlertOutcome, AlertSink, TracingAlertSink, ALERT_CHECK_INTERVAL};
pub use store::{AlertEntry, AlertStore};
