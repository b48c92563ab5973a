// src/lib.rs

use std::sync::Arc;

// Re-export modules
pub mod alerts;
pub mod api;
pub mod blockchain;
pub mod config;
pub mod mcp;
pub mod utils;

use alerts::AlertStore;
use blockchain::{ChainClient, HistoryProvider};
use mcp::{CapabilityContext, CapabilityDispatcher, CapabilityRegistry};

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: config::Config,
    /// Runs the registered capabilities
    pub dispatcher: CapabilityDispatcher,
    /// Low-balance alerts, shared with the alert monitor
    pub alert_store: AlertStore,
}

impl AppState {
    /// Wires the standard capability set to the given chain and history
    /// backends.
    pub fn new(
        config: config::Config,
        chain: Arc<dyn ChainClient>,
        history: Arc<dyn HistoryProvider>,
        alert_store: AlertStore,
    ) -> Self {
        let context = CapabilityContext {
            chain,
            history,
            alerts: alert_store.clone(),
        };
        Self {
            config,
            dispatcher: CapabilityDispatcher::new(CapabilityRegistry::standard(), context),
            alert_store,
        }
    }
}
