//! # MCP Handler Module
//!
//! Dispatches `/mcp/execute` invocations to registered capabilities.
//!
//! ## Supported Capabilities
//!
//! - `check-mon-balance` - MON balance of an address
//! - `view-transaction-history` - Up to 5 recent transfers
//! - `portfolio-stats` - Balance, transaction count and estimated fees paid
//! - `simulate-tx` - Gas estimate and resulting balance for a transfer
//! - `set-low-balance-alert` - Register a threshold checked by the alert monitor
//! - `full-portfolio-overview` - Balance, recent transfers and a simulated transfer
//!
//! Every invocation yields a [`ResponseEnvelope`]; nothing a capability does
//! escapes as a panic or raw error to the HTTP layer.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info};

use crate::mcp::{
    error::DispatchError,
    protocol::{CapabilityInfo, ResponseEnvelope},
    registry::{CapabilityContext, CapabilityRegistry},
};

/// Resolves, validates and runs capabilities.
#[derive(Clone)]
pub struct CapabilityDispatcher {
    registry: Arc<CapabilityRegistry>,
    context: CapabilityContext,
}

impl CapabilityDispatcher {
    pub fn new(registry: CapabilityRegistry, context: CapabilityContext) -> Self {
        Self {
            registry: Arc::new(registry),
            context,
        }
    }

    pub fn capabilities(&self) -> Vec<CapabilityInfo> {
        self.registry.list()
    }

    /// Runs `name` with `params`, keeping the failure class.
    pub async fn try_execute(&self, name: &str, params: Value) -> Result<String, DispatchError> {
        info!("Handling capability request: {}", name);

        let capability = self.registry.resolve(name).ok_or_else(|| {
            info!("Unknown capability requested: {}", name);
            DispatchError::UnknownCapability(name.to_string())
        })?;

        capability
            .call(&self.context, params)
            .await
            .map_err(|e| {
                let err = DispatchError::from_capability(name, e);
                error!("{}", err);
                err
            })
    }

    /// Runs `name` with `params` and wraps the outcome in an envelope.
    pub async fn execute(&self, name: &str, params: Value) -> ResponseEnvelope {
        match self.try_execute(name, params).await {
            Ok(result) => ResponseEnvelope::success(result),
            Err(e) => e.to_envelope(),
        }
    }
}
