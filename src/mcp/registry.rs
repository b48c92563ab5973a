// src/mcp/registry.rs

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::{
    alerts::AlertStore,
    blockchain::{ChainClient, HistoryProvider},
    mcp::{capabilities, error::CapabilityError, protocol::CapabilityInfo},
};

/// Collaborators available to every capability.
#[derive(Clone)]
pub struct CapabilityContext {
    pub chain: Arc<dyn ChainClient>,
    pub history: Arc<dyn HistoryProvider>,
    pub alerts: AlertStore,
}

/// A named operation invocable through `/mcp/execute`.
///
/// Implementations validate `params` before making any remote call and
/// return a single line-oriented text result.
#[async_trait]
pub trait Capability: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// JSON schema advertised for `params`
    fn input_schema(&self) -> Value;
    async fn call(&self, ctx: &CapabilityContext, params: Value) -> Result<String, CapabilityError>;
}

/// Fixed, ordered set of capabilities. Built once at startup.
#[derive(Clone)]
pub struct CapabilityRegistry {
    capabilities: Vec<Arc<dyn Capability>>,
}

impl CapabilityRegistry {
    /// Builds a registry in the given order. Later duplicates of a name are
    /// dropped.
    pub fn new(candidates: Vec<Arc<dyn Capability>>) -> Self {
        let mut capabilities: Vec<Arc<dyn Capability>> = Vec::with_capacity(candidates.len());
        for capability in candidates {
            if capabilities.iter().any(|c| c.name() == capability.name()) {
                warn!("Ignoring duplicate capability '{}'", capability.name());
                continue;
            }
            capabilities.push(capability);
        }
        Self { capabilities }
    }

    /// The six built-in capabilities.
    pub fn standard() -> Self {
        let builtin: Vec<Arc<dyn Capability>> = vec![
            Arc::new(capabilities::CheckMonBalance),
            Arc::new(capabilities::ViewTransactionHistory),
            Arc::new(capabilities::PortfolioStats),
            Arc::new(capabilities::SimulateTx),
            Arc::new(capabilities::SetLowBalanceAlert),
            Arc::new(capabilities::FullPortfolioOverview),
        ];
        Self::new(builtin)
    }

    /// Advertised capabilities, in registration order.
    pub fn list(&self) -> Vec<CapabilityInfo> {
        self.capabilities
            .iter()
            .map(|c| CapabilityInfo {
                name: c.name().to_string(),
                description: c.description().to_string(),
                input_schema: c.input_schema(),
            })
            .collect()
    }

    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Capability>> {
        self.capabilities.iter().find(|c| c.name() == name).cloned()
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}
