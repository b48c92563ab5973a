//! Blockchain client module for the Monad network.
//!
//! This module provides the interface used by capabilities and the alert
//! monitor to read chain state. All amounts crossing this boundary are in
//! native MON; wei conversion happens inside the client.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::blockchain::{
    services::{balance, fees},
    units::{native_to_wei, wei_to_native},
};

/// Read access to a Monad node.
///
/// Every call is a single attempt; failures are returned to the caller as-is.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Latest balance of `address`, in MON.
    async fn get_balance(&self, address: &str) -> Result<f64>;

    /// Number of transactions sent from `address`.
    async fn get_transaction_count(&self, address: &str) -> Result<u64>;

    /// Network fee, in MON, of sending `amount` MON from `from` to `to`.
    async fn estimate_gas(&self, from: &str, to: &str, amount: f64) -> Result<f64>;
}

/// JSON-RPC backed [`ChainClient`].
#[derive(Clone)]
pub struct MonadClient {
    client: Client,
    rpc_url: String,
}

impl MonadClient {
    /// Create a new client for the given RPC URL
    pub fn new(rpc_url: &str) -> Self {
        Self {
            client: Client::new(),
            rpc_url: rpc_url.to_string(),
        }
    }
}

#[async_trait]
impl ChainClient for MonadClient {
    async fn get_balance(&self, address: &str) -> Result<f64> {
        let wei = balance::get_balance(&self.client, &self.rpc_url, address).await?;
        wei_to_native(wei)
    }

    async fn get_transaction_count(&self, address: &str) -> Result<u64> {
        balance::get_transaction_count(&self.client, &self.rpc_url, address).await
    }

    async fn estimate_gas(&self, from: &str, to: &str, amount: f64) -> Result<f64> {
        let value = native_to_wei(amount)?;
        let estimate = fees::estimate_fees(&self.client, &self.rpc_url, from, to, value)
            .await
            .context("Gas estimation failed")?;
        wei_to_native(estimate.total_fee)
    }
}
