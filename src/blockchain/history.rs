//! Transfer history lookups.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use crate::blockchain::{models::TransferSummary, services::history};

/// Source of past transfers for an address.
///
/// Lookups never fail from the caller's point of view: a provider that cannot
/// answer yields an empty list.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Up to `limit` transfers involving `address`, most recent first.
    async fn fetch_recent(&self, address: &str, limit: usize) -> Vec<TransferSummary>;
}

/// [`HistoryProvider`] backed by an Etherscan-compatible explorer API.
#[derive(Clone)]
pub struct ExplorerHistoryProvider {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl ExplorerHistoryProvider {
    pub fn new(api_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.to_string(),
            api_key,
        }
    }

    /// Same lookup as [`HistoryProvider::fetch_recent`], surfacing failures.
    pub async fn try_fetch_recent(&self, address: &str, limit: usize) -> Result<Vec<TransferSummary>> {
        history::get_transaction_history(
            &self.client,
            &self.api_url,
            self.api_key.as_deref(),
            address,
            limit,
        )
        .await
    }
}

#[async_trait]
impl HistoryProvider for ExplorerHistoryProvider {
    async fn fetch_recent(&self, address: &str, limit: usize) -> Vec<TransferSummary> {
        match self.try_fetch_recent(address, limit).await {
            Ok(transfers) => transfers,
            Err(e) => {
                warn!("Failed to fetch transaction history for {}: {:#}", address, e);
                Vec::new()
            }
        }
    }
}
