use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::{
    blockchain::{
        models::{Direction, ExplorerResponse, ExplorerTransaction, TransferSummary},
        units::{parse_dec_quantity, wei_to_native},
    },
    utils::short_hash,
};

/// Fetches the most recent transfers of `address`, newest first, from an
/// Etherscan-compatible `txlist` endpoint.
pub async fn get_transaction_history(
    client: &Client,
    api_url: &str,
    api_key: Option<&str>,
    address: &str,
    limit: usize,
) -> Result<Vec<TransferSummary>> {
    let offset = limit.to_string();
    let mut params = vec![
        ("module", "account"),
        ("action", "txlist"),
        ("address", address),
        ("startblock", "0"),
        ("endblock", "99999999"),
        ("page", "1"),
        ("offset", offset.as_str()),
        ("sort", "desc"),
    ];
    if let Some(key) = api_key {
        params.push(("apikey", key));
    }
    let url = Url::parse_with_params(api_url, &params).context("Invalid history API URL")?;

    debug!("Fetching transaction history for {} from {}", address, api_url);

    let resp = client
        .get(url)
        .send()
        .await
        .context("History API request failed")?;
    let status = resp.status();
    if !status.is_success() {
        return Err(anyhow!("History API returned HTTP {}", status));
    }
    let body: ExplorerResponse = resp
        .json()
        .await
        .context("Invalid history API JSON response")?;

    if body.status != "1" {
        // Explorers report an empty account as a failed lookup
        if body.message.starts_with("No transactions found") {
            return Ok(Vec::new());
        }
        return Err(anyhow!("History API error: {} ({})", body.message, body.result));
    }

    let transactions: Vec<ExplorerTransaction> =
        serde_json::from_value(body.result).context("Unexpected txlist result shape")?;

    transactions
        .into_iter()
        .take(limit)
        .map(|tx| summarize(tx, address))
        .collect()
}

fn summarize(tx: ExplorerTransaction, address: &str) -> Result<TransferSummary> {
    let amount = wei_to_native(parse_dec_quantity(&tx.value)?)?;
    let (direction, counterparty) = if tx.from.eq_ignore_ascii_case(address) {
        (Direction::Sent, tx.to.unwrap_or_default())
    } else {
        (Direction::Received, tx.from)
    };
    let timestamp = tx
        .time_stamp
        .as_deref()
        .and_then(|secs| secs.parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));

    Ok(TransferSummary {
        direction,
        amount,
        counterparty,
        short_hash: short_hash(&tx.hash),
        timestamp,
    })
}
