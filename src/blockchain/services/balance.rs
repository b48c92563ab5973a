use anyhow::Result;
use ethers_core::types::U256;
use reqwest::Client;
use serde_json::json;

use crate::blockchain::{services::rpc::rpc_quantity, units::parse_hex_quantity};

/// Fetches the latest native balance of `address`, in wei.
pub async fn get_balance(client: &Client, rpc_url: &str, address: &str) -> Result<U256> {
    let result = rpc_quantity(client, rpc_url, "eth_getBalance", json!([address, "latest"])).await?;
    parse_hex_quantity(&result)
}

/// Fetches the number of transactions sent from `address`.
pub async fn get_transaction_count(client: &Client, rpc_url: &str, address: &str) -> Result<u64> {
    let result = rpc_quantity(
        client,
        rpc_url,
        "eth_getTransactionCount",
        json!([address, "latest"]),
    )
    .await?;
    let count = parse_hex_quantity(&result)?;
    if count > U256::from(u64::MAX) {
        anyhow::bail!("Transaction count {} out of range", count);
    }
    Ok(count.as_u64())
}
