use anyhow::{anyhow, Result};
use ethers_core::types::U256;
use reqwest::Client;
use serde_json::json;
use tracing::info;

use crate::blockchain::{services::rpc::rpc_quantity, units::parse_hex_quantity};

/// Breakdown of a fee estimate for a value transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeEstimate {
    pub gas_units: U256,
    pub gas_price: U256,
    pub total_fee: U256,
}

/// Estimates the fee, in wei, for sending `value` wei from `from` to `to`.
pub async fn estimate_fees(
    client: &Client,
    rpc_url: &str,
    from: &str,
    to: &str,
    value: U256,
) -> Result<FeeEstimate> {
    info!("Estimating fees for transfer {} -> {} on {}", from, to, rpc_url);

    let estimated_gas_hex = rpc_quantity(
        client,
        rpc_url,
        "eth_estimateGas",
        json!([{
            "from": from,
            "to": to,
            "value": format!("0x{:x}", value),
        }]),
    )
    .await?;
    let gas_units = parse_hex_quantity(&estimated_gas_hex)?;

    let gas_price_hex = rpc_quantity(client, rpc_url, "eth_gasPrice", json!([])).await?;
    let gas_price = parse_hex_quantity(&gas_price_hex)?;

    let total_fee = gas_price
        .checked_mul(gas_units)
        .ok_or_else(|| anyhow!("Fee calculation overflow"))?;

    Ok(FeeEstimate {
        gas_units,
        gas_price,
        total_fee,
    })
}
