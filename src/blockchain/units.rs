//! Conversions between wei and native MON amounts.
//!
//! Monad uses the EVM convention of 18 decimal places between the smallest
//! on-chain unit and the display unit.

use anyhow::{anyhow, Context, Result};
use ethers_core::{
    types::U256,
    utils::{format_ether, parse_ether},
};

/// Convert an on-chain wei amount into native units.
pub fn wei_to_native(amount: U256) -> Result<f64> {
    let formatted = format_ether(amount);
    formatted
        .parse::<f64>()
        .with_context(|| format!("Cannot represent {} MON as a float", formatted))
}

/// Convert a native amount into wei.
pub fn native_to_wei(amount: f64) -> Result<U256> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(anyhow!("Invalid native amount: {}", amount));
    }
    parse_ether(amount).map_err(|e| anyhow!("Invalid native amount {}: {}", amount, e))
}

/// Parse a `0x`-prefixed JSON-RPC quantity.
pub fn parse_hex_quantity(value: &str) -> Result<U256> {
    let digits = value.trim_start_matches("0x");
    if digits.is_empty() {
        return Ok(U256::zero());
    }
    U256::from_str_radix(digits, 16)
        .map_err(|e| anyhow!("Invalid hex quantity '{}': {:?}", value, e))
}

/// Parse a decimal wei string, as returned by explorer APIs.
pub fn parse_dec_quantity(value: &str) -> Result<U256> {
    U256::from_dec_str(value).map_err(|e| anyhow!("Invalid decimal quantity '{}': {:?}", value, e))
}
