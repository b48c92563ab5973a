//! Utility functions for the Monad MCP server

/// Ticker of the chain's native currency.
pub const NATIVE_SYMBOL: &str = "MON";

/// Render a monetary figure with exactly two decimal places.
pub fn format_number(value: f64) -> String {
    format!("{:.2}", value)
}

/// Checks the `0x` + 40 hex digit shape of an EVM address.
pub fn is_valid_address(address: &str) -> bool {
    if !address.starts_with("0x") || address.len() != 42 {
        return false;
    }
    hex::decode(&address[2..]).is_ok()
}

/// Shorten a transaction hash to its first 10 characters.
pub fn short_hash(hash: &str) -> String {
    let prefix: String = hash.chars().take(10).collect();
    format!("{}...", prefix)
}
