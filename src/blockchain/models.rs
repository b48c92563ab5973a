// src/blockchain/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::{format_number, NATIVE_SYMBOL};

// --- Transaction History Models ---

/// Direction of a transfer relative to the queried address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Sent,
    Received,
}

/// A past transfer as presented to users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferSummary {
    pub direction: Direction,
    /// Transferred amount in MON
    pub amount: f64,
    /// The other side of the transfer
    pub counterparty: String,
    /// First 10 characters of the transaction hash followed by `...`
    pub short_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl TransferSummary {
    /// One history line, numbered from 1.
    pub fn render(&self, position: usize) -> String {
        let (verb, preposition) = match self.direction {
            Direction::Sent => ("Sent", "to"),
            Direction::Received => ("Received", "from"),
        };
        format!(
            "Tx {}: {} - {} {} {} {} {}",
            position,
            self.short_hash,
            verb,
            format_number(self.amount),
            NATIVE_SYMBOL,
            preposition,
            self.counterparty
        )
    }
}

// --- Explorer API Models ---

/// Envelope returned by Etherscan-compatible account endpoints.
#[derive(Debug, Deserialize)]
pub struct ExplorerResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: Value,
}

/// A single entry of a `txlist` result.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerTransaction {
    pub hash: String,
    pub from: String,
    /// Empty for contract creations
    #[serde(default)]
    pub to: Option<String>,
    pub value: String,
    #[serde(default)]
    pub time_stamp: Option<String>,
}
