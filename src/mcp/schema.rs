//! Parameter schemas of the built-in capabilities.
//!
//! Raw JSON params are deserialized into a typed struct and then checked with
//! `validator`. Nothing here touches the network.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{mcp::error::CapabilityError, utils::is_valid_address};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddressParams {
    #[validate(custom = "validate_evm_address")]
    pub address: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SimulateTxParams {
    #[validate(custom = "validate_evm_address")]
    pub from: String,
    #[validate(custom = "validate_evm_address")]
    pub to: String,
    #[validate(custom = "validate_positive")]
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LowBalanceAlertParams {
    #[validate(custom = "validate_evm_address")]
    pub address: String,
    #[validate(custom = "validate_positive")]
    pub threshold: f64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PortfolioOverviewParams {
    #[validate(custom = "validate_evm_address")]
    pub address: String,
    #[serde(rename = "simulateTo")]
    #[validate(custom = "validate_evm_address")]
    pub simulate_to: String,
    #[serde(rename = "simulateAmount")]
    #[validate(custom = "validate_positive")]
    pub simulate_amount: f64,
}

/// Deserializes and validates capability params. A missing params object is
/// treated as empty.
pub fn parse_params<T>(raw: Value) -> Result<T, CapabilityError>
where
    T: DeserializeOwned + Validate,
{
    let raw = if raw.is_null() {
        Value::Object(Map::new())
    } else {
        raw
    };
    let params: T =
        serde_json::from_value(raw).map_err(|e| CapabilityError::InvalidParams(e.to_string()))?;
    params
        .validate()
        .map_err(|e| CapabilityError::InvalidParams(describe_errors(&e)))?;
    Ok(params)
}

fn describe_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);
    fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let message = err.message.as_deref().unwrap_or(&*err.code);
                format!("{}: {}", field, message)
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn validate_evm_address(address: &str) -> Result<(), ValidationError> {
    if is_valid_address(address) {
        return Ok(());
    }
    let mut err = ValidationError::new("evm_address");
    err.message = Some(Cow::from(
        "must be a 0x-prefixed address of exactly 40 hex digits",
    ));
    Err(err)
}

fn validate_positive(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    let mut err = ValidationError::new("positive");
    err.message = Some(Cow::from("must be a positive number"));
    Err(err)
}

// --- Advertised JSON schemas ---

fn address_property(description: &str) -> Value {
    json!({
        "type": "string",
        "pattern": "^0x[0-9a-fA-F]{40}$",
        "description": description
    })
}

fn amount_property(description: &str) -> Value {
    json!({
        "type": "number",
        "exclusiveMinimum": 0,
        "description": description
    })
}

pub fn address_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "address": address_property("The 0x... address to inspect.")
        },
        "required": ["address"]
    })
}

pub fn simulate_tx_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "from": address_property("Sender address."),
            "to": address_property("Recipient address."),
            "amount": amount_property("Amount of MON to send.")
        },
        "required": ["from", "to", "amount"]
    })
}

pub fn low_balance_alert_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "address": address_property("Address to watch."),
            "threshold": amount_property("Notify when the balance drops below this many MON.")
        },
        "required": ["address", "threshold"]
    })
}

pub fn portfolio_overview_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "address": address_property("Address to inspect and send from."),
            "simulateTo": address_property("Recipient of the simulated transfer."),
            "simulateAmount": amount_property("Amount of MON for the simulated transfer.")
        },
        "required": ["address", "simulateTo", "simulateAmount"]
    })
}
