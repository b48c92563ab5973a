// src/mcp/protocol.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /mcp/execute`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub capability: String,
    #[serde(default)]
    pub params: Value,
}

/// Uniform reply to every capability invocation: exactly one of `result`
/// or `error` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseEnvelope {
    Success { result: String },
    Failure { error: String },
}

impl ResponseEnvelope {
    pub fn success(result: String) -> Self {
        Self::Success { result }
    }

    pub fn error(message: String) -> Self {
        Self::Failure { error: message }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Advertised entry of the capability list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityInfo {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Body of the `POST /mcp/capabilities` reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilitiesList {
    pub capabilities: Vec<CapabilityInfo>,
}
