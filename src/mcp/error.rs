// src/mcp/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::mcp::protocol::ResponseEnvelope;

/// Guidance returned for capability names that are not registered.
pub const UNKNOWN_CAPABILITY_MESSAGE: &str =
    "That capability isn't supported. Check /mcp/capabilities for valid options.";

/// Failure raised inside a capability.
#[derive(Error, Debug)]
pub enum CapabilityError {
    /// Params did not match the capability's schema; no remote call was made
    #[error("{0}")]
    InvalidParams(String),
    /// A chain or provider call failed
    #[error("{0:#}")]
    Remote(#[from] anyhow::Error),
}

/// Failure of a dispatched invocation, as reported to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("{}", UNKNOWN_CAPABILITY_MESSAGE)]
    UnknownCapability(String),
    #[error("Error executing {capability}: {message}")]
    InvalidParams { capability: String, message: String },
    #[error("Error executing {capability}: {message}")]
    Execution { capability: String, message: String },
}

impl DispatchError {
    pub fn from_capability(capability: &str, err: CapabilityError) -> Self {
        let capability = capability.to_string();
        match err {
            CapabilityError::InvalidParams(message) => Self::InvalidParams { capability, message },
            remote @ CapabilityError::Remote(_) => Self::Execution {
                capability,
                message: remote.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownCapability(_) => StatusCode::BAD_REQUEST,
            Self::InvalidParams { .. } | Self::Execution { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_envelope(&self) -> ResponseEnvelope {
        ResponseEnvelope::error(self.to_string())
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_envelope())).into_response()
    }
}
