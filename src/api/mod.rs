//! # API Module
//!
//! HTTP handlers for the Monad MCP server.
//!
//! ## Available Endpoints
//!
//! - `POST /mcp/capabilities` - List the available capabilities
//! - `POST /mcp/execute` - Run a capability: `{"capability": "...", "params": {...}}`

use axum::{routing::post, Router};

use crate::AppState;

pub mod capabilities;

/// Build the complete API router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/mcp/capabilities", post(capabilities::list_capabilities_handler))
        .route("/mcp/execute", post(capabilities::execute_capability_handler))
        .with_state(state)
}
