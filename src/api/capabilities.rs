// src/api/capabilities.rs

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::{
    mcp::{
        error::DispatchError,
        protocol::{CapabilitiesList, ExecuteRequest, ResponseEnvelope},
    },
    AppState,
};

// The handler function for the POST /mcp/capabilities endpoint.
pub async fn list_capabilities_handler(State(state): State<AppState>) -> Json<CapabilitiesList> {
    Json(CapabilitiesList {
        capabilities: state.dispatcher.capabilities(),
    })
}

// The handler function for the POST /mcp/execute endpoint.
pub async fn execute_capability_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExecuteRequest>, JsonRejection>,
) -> Response {
    // A body without a readable capability name never reaches the dispatcher
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            info!("Rejected execute request: {}", rejection.body_text());
            return DispatchError::UnknownCapability(String::new()).into_response();
        }
    };

    match state
        .dispatcher
        .try_execute(&req.capability, req.params)
        .await
    {
        Ok(result) => (StatusCode::OK, Json(ResponseEnvelope::success(result))).into_response(),
        Err(e) => e.into_response(),
    }
}
