use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

/// Sends a single JSON-RPC 2.0 request and returns its `result` member.
pub async fn rpc_request(client: &Client, rpc_url: &str, method: &str, params: Value) -> Result<Value> {
    debug!("JSON-RPC {} -> {}", method, rpc_url);

    let payload = json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": 1
    });

    let resp = client
        .post(rpc_url)
        .json(&payload)
        .send()
        .await
        .with_context(|| format!("{} request to {} failed", method, rpc_url))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(anyhow!("{} failed with HTTP {}: {}", method, status, body));
    }

    let res: Value = resp
        .json()
        .await
        .with_context(|| format!("Invalid JSON in {} response", method))?;

    if let Some(err) = res.get("error") {
        let message = err
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("unknown error");
        return Err(anyhow!("{} RPC error: {}", method, message));
    }

    res.get("result")
        .cloned()
        .filter(|v| !v.is_null())
        .ok_or_else(|| anyhow!("RPC response for {} missing 'result' field: {:?}", method, res))
}

/// Like [`rpc_request`], for methods whose result is a hex quantity string.
pub async fn rpc_quantity(client: &Client, rpc_url: &str, method: &str, params: Value) -> Result<String> {
    let result = rpc_request(client, rpc_url, method, params).await?;
    result
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("RPC result for {} is not a hex string: {}", method, result))
}
