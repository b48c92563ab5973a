//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use monad_mcp_server::{
    alerts::{AlertOutcome, AlertSink, AlertStore},
    api::create_router,
    blockchain::{
        models::{Direction, TransferSummary},
        ChainClient, HistoryProvider,
    },
    config::Config,
    AppState,
};

pub const ALICE: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
pub const BOB: &str = "0x1111111111111111111111111111111111111111";
pub const CAROL: &str = "0x2222222222222222222222222222222222222222";
pub const DAVE: &str = "0x3333333333333333333333333333333333333333";

/// In-memory chain that counts every call it receives.
pub struct MockChain {
    balances: Mutex<HashMap<String, f64>>,
    failing: Mutex<HashSet<String>>,
    tx_count: u64,
    gas: f64,
    calls: AtomicUsize,
}

impl MockChain {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
            tx_count: 0,
            gas: 0.01,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_balance(self, address: &str, balance: f64) -> Self {
        self.set_balance(address, balance);
        self
    }

    pub fn with_tx_count(mut self, count: u64) -> Self {
        self.tx_count = count;
        self
    }

    pub fn with_gas(mut self, gas: f64) -> Self {
        self.gas = gas;
        self
    }

    /// Balance lookups for `address` fail with a connection error.
    pub fn failing_for(self, address: &str) -> Self {
        self.failing.lock().unwrap().insert(address.to_lowercase());
        self
    }

    pub fn set_balance(&self, address: &str, balance: f64) {
        self.balances
            .lock()
            .unwrap()
            .insert(address.to_lowercase(), balance);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self, address: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.lock().unwrap().contains(&address.to_lowercase()) {
            return Err(anyhow!("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl ChainClient for MockChain {
    async fn get_balance(&self, address: &str) -> Result<f64> {
        self.check(address)?;
        Ok(self
            .balances
            .lock()
            .unwrap()
            .get(&address.to_lowercase())
            .copied()
            .unwrap_or(0.0))
    }

    async fn get_transaction_count(&self, address: &str) -> Result<u64> {
        self.check(address)?;
        Ok(self.tx_count)
    }

    async fn estimate_gas(&self, from: &str, _to: &str, _amount: f64) -> Result<f64> {
        self.check(from)?;
        Ok(self.gas)
    }
}

/// History provider returning a fixed list of transfers.
pub struct MockHistory {
    transfers: Vec<TransferSummary>,
    calls: AtomicUsize,
}

impl MockHistory {
    pub fn empty() -> Self {
        Self::with_transfers(Vec::new())
    }

    pub fn with_transfers(transfers: Vec<TransferSummary>) -> Self {
        Self {
            transfers,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistoryProvider for MockHistory {
    async fn fetch_recent(&self, _address: &str, limit: usize) -> Vec<TransferSummary> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.transfers.iter().take(limit).cloned().collect()
    }
}

/// `count` alternating sent/received transfers of 0.1, 0.2, ... MON.
pub fn sample_transfers(count: usize) -> Vec<TransferSummary> {
    (0..count)
        .map(|i| TransferSummary {
            direction: if i % 2 == 0 {
                Direction::Sent
            } else {
                Direction::Received
            },
            amount: 0.1 * (i + 1) as f64,
            counterparty: BOB.to_string(),
            short_hash: format!("0x{:08x}...", i + 1),
            timestamp: None,
        })
        .collect()
}

/// Sink that keeps every outcome it is given.
#[derive(Default)]
pub struct RecordingSink {
    outcomes: Mutex<Vec<AlertOutcome>>,
}

impl RecordingSink {
    pub fn outcomes(&self) -> Vec<AlertOutcome> {
        self.outcomes.lock().unwrap().clone()
    }
}

impl AlertSink for RecordingSink {
    fn record(&self, outcome: &AlertOutcome) {
        self.outcomes.lock().unwrap().push(outcome.clone());
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub alert_store: AlertStore,
}

pub fn create_test_app(chain: Arc<MockChain>, history: Arc<dyn HistoryProvider>) -> TestApp {
    let alert_store = AlertStore::new();
    let state = AppState::new(Config::default(), chain, history, alert_store.clone());
    TestApp {
        router: create_router(state.clone()),
        state,
        alert_store,
    }
}

pub async fn post_json(router: &Router, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(json) => serde_json::to_vec(&json).unwrap(),
        None => Vec::new(),
    };
    post_raw(router, uri, body, Some("application/json")).await
}

/// Posts `body` as-is, optionally without a `Content-Type` header.
pub async fn post_raw(
    router: &Router,
    uri: &str,
    body: impl Into<Body>,
    content_type: Option<&str>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        request = request.header("Content-Type", content_type);
    }
    let response = router
        .clone()
        .oneshot(request.body(body.into()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn execute(router: &Router, capability: &str, params: Value) -> (StatusCode, Value) {
    post_json(
        router,
        "/mcp/execute",
        Some(serde_json::json!({ "capability": capability, "params": params })),
    )
    .await
}
