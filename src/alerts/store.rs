// src/alerts/store.rs

use dashmap::DashMap;
use std::sync::Arc;

/// A registered low-balance threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEntry {
    /// The address as it was supplied when the alert was set
    pub address: String,
    /// Threshold in MON
    pub threshold: f64,
}

/// In-memory registry of alerts, at most one per address.
///
/// Cloning the store yields another handle to the same map. Addresses are
/// keyed case-insensitively so checksummed and lowercase spellings collide.
#[derive(Debug, Clone, Default)]
pub struct AlertStore {
    alerts: Arc<DashMap<String, AlertEntry>>,
}

impl AlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the threshold for `address`, returning the one it replaced.
    pub fn upsert(&self, address: &str, threshold: f64) -> Option<f64> {
        let entry = AlertEntry {
            address: address.to_string(),
            threshold,
        };
        self.alerts
            .insert(address.to_lowercase(), entry)
            .map(|previous| previous.threshold)
    }

    pub fn get(&self, address: &str) -> Option<AlertEntry> {
        self.alerts
            .get(&address.to_lowercase())
            .map(|entry| entry.value().clone())
    }

    /// Copy of every alert, ordered by address.
    pub fn snapshot_all(&self) -> Vec<AlertEntry> {
        let mut entries: Vec<(String, AlertEntry)> = self
            .alerts
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.into_iter().map(|(_, entry)| entry).collect()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
