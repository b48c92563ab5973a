// src/blockchain/mod.rs

// Re-export the client module with the Monad client
pub mod client;
pub use client::{ChainClient, MonadClient};

pub mod history;
pub use history::{ExplorerHistoryProvider, HistoryProvider};

// Re-export other modules
pub mod models;
pub mod services;
pub mod units;
