// src/blockchain/services/mod.rs

pub mod balance;
pub mod fees;
pub mod history;
pub mod rpc;
