// src/config.rs

use std::env;
use anyhow::{Context, Result};
use url::Url;

// A struct to hold all configuration, loaded once at startup from the .env file.
#[derive(Clone, Debug)]
pub struct Config {
    // Server settings
    pub port: u16,

    /// JSON-RPC endpoint of the Monad node used for balances, nonces and gas estimates
    pub monad_rpc_url: String,

    /// Base URL of an Etherscan-compatible account API used for transfer history
    pub history_api_url: String,
    pub history_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            monad_rpc_url: "http://127.0.0.1:8545".to_string(),
            history_api_url: "http://127.0.0.1:8546/api".to_string(),
            history_api_key: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load variables from the .env file into the environment
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let monad_rpc_url = lookup("MONAD_RPC_URL")
            .context("MONAD_RPC_URL must be set to the Monad JSON-RPC endpoint")?;
        Url::parse(&monad_rpc_url).context("MONAD_RPC_URL must be a valid URL")?;

        let history_api_url = lookup("HISTORY_API_URL")
            .context("HISTORY_API_URL must be set to the transaction history API endpoint")?;
        Url::parse(&history_api_url).context("HISTORY_API_URL must be a valid URL")?;

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            monad_rpc_url,
            history_api_url,
            history_api_key: lookup("HISTORY_API_KEY").filter(|key| !key.is_empty()),
        })
    }
}
