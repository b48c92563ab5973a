//! Built-in capabilities.
//!
//! Each capability validates its params first, then composes chain and
//! history lookups into a plain-text answer.

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::{
    blockchain::models::TransferSummary,
    mcp::{
        error::CapabilityError,
        registry::{Capability, CapabilityContext},
        schema::{self, parse_params},
    },
    utils::{format_number, NATIVE_SYMBOL},
};

/// Transfers listed by `view-transaction-history`.
pub const HISTORY_LIMIT: usize = 5;
/// Transfers listed by `full-portfolio-overview`.
pub const OVERVIEW_HISTORY_LIMIT: usize = 3;
/// Flat per-transaction fee used for the fees-paid estimate.
pub const ESTIMATED_FEE_PER_TX: f64 = 0.01;

fn render_history(transfers: &[TransferSummary]) -> Vec<String> {
    transfers
        .iter()
        .enumerate()
        .map(|(i, transfer)| transfer.render(i + 1))
        .collect()
}

pub struct CheckMonBalance;

#[async_trait]
impl Capability for CheckMonBalance {
    fn name(&self) -> &'static str {
        "check-mon-balance"
    }

    fn description(&self) -> &'static str {
        "Get your MON balance for an address"
    }

    fn input_schema(&self) -> Value {
        schema::address_schema()
    }

    async fn call(&self, ctx: &CapabilityContext, params: Value) -> Result<String, CapabilityError> {
        let params: schema::AddressParams = parse_params(params)?;

        let balance = ctx.chain.get_balance(&params.address).await?;
        Ok(format!(
            "Your balance is {} {}.",
            format_number(balance),
            NATIVE_SYMBOL
        ))
    }
}

pub struct ViewTransactionHistory;

#[async_trait]
impl Capability for ViewTransactionHistory {
    fn name(&self) -> &'static str {
        "view-transaction-history"
    }

    fn description(&self) -> &'static str {
        "See your recent transactions on Monad Testnet"
    }

    fn input_schema(&self) -> Value {
        schema::address_schema()
    }

    async fn call(&self, ctx: &CapabilityContext, params: Value) -> Result<String, CapabilityError> {
        let params: schema::AddressParams = parse_params(params)?;

        let transfers = ctx.history.fetch_recent(&params.address, HISTORY_LIMIT).await;
        if transfers.is_empty() {
            return Ok("No recent transactions found.".to_string());
        }
        Ok(render_history(&transfers).join("\n"))
    }
}

pub struct PortfolioStats;

#[async_trait]
impl Capability for PortfolioStats {
    fn name(&self) -> &'static str {
        "portfolio-stats"
    }

    fn description(&self) -> &'static str {
        "Get a summary of your portfolio"
    }

    fn input_schema(&self) -> Value {
        schema::address_schema()
    }

    async fn call(&self, ctx: &CapabilityContext, params: Value) -> Result<String, CapabilityError> {
        let params: schema::AddressParams = parse_params(params)?;

        let balance = ctx.chain.get_balance(&params.address).await?;
        let tx_count = ctx.chain.get_transaction_count(&params.address).await?;
        let estimated_fees = tx_count as f64 * ESTIMATED_FEE_PER_TX;

        Ok(format!(
            "Portfolio Summary:\n- Total {symbol}: {}\n- Total Transactions: {}\n- Estimated Fees Paid: {} {symbol}",
            format_number(balance),
            tx_count,
            format_number(estimated_fees),
            symbol = NATIVE_SYMBOL
        ))
    }
}

pub struct SimulateTx;

#[async_trait]
impl Capability for SimulateTx {
    fn name(&self) -> &'static str {
        "simulate-tx"
    }

    fn description(&self) -> &'static str {
        "Simulate sending MON to another address"
    }

    fn input_schema(&self) -> Value {
        schema::simulate_tx_schema()
    }

    async fn call(&self, ctx: &CapabilityContext, params: Value) -> Result<String, CapabilityError> {
        let params: schema::SimulateTxParams = parse_params(params)?;

        let gas = ctx
            .chain
            .estimate_gas(&params.from, &params.to, params.amount)
            .await?;
        let balance = ctx.chain.get_balance(&params.from).await?;
        // Not clamped: a simulated overdraft is reported as a negative balance
        let new_balance = balance - params.amount - gas;

        Ok(format!(
            "Simulated Transaction:\n- Amount: {} {symbol}\n- Estimated Gas: {} {symbol}\n- New Balance: {} {symbol}",
            params.amount,
            format_number(gas),
            format_number(new_balance),
            symbol = NATIVE_SYMBOL
        ))
    }
}

pub struct SetLowBalanceAlert;

#[async_trait]
impl Capability for SetLowBalanceAlert {
    fn name(&self) -> &'static str {
        "set-low-balance-alert"
    }

    fn description(&self) -> &'static str {
        "Get notified if your balance drops too low"
    }

    fn input_schema(&self) -> Value {
        schema::low_balance_alert_schema()
    }

    async fn call(&self, ctx: &CapabilityContext, params: Value) -> Result<String, CapabilityError> {
        let params: schema::LowBalanceAlertParams = parse_params(params)?;

        // The alert stays registered even if the balance lookup below fails
        if let Some(previous) = ctx.alerts.upsert(&params.address, params.threshold) {
            info!(
                "Replaced low-balance alert for {} ({} -> {})",
                params.address, previous, params.threshold
            );
        } else {
            info!(
                "Registered low-balance alert for {} at {}",
                params.address, params.threshold
            );
        }

        let balance = ctx.chain.get_balance(&params.address).await?;
        if balance < params.threshold {
            Ok(format!(
                "Alert! Your balance ({} {symbol}) is below {} {symbol}.",
                format_number(balance),
                params.threshold,
                symbol = NATIVE_SYMBOL
            ))
        } else {
            Ok(format!(
                "Alert set! I'll notify you if your balance drops below {} {}.",
                params.threshold, NATIVE_SYMBOL
            ))
        }
    }
}

pub struct FullPortfolioOverview;

#[async_trait]
impl Capability for FullPortfolioOverview {
    fn name(&self) -> &'static str {
        "full-portfolio-overview"
    }

    fn description(&self) -> &'static str {
        "Get balance, transaction history, and simulate a transaction in one go"
    }

    fn input_schema(&self) -> Value {
        schema::portfolio_overview_schema()
    }

    async fn call(&self, ctx: &CapabilityContext, params: Value) -> Result<String, CapabilityError> {
        let params: schema::PortfolioOverviewParams = parse_params(params)?;

        let balance = ctx.chain.get_balance(&params.address).await?;
        let transfers = ctx
            .history
            .fetch_recent(&params.address, OVERVIEW_HISTORY_LIMIT)
            .await;
        let gas = ctx
            .chain
            .estimate_gas(&params.address, &params.simulate_to, params.simulate_amount)
            .await?;
        let new_balance = balance - params.simulate_amount - gas;

        let history = if transfers.is_empty() {
            "No recent transactions.".to_string()
        } else {
            render_history(&transfers).join("\n")
        };

        let overview = [
            format!("Balance: {} {}", format_number(balance), NATIVE_SYMBOL),
            format!("Recent Transactions ({}):", transfers.len()),
            history,
            format!(
                "Simulated Sending {} {} to {}:",
                params.simulate_amount, NATIVE_SYMBOL, params.simulate_to
            ),
            format!("- Estimated Gas: {} {}", format_number(gas), NATIVE_SYMBOL),
            format!("- New Balance: {} {}", format_number(new_balance), NATIVE_SYMBOL),
        ];

        Ok(format!("Full Portfolio Overview:\n{}", overview.join("\n")))
    }
}
