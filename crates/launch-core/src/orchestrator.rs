//! Chain-agnostic launch execution.
//!
//! Every chain runs the same recipe: deploy the token, hand the retained
//! supply to the creator, collect the platform fee and optionally seed a
//! pool with the liquidity share. Chain specifics live behind
//! [`ChainAdapter`]; this module only orders the steps and retries
//! submissions with a rising gas price.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::LaunchError;
use crate::gas::GasRetryPolicy;
use crate::quote::LaunchQuote;
use crate::types::{Currency, TokenStandard};

/// One transaction in a launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchStep {
    DeployToken {
        standard: TokenStandard,
        total_supply: u128,
        decimals: u8,
    },
    TransferToCreator {
        amount: u128,
    },
    PayPlatformFee {
        currency: Currency,
        amount_base_units: u128,
    },
    SeedLiquidity {
        token_amount: u128,
    },
}

impl LaunchStep {
    pub fn name(&self) -> &'static str {
        match self {
            LaunchStep::DeployToken { .. } => "deploy_token",
            LaunchStep::TransferToCreator { .. } => "transfer_to_creator",
            LaunchStep::PayPlatformFee { .. } => "pay_platform_fee",
            LaunchStep::SeedLiquidity { .. } => "seed_liquidity",
        }
    }
}

/// What the orchestrator needs from a chain.
pub trait ChainAdapter {
    /// Current gas price (or priority fee) in the chain's smallest unit.
    fn estimate_gas_price(&mut self) -> Result<u128, LaunchError>;

    /// Submits `step` at `gas_price` and returns the transaction id.
    fn submit_transaction(&mut self, step: &LaunchStep, gas_price: u128) -> Result<String, LaunchError>;

    /// Blocks until `tx_id` is final. `Ok(false)` means it was dropped or reverted.
    fn wait_for_confirmation(&mut self, tx_id: &str) -> Result<bool, LaunchError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReceipt {
    pub step: LaunchStep,
    pub tx_id: String,
    pub gas_price: u128,
    pub attempts: u32,
}

/// Lays out the transactions for `quote`. Zero-amount transfers are skipped.
pub fn plan_steps(quote: &LaunchQuote, seed_pool: bool) -> Result<Vec<LaunchStep>, LaunchError> {
    let distribution = &quote.distribution;
    let mut steps = vec![LaunchStep::DeployToken {
        standard: quote.chain.token_standard(),
        total_supply: distribution.total_supply,
        decimals: quote.chain.token_decimals(),
    }];

    if distribution.retained_amount > 0 {
        steps.push(LaunchStep::TransferToCreator {
            amount: distribution.retained_amount,
        });
    }

    let fee = quote.fee.total_base_units()?;
    if fee > 0 {
        steps.push(LaunchStep::PayPlatformFee {
            currency: quote.fee.currency,
            amount_base_units: fee,
        });
    }

    if seed_pool && distribution.liquidity_amount > 0 {
        steps.push(LaunchStep::SeedLiquidity {
            token_amount: distribution.liquidity_amount,
        });
    }

    Ok(steps)
}

/// Runs `steps` in order. A step is not submitted until the previous one is confirmed.
pub fn execute_plan<A: ChainAdapter>(
    adapter: &mut A,
    policy: &GasRetryPolicy,
    steps: &[LaunchStep],
) -> Result<Vec<StepReceipt>, LaunchError> {
    let mut receipts = Vec::with_capacity(steps.len());
    for step in steps {
        let receipt = execute_step(adapter, policy, step)?;
        info!(step = step.name(), tx = %receipt.tx_id, attempts = receipt.attempts, "step confirmed");
        receipts.push(receipt);
    }
    Ok(receipts)
}

fn execute_step<A: ChainAdapter>(
    adapter: &mut A,
    policy: &GasRetryPolicy,
    step: &LaunchStep,
) -> Result<StepReceipt, LaunchError> {
    let estimate = adapter.estimate_gas_price()?;
    let max_attempts = policy.max_attempts();
    let mut last_error = String::new();

    for attempt in 0..max_attempts {
        let gas_price = policy.gas_price_for_attempt(estimate, attempt);
        let outcome = match adapter.submit_transaction(step, gas_price) {
            Ok(tx_id) => adapter
                .wait_for_confirmation(&tx_id)
                .map(|confirmed| (confirmed, tx_id)),
            Err(e) => Err(e),
        };

        match outcome {
            Ok((true, tx_id)) => {
                return Ok(StepReceipt {
                    step: *step,
                    tx_id,
                    gas_price,
                    attempts: attempt + 1,
                })
            }
            Ok((false, tx_id)) => last_error = format!("transaction {tx_id} was not confirmed"),
            Err(e) => last_error = e.to_string(),
        }

        warn!(
            step = step.name(),
            attempt = attempt + 1,
            gas_price = %gas_price,
            error = %last_error,
            "submission failed"
        );
    }

    Err(LaunchError::StepFailed {
        step: step.name().to_string(),
        attempts: max_attempts,
        reason: last_error,
    })
}
