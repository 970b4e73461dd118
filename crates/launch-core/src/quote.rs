use alloy_primitives::U256;
use fee_curve::{compute_fee, compute_fee_parts, round_fee, FEE_DECIMALS};
use serde::{Deserialize, Serialize};
use supply_split::{scale_to_base_units, split_supply, Distribution, RetentionPercentage};
use tracing::{debug, warn};

use crate::config::{FeeSchedule, LaunchConfig};
use crate::error::LaunchError;
use crate::types::{Chain, Currency};

/// A validated launch request: how much supply exists and how much the creator keeps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetentionRequest {
    pub total_supply: u128,
    pub retention: RetentionPercentage,
}

impl RetentionRequest {
    /// Validates boundary input. Errors name the offending field.
    pub fn new(total_supply: u128, retention_percentage: f64) -> Result<Self, LaunchError> {
        if total_supply == 0 {
            warn!(total_supply = %total_supply, "rejected launch request");
            return Err(LaunchError::invalid_input(
                "total_supply",
                "must be greater than zero",
            ));
        }
        let retention = RetentionPercentage::new(retention_percentage).map_err(|e| {
            warn!(retention_percentage, "rejected launch request");
            LaunchError::from(e)
        })?;
        Ok(Self {
            total_supply,
            retention,
        })
    }
}

/// Platform fee for one launch, in the chain's native currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub chain: Chain,
    pub currency: Currency,
    pub base_fee: f64,
    pub scaling_fee: f64,
    /// Curve value at the requested retention; equals `base_fee + scaling_fee`
    /// once rounded to `FEE_DECIMALS` places.
    pub total: f64,
}

impl FeeQuote {
    /// `total` in the currency's smallest unit (wei, lamports, sun, ...).
    ///
    /// The fee carries `FEE_DECIMALS` places, so the conversion is exact for
    /// every currency with at least that many decimals.
    pub fn total_base_units(&self) -> Result<u128, LaunchError> {
        fee_to_base_units(self.total, self.currency.decimals())
    }
}

fn fee_to_base_units(fee: f64, decimals: u8) -> Result<u128, LaunchError> {
    if !fee.is_finite() || fee < 0.0 {
        return Err(LaunchError::ConversionFailed(format!(
            "fee must be a finite non-negative number, got {fee}"
        )));
    }

    let ticks = (fee * 10f64.powi(FEE_DECIMALS as i32)).round();
    // 2^96 ticks keeps the cast and the scale-up below comfortably in range
    if ticks >= 2f64.powi(96) {
        return Err(LaunchError::ConversionFailed(format!("fee {fee} is too large")));
    }
    let ticks = ticks as u128;

    let decimals = u32::from(decimals);
    if decimals >= FEE_DECIMALS {
        ticks
            .checked_mul(10u128.pow(decimals - FEE_DECIMALS))
            .ok_or_else(|| LaunchError::ConversionFailed(format!("fee {fee} overflows u128")))
    } else {
        Ok(ticks / 10u128.pow(FEE_DECIMALS - decimals))
    }
}

/// Everything a deployment needs to know about one launch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchQuote {
    pub chain: Chain,
    pub request: RetentionRequest,
    pub distribution: Distribution,
    pub fee: FeeQuote,
}

impl LaunchQuote {
    /// Retained and liquidity amounts scaled by the token's decimals.
    pub fn distribution_base_units(&self) -> Result<(U256, U256), LaunchError> {
        let decimals = self.chain.token_decimals();
        Ok((
            scale_to_base_units(self.distribution.retained_amount, decimals)?,
            scale_to_base_units(self.distribution.liquidity_amount, decimals)?,
        ))
    }
}

/// Quotes the platform fee for `retention` on `chain`.
pub fn quote_fee(
    chain: Chain,
    retention: RetentionPercentage,
    config: &LaunchConfig,
) -> Result<FeeQuote, LaunchError> {
    let p = retention.value();
    let (base_fee, scaling_fee, total) = match config.schedule(chain)? {
        FeeSchedule::Exponential(constants) => {
            let (base, scaling) = compute_fee_parts(p, constants);
            (base, scaling, compute_fee(p, constants))
        }
        FeeSchedule::Banded { bands } => {
            let base = bands.fee(0.0);
            let total = bands.fee(p);
            (base, round_fee(total - base, FEE_DECIMALS), total)
        }
    };

    let quote = FeeQuote {
        chain,
        currency: chain.currency(),
        base_fee,
        scaling_fee,
        total,
    };
    debug!(
        chain = chain.display_name(),
        retention = p,
        total = quote.total,
        currency = quote.currency.symbol(),
        "quoted platform fee"
    );
    Ok(quote)
}

/// Splits the supply and quotes the fee for one launch.
pub fn plan_launch(
    chain: Chain,
    request: RetentionRequest,
    config: &LaunchConfig,
) -> Result<LaunchQuote, LaunchError> {
    let distribution = split_supply(request.total_supply, request.retention)?;
    let fee = quote_fee(chain, request.retention, config)?;
    debug!(
        chain = chain.display_name(),
        retained = %distribution.retained_amount,
        liquidity = %distribution.liquidity_amount,
        "planned launch"
    );
    Ok(LaunchQuote {
        chain,
        request,
        distribution,
        fee,
    })
}
