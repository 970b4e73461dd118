use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::SplitError;
use crate::percentage::RetentionPercentage;

/// Result of splitting a total supply between creator and liquidity.
///
/// `retained_amount + liquidity_amount == total_supply` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub total_supply: u128,
    pub retained_amount: u128,
    pub liquidity_amount: u128,
}

/// Splits `total_supply` by `retention`.
///
/// `retained_amount = floor(total_supply * retention / 100)`, where `retention`
/// is read as the decimal it was written as (2.4 is exactly 24/10), and
/// `liquidity_amount` receives the full complement.
pub fn split_supply(
    total_supply: u128,
    retention: RetentionPercentage,
) -> Result<Distribution, SplitError> {
    if total_supply == 0 {
        return Err(SplitError::ZeroSupply);
    }

    let retained_amount = floor_share(total_supply, retention)?;
    let liquidity_amount = total_supply.checked_sub(retained_amount).ok_or_else(|| {
        SplitError::Overflow(format!(
            "retained {retained_amount} exceeds total supply {total_supply}"
        ))
    })?;

    Ok(Distribution {
        total_supply,
        retained_amount,
        liquidity_amount,
    })
}

/// `floor(total * digits / (100 * 10^scale))` with a 256-bit intermediate.
fn floor_share(total: u128, retention: RetentionPercentage) -> Result<u128, SplitError> {
    let (digits, scale) = retention.decimal_parts()?;
    // total < 2^128 and digits < 10^20, so the product fits
    let product = U256::from(total) * U256::from(digits);

    let share = match pow10(scale.saturating_add(2)) {
        Some(divisor) => product / divisor,
        // divisor beyond 2^256 always exceeds the product
        None => U256::ZERO,
    };
    u128::try_from(share)
        .map_err(|_| SplitError::Overflow(format!("retained share {share} exceeds u128")))
}

fn pow10(exponent: u32) -> Option<U256> {
    (0..exponent).try_fold(U256::from(1u8), |acc, _| acc.checked_mul(U256::from(10u8)))
}
