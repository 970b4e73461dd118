use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::rounding::{round_fee, FEE_DECIMALS};

/// Tunable constants of the continuous exponential fee curve.
///
/// The fee at retention `p` is `base_fee + fee_multiplier * (p / 100) ^ fee_exponent`,
/// so it starts at `base_fee` when the creator keeps nothing and approaches
/// `base_fee + fee_multiplier` as retention reaches 100%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeConstants {
    pub base_fee: f64,
    pub fee_multiplier: f64,
    pub fee_exponent: f64,
}

impl FeeConstants {
    /// Builds a validated set of constants.
    pub fn new(base_fee: f64, fee_multiplier: f64, fee_exponent: f64) -> Result<Self, CurveError> {
        let constants = Self {
            base_fee,
            fee_multiplier,
            fee_exponent,
        };
        constants.validate()?;
        Ok(constants)
    }

    /// Checks `base_fee >= 0`, `fee_multiplier >= 0` and `fee_exponent >= 1`.
    ///
    /// Deserialized constants skip `new`, so config loaders call this directly.
    pub fn validate(&self) -> Result<(), CurveError> {
        check_at_least("base_fee", self.base_fee, 0.0)?;
        check_at_least("fee_multiplier", self.fee_multiplier, 0.0)?;
        check_at_least("fee_exponent", self.fee_exponent, 1.0)?;
        Ok(())
    }
}

fn check_at_least(field: &'static str, value: f64, min: f64) -> Result<(), CurveError> {
    if !value.is_finite() {
        return Err(CurveError::InvalidConstant {
            field,
            reason: format!("must be finite, got {value}"),
        });
    }
    if value < min {
        return Err(CurveError::InvalidConstant {
            field,
            reason: format!("must be >= {min}, got {value}"),
        });
    }
    Ok(())
}

/// Computes the platform fee for a retention percentage in `[0, 100]`.
///
/// The result is rounded to [`FEE_DECIMALS`] places. Out-of-range input is a
/// caller contract violation and yields a meaningless (but defined) number.
pub fn compute_fee(retention_percentage: f64, constants: &FeeConstants) -> f64 {
    let share = retention_percentage / 100.0;
    let raw = constants.base_fee + constants.fee_multiplier * share.powf(constants.fee_exponent);
    round_fee(raw, FEE_DECIMALS)
}

/// Splits the rounded fee into its `(base, scaling)` components.
///
/// `base + scaling` equals [`compute_fee`] for the same input, up to float
/// addition.
pub fn compute_fee_parts(retention_percentage: f64, constants: &FeeConstants) -> (f64, f64) {
    let total = compute_fee(retention_percentage, constants);
    let base = round_fee(constants.base_fee, FEE_DECIMALS);
    (base, round_fee(total - base, FEE_DECIMALS))
}
