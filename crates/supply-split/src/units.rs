use alloy_primitives::U256;

use crate::error::SplitError;

/// Converts a whole-token amount into on-chain base units (`amount * 10^decimals`).
///
/// The result is a `uint256`, matching what ERC-20 style constructors take.
pub fn scale_to_base_units(amount: u128, decimals: u8) -> Result<U256, SplitError> {
    let factor = U256::from(10u8)
        .checked_pow(U256::from(decimals))
        .ok_or_else(|| SplitError::Overflow(format!("10^{decimals} does not fit in 256 bits")))?;
    U256::from(amount)
        .checked_mul(factor)
        .ok_or_else(|| SplitError::Overflow(format!("{amount} * 10^{decimals} does not fit in 256 bits")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erc20_eighteen_decimals() {
        let raw = scale_to_base_units(1_000_000_000, 18).unwrap();
        assert_eq!(raw, U256::from(10u8).pow(U256::from(27u8)));
    }

    #[test]
    fn spl_nine_decimals() {
        let raw = scale_to_base_units(500_000_000, 9).unwrap();
        assert_eq!(raw, U256::from(500_000_000_000_000_000u64));
    }

    #[test]
    fn zero_decimals_is_identity() {
        assert_eq!(scale_to_base_units(42, 0).unwrap(), U256::from(42u8));
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(
            scale_to_base_units(1, 80),
            Err(SplitError::Overflow(_))
        ));
        assert!(matches!(
            scale_to_base_units(u128::MAX, 60),
            Err(SplitError::Overflow(_))
        ));
    }
}
