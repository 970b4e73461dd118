use serde::{Deserialize, Serialize};

use crate::error::SplitError;

/// Share of the supply, in percent, that the creator keeps. Always in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RetentionPercentage(f64);

impl RetentionPercentage {
    pub const ZERO: Self = Self(0.0);
    pub const FULL: Self = Self(100.0);

    pub fn new(value: f64) -> Result<Self, SplitError> {
        if !value.is_finite() {
            return Err(SplitError::InvalidPercentage(format!(
                "must be finite, got {value}"
            )));
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(SplitError::InvalidPercentage(format!(
                "must be within [0, 100], got {value}"
            )));
        }
        // Normalize -0.0 so the decimal form never carries a sign.
        Ok(Self(value.abs()))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// `(digits, scale)` such that `value == digits / 10^scale`, read from the
    /// shortest decimal form that round-trips to this `f64` (33.3 gives `(333, 1)`).
    pub(crate) fn decimal_parts(&self) -> Result<(u128, u32), SplitError> {
        // Display for f64 is the shortest round-trip form and never uses an exponent.
        let text = self.0.to_string();
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let significant = format!("{whole}{fraction}");
        let significant = significant.trim_start_matches('0');
        let digits = if significant.is_empty() {
            0
        } else {
            significant.parse::<u128>().map_err(|e| {
                SplitError::InvalidPercentage(format!("cannot read {text} as a decimal: {e}"))
            })?
        };
        let scale = u32::try_from(fraction.len()).map_err(|_| {
            SplitError::InvalidPercentage(format!("{text} has too many decimal places"))
        })?;
        Ok((digits, scale))
    }
}

impl TryFrom<f64> for RetentionPercentage {
    type Error = SplitError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RetentionPercentage> for f64 {
    fn from(p: RetentionPercentage) -> Self {
        p.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(RetentionPercentage::new(0.0).unwrap(), RetentionPercentage::ZERO);
        assert_eq!(RetentionPercentage::new(100.0).unwrap(), RetentionPercentage::FULL);
        assert_eq!(RetentionPercentage::new(33.3).unwrap().value(), 33.3);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(RetentionPercentage::new(-0.001).is_err());
        assert!(RetentionPercentage::new(100.0001).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(RetentionPercentage::new(f64::NAN).is_err());
        assert!(RetentionPercentage::new(f64::INFINITY).is_err());
    }

    #[test]
    fn negative_zero_is_normalized() {
        let p = RetentionPercentage::new(-0.0).unwrap();
        assert!(p.value().is_sign_positive());
    }

    #[test]
    fn decimal_parts_use_shortest_form() {
        let cases = [
            (0.0, (0, 0)),
            (0.3, (3, 1)),
            (2.4, (24, 1)),
            (33.3, (333, 1)),
            (50.0, (50, 0)),
            (99.99, (9999, 2)),
            (100.0, (100, 0)),
        ];
        for (v, expected) in cases {
            assert_eq!(RetentionPercentage::new(v).unwrap().decimal_parts().unwrap(), expected, "{v}");
        }
    }

    #[test]
    fn decimal_parts_of_tiny_value() {
        let (digits, scale) = RetentionPercentage::new(1e-300).unwrap().decimal_parts().unwrap();
        assert_eq!(digits, 1);
        assert_eq!(scale, 300);
    }

    #[test]
    fn try_from_validates() {
        assert_eq!(RetentionPercentage::try_from(42.5).unwrap().value(), 42.5);
        assert!(RetentionPercentage::try_from(120.0).is_err());
        assert_eq!(f64::from(RetentionPercentage::FULL), 100.0);
    }
}
