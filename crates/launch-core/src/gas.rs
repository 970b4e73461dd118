use serde::{Deserialize, Serialize};

use crate::error::LaunchError;

/// How a stuck or rejected submission is retried.
///
/// Each retry resubmits at the previous gas price plus `bump_percent`,
/// floored to a whole base unit. Deserialized policies go through the same
/// checks as [`GasRetryPolicy::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PolicyFields", into = "PolicyFields")]
pub struct GasRetryPolicy {
    max_attempts: u32,
    bump_percent: u32,
}

#[derive(Serialize, Deserialize)]
struct PolicyFields {
    max_attempts: u32,
    bump_percent: u32,
}

impl Default for GasRetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            bump_percent: 10,
        }
    }
}

impl GasRetryPolicy {
    pub fn new(max_attempts: u32, bump_percent: u32) -> Result<Self, LaunchError> {
        if max_attempts == 0 {
            return Err(LaunchError::invalid_input("max_attempts", "must be at least 1"));
        }
        Ok(Self {
            max_attempts,
            bump_percent,
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn bump_percent(&self) -> u32 {
        self.bump_percent
    }

    /// Gas price for the zero-based `attempt`, starting from `estimate`.
    ///
    /// Never below the previous attempt's price; saturates at `u128::MAX`.
    pub fn gas_price_for_attempt(&self, estimate: u128, attempt: u32) -> u128 {
        let bump = u128::from(self.bump_percent);
        (0..attempt).fold(estimate, |price, _| {
            // floor(price * bump / 100) without forming price * bump
            let increase = (price / 100)
                .saturating_mul(bump)
                .saturating_add(price % 100 * bump / 100);
            price.saturating_add(increase)
        })
    }
}

impl TryFrom<PolicyFields> for GasRetryPolicy {
    type Error = LaunchError;

    fn try_from(fields: PolicyFields) -> Result<Self, Self::Error> {
        Self::new(fields.max_attempts, fields.bump_percent)
    }
}

impl From<GasRetryPolicy> for PolicyFields {
    fn from(policy: GasRetryPolicy) -> Self {
        Self {
            max_attempts: policy.max_attempts,
            bump_percent: policy.bump_percent,
        }
    }
}
