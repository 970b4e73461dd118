use thiserror::Error;

/// Supply split errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SplitError {
    #[error("invalid retention_percentage: {0}")]
    InvalidPercentage(String),

    #[error("invalid total_supply: must be greater than zero")]
    ZeroSupply,

    #[error("amount overflow: {0}")]
    Overflow(String),
}
