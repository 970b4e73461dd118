//! Token supply distribution for launches.
//!
//! Splits a total supply into the amount the creator retains and the amount
//! that seeds liquidity. The retained side is floored exactly, so the two
//! halves always add back up to the total.

pub mod error;
pub mod percentage;
pub mod split;
pub mod units;

pub use error::SplitError;
pub use percentage::RetentionPercentage;
pub use split::{split_supply, Distribution};
pub use units::scale_to_base_units;
