//! Platform fee curves for token launches.
//!
//! This crate provides:
//! - The continuous exponential curve (`base + multiplier * (p / 100) ^ exponent`)
//! - The piecewise banded curve (linear or quadratic interpolation per band)
//! - Fixed-decimal fee rounding shared by both
//!
//! Every function here is pure. Callers validate the retention percentage
//! before asking for a fee; constants and band sets are validated when they
//! are constructed.

pub mod banded;
pub mod error;
pub mod exponential;
pub mod rounding;

pub use banded::{compute_fee_banded, BandDefinition, BandShape, BandedCurve};
pub use error::CurveError;
pub use exponential::{compute_fee, compute_fee_parts, FeeConstants};
pub use rounding::{round_fee, FEE_DECIMALS};
