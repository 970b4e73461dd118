pub mod config;
pub mod error;
pub mod gas;
pub mod logging;
pub mod orchestrator;
pub mod quote;
pub mod types;

use config::LaunchConfig;
use error::LaunchError;
use fee_curve::{BandDefinition, BandShape, BandedCurve, FeeConstants};
use quote::RetentionRequest;
use supply_split::RetentionPercentage;
use types::Chain;

uniffi::setup_scaffolding!();

// ─── UniFFI-exported types ───────────────────────────────────────────

/// Exponential curve constants passed across FFI
#[derive(Debug, Clone, uniffi::Record)]
pub struct FeeConstantsData {
    pub base_fee: f64,
    pub fee_multiplier: f64,
    pub fee_exponent: f64,
}

/// One band of a banded curve passed across FFI
#[derive(Debug, Clone, uniffi::Record)]
pub struct BandData {
    pub lower: f64,
    pub upper: f64,
    pub fee_at_lower: f64,
    pub fee_at_upper: f64,
    pub quadratic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct SplitData {
    pub retained_amount: u64,
    pub liquidity_amount: u64,
}

/// Launch quote returned to the host application
#[derive(Debug, Clone, uniffi::Record)]
pub struct LaunchQuoteData {
    pub chain: Chain,
    pub currency_symbol: String,
    pub retained_amount: u64,
    pub liquidity_amount: u64,
    pub base_fee: f64,
    pub scaling_fee: f64,
    pub total_fee: f64,
    /// Decimal string; wei amounts can exceed u64
    pub total_fee_base_units: String,
}

// ─── UniFFI-exported functions ───────────────────────────────────────
// Every function validates its input here; the calculators underneath
// assume valid input.

/// Install the log subscriber (`LAUNCH_LOG` / `RUST_LOG`)
#[uniffi::export]
pub fn init_logging() {
    logging::init_tracing();
}

/// Chains with a built-in fee schedule
#[uniffi::export]
pub fn supported_chains() -> Vec<Chain> {
    Chain::all().to_vec()
}

/// Exponential platform fee, rounded to 4 decimals
#[uniffi::export]
pub fn compute_fee(retention_percentage: f64, constants: FeeConstantsData) -> Result<f64, LaunchError> {
    let retention = RetentionPercentage::new(retention_percentage)?;
    let constants = FeeConstants::new(
        constants.base_fee,
        constants.fee_multiplier,
        constants.fee_exponent,
    )?;
    Ok(fee_curve::compute_fee(retention.value(), &constants))
}

/// Banded platform fee, rounded to 4 decimals
#[uniffi::export]
pub fn compute_fee_banded(retention_percentage: f64, bands: Vec<BandData>) -> Result<f64, LaunchError> {
    let retention = RetentionPercentage::new(retention_percentage)?;
    let bands = bands
        .into_iter()
        .map(|b| BandDefinition {
            lower: b.lower,
            upper: b.upper,
            fee_at_lower: b.fee_at_lower,
            fee_at_upper: b.fee_at_upper,
            shape: if b.quadratic {
                BandShape::Quadratic
            } else {
                BandShape::Linear
            },
        })
        .collect();
    let curve = BandedCurve::new(bands)?;
    Ok(curve.fee(retention.value()))
}

/// Split a supply between creator and liquidity
#[uniffi::export]
pub fn split_supply(total_supply: u64, retention_percentage: f64) -> Result<SplitData, LaunchError> {
    let request = RetentionRequest::new(u128::from(total_supply), retention_percentage)?;
    let distribution = supply_split::split_supply(request.total_supply, request.retention)?;
    Ok(SplitData {
        retained_amount: to_u64(distribution.retained_amount)?,
        liquidity_amount: to_u64(distribution.liquidity_amount)?,
    })
}

/// Quote a launch with the built-in fee schedules
#[uniffi::export]
pub fn quote_launch(
    chain: Chain,
    total_supply: u64,
    retention_percentage: f64,
) -> Result<LaunchQuoteData, LaunchError> {
    let config = LaunchConfig::builtin()?;
    quote_with(&config, chain, total_supply, retention_percentage)
}

/// Quote a launch with schedules from a JSON config (overlaid on the built-ins)
#[uniffi::export]
pub fn quote_launch_with_config(
    chain: Chain,
    total_supply: u64,
    retention_percentage: f64,
    config_json: String,
) -> Result<LaunchQuoteData, LaunchError> {
    let config = LaunchConfig::from_json_str(&config_json)?;
    quote_with(&config, chain, total_supply, retention_percentage)
}

fn quote_with(
    config: &LaunchConfig,
    chain: Chain,
    total_supply: u64,
    retention_percentage: f64,
) -> Result<LaunchQuoteData, LaunchError> {
    let request = RetentionRequest::new(u128::from(total_supply), retention_percentage)?;
    let plan = quote::plan_launch(chain, request, config)?;
    Ok(LaunchQuoteData {
        chain,
        currency_symbol: plan.fee.currency.symbol().to_string(),
        retained_amount: to_u64(plan.distribution.retained_amount)?,
        liquidity_amount: to_u64(plan.distribution.liquidity_amount)?,
        base_fee: plan.fee.base_fee,
        scaling_fee: plan.fee.scaling_fee,
        total_fee: plan.fee.total,
        total_fee_base_units: plan.fee.total_base_units()?.to_string(),
    })
}

fn to_u64(amount: u128) -> Result<u64, LaunchError> {
    u64::try_from(amount).map_err(|_| LaunchError::SplitFailed(format!("{amount} exceeds u64")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary() -> FeeConstantsData {
        FeeConstantsData {
            base_fee: 0.05,
            fee_multiplier: 0.85,
            fee_exponent: 3.0,
        }
    }

    fn three_bands() -> Vec<BandData> {
        vec![
            BandData { lower: 0.0, upper: 5.0, fee_at_lower: 0.05, fee_at_upper: 0.1, quadratic: false },
            BandData { lower: 5.0, upper: 25.0, fee_at_lower: 0.1, fee_at_upper: 0.5, quadratic: false },
            BandData { lower: 25.0, upper: 100.0, fee_at_lower: 0.5, fee_at_upper: 2.0, quadratic: true },
        ]
    }

    // ─── compute_fee ────────────────────────────────────────────────

    #[test]
    fn compute_fee_reference_value() {
        assert_eq!(compute_fee(50.0, primary()).unwrap(), 0.1563);
    }

    #[test]
    fn compute_fee_endpoints() {
        assert_eq!(compute_fee(0.0, primary()).unwrap(), 0.05);
        assert_eq!(compute_fee(100.0, primary()).unwrap(), 0.9);
    }

    #[test]
    fn compute_fee_rejects_out_of_range_percentage() {
        let err = compute_fee(101.0, primary()).unwrap_err();
        assert!(err.to_string().contains("retention_percentage"), "{err}");
    }

    #[test]
    fn compute_fee_rejects_bad_constants() {
        let mut constants = primary();
        constants.fee_exponent = 0.0;
        assert!(matches!(
            compute_fee(50.0, constants),
            Err(LaunchError::InvalidCurve(_))
        ));
    }

    // ─── compute_fee_banded ─────────────────────────────────────────

    #[test]
    fn compute_fee_banded_values() {
        assert_eq!(compute_fee_banded(0.0, three_bands()).unwrap(), 0.05);
        assert_eq!(compute_fee_banded(62.5, three_bands()).unwrap(), 0.875);
        assert_eq!(compute_fee_banded(100.0, three_bands()).unwrap(), 2.0);
    }

    #[test]
    fn compute_fee_banded_continuous_at_edges() {
        for edge in [5.0, 25.0] {
            let at = compute_fee_banded(edge, three_bands()).unwrap();
            let below = compute_fee_banded(edge - 1e-9, three_bands()).unwrap();
            assert!((at - below).abs() <= 1e-4, "{edge}: {below} vs {at}");
        }
    }

    #[test]
    fn compute_fee_banded_rejects_gap() {
        let mut bands = three_bands();
        bands[2].lower = 30.0;
        assert!(matches!(
            compute_fee_banded(50.0, bands),
            Err(LaunchError::InvalidCurve(_))
        ));
    }

    // ─── split_supply ───────────────────────────────────────────────

    #[test]
    fn split_supply_reference_values() {
        assert_eq!(
            split_supply(1_000_000_000, 50.0).unwrap(),
            SplitData { retained_amount: 500_000_000, liquidity_amount: 500_000_000 }
        );
        assert_eq!(
            split_supply(1_000_000_000, 33.0).unwrap(),
            SplitData { retained_amount: 330_000_000, liquidity_amount: 670_000_000 }
        );
    }

    #[test]
    fn split_supply_u64_max() {
        let split = split_supply(u64::MAX, 100.0).unwrap();
        assert_eq!(split.retained_amount, u64::MAX);
        assert_eq!(split.liquidity_amount, 0);
    }

    #[test]
    fn split_supply_rejects_zero_supply() {
        let err = split_supply(0, 50.0).unwrap_err();
        assert!(err.to_string().contains("total_supply"), "{err}");
    }

    // ─── quote_launch ───────────────────────────────────────────────

    #[test]
    fn quote_launch_solana() {
        let quote = quote_launch(Chain::Solana, 1_000_000_000, 50.0).unwrap();
        assert_eq!(quote.currency_symbol, "SOL");
        assert_eq!(quote.retained_amount, 500_000_000);
        assert_eq!(quote.liquidity_amount, 500_000_000);
        assert_eq!(quote.total_fee, 0.1563);
        assert_eq!(quote.total_fee_base_units, "156300000");
    }

    #[test]
    fn quote_launch_polygon_exceeds_u64_base_units() {
        let quote = quote_launch(Chain::Polygon, 1_000, 100.0).unwrap();
        assert_eq!(quote.total_fee, 100.0);
        assert_eq!(quote.total_fee_base_units, "100000000000000000000");
    }

    #[test]
    fn quote_launch_with_config_overrides() {
        let json = r#"{ "schedules": { "solana": {
            "curve": "exponential", "base_fee": 0.1, "fee_multiplier": 1.0, "fee_exponent": 1.0
        }}}"#;
        let quote = quote_launch_with_config(Chain::Solana, 1_000, 25.0, json.into()).unwrap();
        assert_eq!(quote.total_fee, 0.35);
        assert_eq!(quote.base_fee, 0.1);
    }

    #[test]
    fn quote_launch_with_bad_config() {
        let result = quote_launch_with_config(Chain::Solana, 1_000, 25.0, "not json".into());
        assert!(matches!(result, Err(LaunchError::InvalidConfig(_))));
    }

    #[test]
    fn supported_chains_match_builtin_schedules() {
        let config = LaunchConfig::builtin().unwrap();
        for chain in supported_chains() {
            assert!(config.schedule(chain).is_ok());
        }
    }
}
