//! Per-chain fee schedules.
//!
//! Schedules are built once (built-in defaults, optionally merged with a JSON
//! or TOML file and environment overrides) and then passed explicitly to the
//! quoting functions. Nothing in the calculators reads the environment.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use fee_curve::{BandedCurve, FeeConstants};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::LaunchError;
use crate::types::Chain;

/// Prefix of every environment override, e.g. `LAUNCH_SOLANA_BASE_FEE`.
pub const ENV_PREFIX: &str = "LAUNCH_";

/// Fee curve applied on one chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "curve", rename_all = "snake_case")]
pub enum FeeSchedule {
    Exponential(FeeConstants),
    Banded { bands: BandedCurve },
}

impl FeeSchedule {
    pub fn validate(&self) -> Result<(), LaunchError> {
        match self {
            FeeSchedule::Exponential(constants) => Ok(constants.validate()?),
            // validated on construction
            FeeSchedule::Banded { .. } => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchConfig {
    #[serde(default)]
    pub schedules: BTreeMap<Chain, FeeSchedule>,
}

impl LaunchConfig {
    /// Built-in schedule for every supported chain.
    pub fn builtin() -> Result<Self, LaunchError> {
        let eth_bands = BandedCurve::three_band(0.001, 0.002, 0.01, 0.05)?;
        let mut schedules = BTreeMap::new();

        for chain in Chain::all() {
            let schedule = match chain {
                Chain::Ethereum | Chain::Base | Chain::Arbitrum | Chain::Sepolia => {
                    FeeSchedule::Banded {
                        bands: eth_bands.clone(),
                    }
                }
                Chain::Solana | Chain::SolanaDevnet => {
                    FeeSchedule::Exponential(FeeConstants::new(0.05, 0.85, 3.0)?)
                }
                Chain::Bsc => FeeSchedule::Exponential(FeeConstants::new(0.01, 0.2, 3.0)?),
                Chain::Polygon => FeeSchedule::Exponential(FeeConstants::new(10.0, 90.0, 3.0)?),
                Chain::Tron => FeeSchedule::Exponential(FeeConstants::new(50.0, 450.0, 3.0)?),
                Chain::Hyperliquid => FeeSchedule::Exponential(FeeConstants::new(1.0, 9.0, 2.0)?),
            };
            schedules.insert(*chain, schedule);
        }

        Ok(Self { schedules })
    }

    /// Schedule for `chain`, or `UnsupportedChain` if none is configured.
    pub fn schedule(&self, chain: Chain) -> Result<&FeeSchedule, LaunchError> {
        self.schedules
            .get(&chain)
            .ok_or_else(|| LaunchError::UnsupportedChain(chain.display_name().to_string()))
    }

    pub fn validate(&self) -> Result<(), LaunchError> {
        for (chain, schedule) in &self.schedules {
            schedule
                .validate()
                .map_err(|e| LaunchError::InvalidConfig(format!("{}: {e}", chain.display_name())))?;
        }
        Ok(())
    }

    /// Built-in schedules overlaid with the chains listed in a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, LaunchError> {
        let parsed: LaunchConfig = serde_json::from_str(raw)?;
        Self::builtin()?.merged(parsed)
    }

    /// Built-in schedules overlaid with the chains listed in a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, LaunchError> {
        let parsed: LaunchConfig = toml::from_str(raw)?;
        Self::builtin()?.merged(parsed)
    }

    /// Loads a config file, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self, LaunchError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| LaunchError::InvalidConfig(format!("{}: {e}", path.display())))?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&raw)?,
            Some("toml") => Self::from_toml_str(&raw)?,
            other => {
                return Err(LaunchError::InvalidConfig(format!(
                    "{}: unsupported config extension {:?}",
                    path.display(),
                    other
                )))
            }
        };

        info!(path = %path.display(), chains = config.schedules.len(), "loaded fee schedules");
        Ok(config)
    }

    fn merged(mut self, overlay: LaunchConfig) -> Result<Self, LaunchError> {
        self.schedules.extend(overlay.schedules);
        self.validate()?;
        Ok(self)
    }

    /// Applies `LAUNCH_<CHAIN>_{BASE_FEE,FEE_MULTIPLIER,FEE_EXPONENT}` overrides.
    ///
    /// Only exponential schedules accept overrides. Values are validated
    /// after all overrides for a chain are applied.
    pub fn apply_env_overrides<I>(&mut self, vars: I) -> Result<(), LaunchError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .collect();
        if vars.is_empty() {
            return Ok(());
        }

        for chain in Chain::all() {
            let names = [
                format!("{ENV_PREFIX}{}_BASE_FEE", chain.env_key()),
                format!("{ENV_PREFIX}{}_FEE_MULTIPLIER", chain.env_key()),
                format!("{ENV_PREFIX}{}_FEE_EXPONENT", chain.env_key()),
            ];
            if !names.iter().any(|name| vars.contains_key(name)) {
                continue;
            }

            let constants = match self.schedules.get_mut(chain) {
                Some(FeeSchedule::Exponential(constants)) => constants,
                Some(FeeSchedule::Banded { .. }) => {
                    return Err(LaunchError::InvalidConfig(format!(
                        "{} uses a banded curve; fee constant overrides do not apply",
                        chain.display_name()
                    )))
                }
                None => {
                    return Err(LaunchError::UnsupportedChain(chain.display_name().to_string()))
                }
            };

            let targets = [
                &mut constants.base_fee,
                &mut constants.fee_multiplier,
                &mut constants.fee_exponent,
            ];
            for (name, target) in names.iter().zip(targets) {
                if let Some(raw) = vars.get(name) {
                    *target = raw.trim().parse::<f64>().map_err(|e| {
                        LaunchError::InvalidConfig(format!("{name}={raw:?}: {e}"))
                    })?;
                    info!(var = %name, value = *target, "fee constant override");
                }
            }

            constants
                .validate()
                .map_err(|e| LaunchError::InvalidConfig(format!("{}: {e}", chain.env_key())))?;
        }

        Ok(())
    }

    /// Built-in schedules, then `LAUNCH_CONFIG` (if set), then per-constant overrides.
    pub fn from_process_env() -> Result<Self, LaunchError> {
        let mut config = match std::env::var("LAUNCH_CONFIG") {
            Ok(path) if !path.is_empty() => Self::load(Path::new(&path))?,
            _ => Self::builtin()?,
        };
        config.apply_env_overrides(std::env::vars())?;
        Ok(config)
    }
}
