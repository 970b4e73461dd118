use thiserror::Error;

#[derive(Debug, Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum LaunchError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid fee curve: {0}")]
    InvalidCurve(String),

    #[error("Supply split failed: {0}")]
    SplitFailed(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("No fee schedule for chain: {0}")]
    UnsupportedChain(String),

    #[error("Fee conversion failed: {0}")]
    ConversionFailed(String),

    #[error("Step {step} failed after {attempts} attempt(s): {reason}")]
    StepFailed {
        step: String,
        attempts: u32,
        reason: String,
    },

    #[error("Chain adapter error: {0}")]
    Adapter(String),
}

impl LaunchError {
    pub fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        LaunchError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<fee_curve::CurveError> for LaunchError {
    fn from(e: fee_curve::CurveError) -> Self {
        LaunchError::InvalidCurve(e.to_string())
    }
}

impl From<supply_split::SplitError> for LaunchError {
    fn from(e: supply_split::SplitError) -> Self {
        match e {
            supply_split::SplitError::InvalidPercentage(reason) => {
                LaunchError::invalid_input("retention_percentage", reason)
            }
            supply_split::SplitError::ZeroSupply => {
                LaunchError::invalid_input("total_supply", "must be greater than zero")
            }
            other => LaunchError::SplitFailed(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for LaunchError {
    fn from(e: serde_json::Error) -> Self {
        LaunchError::InvalidConfig(format!("JSON: {e}"))
    }
}

impl From<toml::de::Error> for LaunchError {
    fn from(e: toml::de::Error) -> Self {
        LaunchError::InvalidConfig(format!("TOML: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_input_names_field() {
        let err = LaunchError::invalid_input("total_supply", "must be greater than zero");
        assert_eq!(err.to_string(), "Invalid total_supply: must be greater than zero");
    }

    #[test]
    fn split_errors_map_to_fields() {
        let err: LaunchError =
            supply_split::SplitError::InvalidPercentage("must be within [0, 100], got 120".into()).into();
        assert!(matches!(&err, LaunchError::InvalidInput { field, .. } if field == "retention_percentage"));

        let err: LaunchError = supply_split::SplitError::ZeroSupply.into();
        assert!(matches!(&err, LaunchError::InvalidInput { field, .. } if field == "total_supply"));

        let err: LaunchError = supply_split::SplitError::Overflow("x".into()).into();
        assert!(matches!(err, LaunchError::SplitFailed(_)));
    }

    #[test]
    fn curve_error_converts() {
        let err: LaunchError = fee_curve::CurveError::EmptyBands.into();
        assert_eq!(err.to_string(), "Invalid fee curve: band set is empty");
    }

    #[test]
    fn display_step_failed() {
        let err = LaunchError::StepFailed {
            step: "deploy_token".into(),
            attempts: 3,
            reason: "replacement transaction underpriced".into(),
        };
        assert_eq!(
            err.to_string(),
            "Step deploy_token failed after 3 attempt(s): replacement transaction underpriced"
        );
    }
}
