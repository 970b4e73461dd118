use thiserror::Error;

/// Fee curve construction errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    #[error("invalid fee constant {field}: {reason}")]
    InvalidConstant { field: &'static str, reason: String },

    #[error("band set is empty")]
    EmptyBands,

    #[error("invalid band {index}: {reason}")]
    InvalidBand { index: usize, reason: String },

    #[error("bands {index} and {next} do not meet: upper edge {upper} != lower edge {lower}")]
    Gap {
        index: usize,
        next: usize,
        upper: f64,
        lower: f64,
    },

    #[error("fee curve is discontinuous between bands {index} and {next}: {left} != {right}")]
    Discontinuous {
        index: usize,
        next: usize,
        left: f64,
        right: f64,
    },
}
