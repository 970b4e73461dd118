use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::rounding::{round_fee, FEE_DECIMALS};

/// Interpolation used inside a single band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandShape {
    Linear,
    Quadratic,
}

/// One segment of a banded fee curve, covering `[lower, upper)` percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandDefinition {
    pub lower: f64,
    pub upper: f64,
    pub fee_at_lower: f64,
    pub fee_at_upper: f64,
    pub shape: BandShape,
}

impl BandDefinition {
    /// Unrounded fee at `p`, which must lie inside this band.
    fn interpolate(&self, p: f64) -> f64 {
        let t = ((p - self.lower) / (self.upper - self.lower)).clamp(0.0, 1.0);
        let weight = match self.shape {
            BandShape::Linear => t,
            BandShape::Quadratic => t * t,
        };
        self.fee_at_lower + (self.fee_at_upper - self.fee_at_lower) * weight
    }
}

/// A validated band set spanning `[0, 100]` without gaps or jumps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BandDefinition>", into = "Vec<BandDefinition>")]
pub struct BandedCurve {
    bands: Vec<BandDefinition>,
}

impl BandedCurve {
    /// Validates and wraps a band set.
    ///
    /// Bands must be ordered, start at 0, end at 100, share their edges and
    /// agree on the fee at every shared edge. Fees must be finite, non-negative
    /// and must not decrease within a band.
    pub fn new(bands: Vec<BandDefinition>) -> Result<Self, CurveError> {
        if bands.is_empty() {
            return Err(CurveError::EmptyBands);
        }

        for (index, band) in bands.iter().enumerate() {
            validate_band(index, band)?;
        }

        let first = &bands[0];
        if first.lower != 0.0 {
            return Err(CurveError::InvalidBand {
                index: 0,
                reason: format!("first band must start at 0, starts at {}", first.lower),
            });
        }
        let last_index = bands.len() - 1;
        let last = &bands[last_index];
        if last.upper != 100.0 {
            return Err(CurveError::InvalidBand {
                index: last_index,
                reason: format!("last band must end at 100, ends at {}", last.upper),
            });
        }

        for (index, pair) in bands.windows(2).enumerate() {
            let (left, right) = (&pair[0], &pair[1]);
            if left.upper != right.lower {
                return Err(CurveError::Gap {
                    index,
                    next: index + 1,
                    upper: left.upper,
                    lower: right.lower,
                });
            }
            if left.fee_at_upper != right.fee_at_lower {
                return Err(CurveError::Discontinuous {
                    index,
                    next: index + 1,
                    left: left.fee_at_upper,
                    right: right.fee_at_lower,
                });
            }
        }

        Ok(Self { bands })
    }

    pub fn bands(&self) -> &[BandDefinition] {
        &self.bands
    }

    /// Rounded fee at `retention_percentage`.
    pub fn fee(&self, retention_percentage: f64) -> f64 {
        compute_fee_banded(retention_percentage, &self.bands)
    }

    /// Three bands with edges at 5% and 25%: linear, linear, then quadratic up to 100%.
    pub fn three_band(floor: f64, at_5: f64, at_25: f64, ceiling: f64) -> Result<Self, CurveError> {
        Self::new(vec![
            BandDefinition {
                lower: 0.0,
                upper: 5.0,
                fee_at_lower: floor,
                fee_at_upper: at_5,
                shape: BandShape::Linear,
            },
            BandDefinition {
                lower: 5.0,
                upper: 25.0,
                fee_at_lower: at_5,
                fee_at_upper: at_25,
                shape: BandShape::Linear,
            },
            BandDefinition {
                lower: 25.0,
                upper: 100.0,
                fee_at_lower: at_25,
                fee_at_upper: ceiling,
                shape: BandShape::Quadratic,
            },
        ])
    }
}

impl TryFrom<Vec<BandDefinition>> for BandedCurve {
    type Error = CurveError;

    fn try_from(bands: Vec<BandDefinition>) -> Result<Self, Self::Error> {
        Self::new(bands)
    }
}

impl From<BandedCurve> for Vec<BandDefinition> {
    fn from(curve: BandedCurve) -> Self {
        curve.bands
    }
}

fn validate_band(index: usize, band: &BandDefinition) -> Result<(), CurveError> {
    let invalid = |reason: String| CurveError::InvalidBand { index, reason };

    let values = [band.lower, band.upper, band.fee_at_lower, band.fee_at_upper];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(invalid("edges and fees must be finite".into()));
    }
    if band.lower < 0.0 || band.upper > 100.0 {
        return Err(invalid(format!(
            "edges must lie within [0, 100], got [{}, {}]",
            band.lower, band.upper
        )));
    }
    if band.lower >= band.upper {
        return Err(invalid(format!(
            "lower edge {} must be below upper edge {}",
            band.lower, band.upper
        )));
    }
    if band.fee_at_lower < 0.0 {
        return Err(invalid(format!("fee_at_lower must be >= 0, got {}", band.fee_at_lower)));
    }
    if band.fee_at_upper < band.fee_at_lower {
        return Err(invalid(format!(
            "fee must not decrease within a band: {} -> {}",
            band.fee_at_lower, band.fee_at_upper
        )));
    }
    Ok(())
}

/// Computes the banded platform fee for a retention percentage in `[0, 100]`.
///
/// Bands are lower-inclusive; 100% falls into the last band. The bands are
/// expected to come from a validated [`BandedCurve`]; an empty slice yields 0.
pub fn compute_fee_banded(retention_percentage: f64, bands: &[BandDefinition]) -> f64 {
    let band = bands
        .iter()
        .find(|b| retention_percentage >= b.lower && retention_percentage < b.upper)
        .or_else(|| {
            if retention_percentage < bands.first()?.lower {
                bands.first()
            } else {
                bands.last()
            }
        });

    match band {
        Some(band) => round_fee(band.interpolate(retention_percentage), FEE_DECIMALS),
        None => 0.0,
    }
}
