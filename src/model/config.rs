use thiserror::Error;

use crate::model::{SCORE_MAX, SCORE_MIN};

/// Per-invocation rescale targets. Not persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentConfig {
    /// Desired mean of the adjusted set.
    pub target_mean: f64,
    /// Desired upper bound on the share of adjusted scores at or above
    /// `threshold`, strictly inside (0, 1).
    pub max_fraction_above: f64,
    /// High-achievement cutoff the cap applies to.
    pub threshold: f64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("max fraction above threshold must be strictly between 0 and 1, got {0}")]
    FractionOutOfRange(f64),
    #[error(
        "max fraction above threshold of exactly 0.5 gives a zero z threshold; the required spread is undefined"
    )]
    UnboundedSpread,
    #[error("target mean must lie within the score range [{SCORE_MIN}, {SCORE_MAX}], got {0}")]
    TargetMeanOutOfRange(f64),
}

/// Non-fatal configuration findings. The adjustment still runs; the caller
/// is told the resulting scale contradicts the usual higher-raw,
/// higher-adjusted reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigWarning {
    TargetMeanAtOrAboveThreshold { target_mean: f64, threshold: f64 },
    InvertedScale { required_std: f64 },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::TargetMeanAtOrAboveThreshold {
                target_mean,
                threshold,
            } => write!(
                f,
                "target mean {target_mean} is at or above the high-score threshold {threshold}; the fitted spread is zero or negative"
            ),
            ConfigWarning::InvertedScale { required_std } => write!(
                f,
                "fitted spread {required_std} is negative; adjusted ranking is inverted relative to raw scores"
            ),
        }
    }
}

impl AdjustmentConfig {
    pub fn new(target_mean: f64, max_fraction_above: f64, threshold: f64) -> Self {
        Self {
            target_mean,
            max_fraction_above,
            threshold,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_fraction_above > 0.0 && self.max_fraction_above < 1.0) {
            return Err(ConfigError::FractionOutOfRange(self.max_fraction_above));
        }
        if self.max_fraction_above == 0.5 {
            return Err(ConfigError::UnboundedSpread);
        }
        if !(SCORE_MIN..=SCORE_MAX).contains(&self.target_mean) {
            return Err(ConfigError::TargetMeanOutOfRange(self.target_mean));
        }
        Ok(())
    }
}
