use tracing::warn;

use crate::adjust::AdjustError;
use crate::adjust::normal::normal_quantile;
use crate::model::clip_score;
use crate::model::config::{AdjustmentConfig, ConfigWarning};

/// Outcome of one batch adjustment. Carries the batch statistics so a later
/// single-score lookup reuses them instead of recomputing.
#[derive(Debug, Clone)]
pub struct Adjustment {
    /// Raw scores after clipping to the score range, original order.
    pub raw: Vec<f64>,
    /// Adjusted scores, index-aligned with `raw`.
    pub adjusted: Vec<f64>,
    /// Population mean of the clipped raw scores.
    pub mean: f64,
    /// Population standard deviation of the clipped raw scores.
    pub std_dev: f64,
    /// z-value with `max_fraction_above` of standard normal mass above it.
    pub z_threshold: f64,
    /// Spread that places `threshold` at `z_threshold` above the target mean.
    pub required_std: f64,
    pub config: AdjustmentConfig,
    pub warnings: Vec<ConfigWarning>,
}

/// Rescales a batch of raw scores so the adjusted mean lands on
/// `target_mean` and, under a standard normal model of the standardized
/// scores, the share at or above `threshold` equals `max_fraction_above`.
///
/// The cap is solved in closed form from the normal quantile, so on real
/// rosters (non-normal, or clipped at the score range) the empirical share
/// above the threshold only approximates the configured cap. That is a
/// property of the fit, not a defect.
pub fn adjust(
    raw_scores: &[f64],
    config: &AdjustmentConfig,
) -> Result<Adjustment, AdjustError> {
    config.validate()?;

    if raw_scores.is_empty() {
        return Err(AdjustError::EmptyInput);
    }

    let raw: Vec<f64> = raw_scores.iter().map(|&s| clip_score(s)).collect();

    let n = raw.len() as f64;
    let mean = raw.iter().sum::<f64>() / n;
    let variance = raw.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    if !variance.is_finite() || variance <= 0.0 {
        return Err(AdjustError::DegenerateInput);
    }
    let std_dev = variance.sqrt();

    let z_threshold = normal_quantile(1.0 - config.max_fraction_above);
    let required_std = (config.threshold - config.target_mean) / z_threshold;

    let mut warnings = Vec::new();
    if config.target_mean >= config.threshold {
        warnings.push(ConfigWarning::TargetMeanAtOrAboveThreshold {
            target_mean: config.target_mean,
            threshold: config.threshold,
        });
    }
    if required_std < 0.0 {
        warnings.push(ConfigWarning::InvertedScale { required_std });
    }
    for warning in &warnings {
        warn!("{warning}");
    }

    let adjusted = raw
        .iter()
        .map(|&score| {
            let z = (score - mean) / std_dev;
            clip_score(z * required_std + config.target_mean)
        })
        .collect();

    Ok(Adjustment {
        raw,
        adjusted,
        mean,
        std_dev,
        z_threshold,
        required_std,
        config: *config,
        warnings,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/adjust/rescale.rs"]
mod tests;
