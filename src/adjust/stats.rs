use crate::adjust::AdjustError;
use crate::model::stats::SummaryStatistics;

/// Summarizes any score set: count, mean, population standard deviation,
/// and the share of elements at or above `threshold`.
pub fn summarize(scores: &[f64], threshold: f64) -> Result<SummaryStatistics, AdjustError> {
    if scores.is_empty() {
        return Err(AdjustError::EmptyInput);
    }

    let n = scores.len() as f64;
    let mean = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let mut above = 0usize;
    for &score in scores {
        if score >= threshold {
            above += 1;
        }
    }

    Ok(SummaryStatistics {
        count: scores.len(),
        mean,
        std_dev,
        fraction_at_or_above: above as f64 / n,
    })
}
