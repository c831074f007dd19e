use crate::adjust::rescale::Adjustment;
use crate::model::clip_score;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreLookup {
    /// The queried score after clipping to the score range.
    pub raw: f64,
    pub adjusted: f64,
    /// Competition rank: 1 is the top scorer; ties share a rank.
    pub rank: usize,
    pub total: usize,
}

/// Rescales one score with the batch statistics already fitted by
/// [`crate::adjust::rescale::adjust`] and ranks it against the batch. The
/// batch mean and standard deviation are reused, never recomputed.
pub fn lookup(user_raw_score: f64, adjustment: &Adjustment) -> ScoreLookup {
    let raw = clip_score(user_raw_score);
    let z = (raw - adjustment.mean) / adjustment.std_dev;
    let adjusted = clip_score(z * adjustment.required_std + adjustment.config.target_mean);

    let mut higher = 0usize;
    for &score in &adjustment.adjusted {
        if score > adjusted {
            higher += 1;
        }
    }

    ScoreLookup {
        raw,
        adjusted,
        rank: higher + 1,
        total: adjustment.adjusted.len(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/adjust/lookup.rs"]
mod tests;
