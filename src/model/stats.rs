use serde::Serialize;

/// Distribution summary of one score set, raw or adjusted. Standard
/// deviation is the population form (denominator n): the roster is the
/// whole population, not a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub fraction_at_or_above: f64,
}
