use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub mod csv;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no score file for {week}: tried {tried}")]
    MissingWeek { week: String, tried: String },
    #[error("parse error: {0}")]
    Parse(String),
}

/// One week's cleaned scores as handed to the adjuster: first CSV column,
/// header skipped, unusable entries dropped, survivors clamped to the score
/// range. May be empty; the adjuster decides what that means.
#[derive(Debug, Clone)]
pub struct WeekScores {
    pub week: String,
    pub path: PathBuf,
    /// Header name of the score column.
    pub column: String,
    pub scores: Vec<f64>,
    /// Entries discarded as non-numeric or missing.
    pub dropped: usize,
}

pub fn load_week_scores(data_dir: &Path, week: &str) -> Result<WeekScores, InputError> {
    let path = find_week_file(data_dir, week)?;
    info!("loading scores: week={}, file={}", week, path.display());

    let parsed = csv::parse_score_column(&path)?;
    info!(
        "loaded {} valid scores for {} ({} entries dropped)",
        parsed.scores.len(),
        week,
        parsed.dropped
    );

    Ok(WeekScores {
        week: week.to_string(),
        path,
        column: parsed.column,
        scores: parsed.scores,
        dropped: parsed.dropped,
    })
}

fn find_week_file(data_dir: &Path, week: &str) -> Result<PathBuf, InputError> {
    let candidates = [format!("{week}.csv"), format!("{week}.csv.gz")];
    for name in &candidates {
        let path = data_dir.join(name);
        if path.exists() {
            return Ok(path);
        }
    }
    Err(InputError::MissingWeek {
        week: week.to_string(),
        tried: candidates.join(", "),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
