use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::adjust::lookup::ScoreLookup;
use crate::adjust::rescale::Adjustment;
use crate::model::stats::SummaryStatistics;

pub mod csv;
pub mod json;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Full,
    Summary,
}

/// Grade bands of the course scheme over the edges [0, 5, 6, 7, 8, 9, 10];
/// the last band includes its upper edge.
pub const BAND_EDGES: [f64; 7] = [0.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
pub const BAND_LABELS: [&str; 6] = ["F", "P", "H3", "H2", "H1", "H1+"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandStat {
    pub label: &'static str,
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    pub fraction: f64,
}

pub fn band_stats(scores: &[f64]) -> Vec<BandStat> {
    let n_bands = BAND_LABELS.len();
    let mut counts = vec![0usize; n_bands];
    for &score in scores {
        // scores are clamped, so only the top edge needs the catch-all
        let mut idx = n_bands - 1;
        for band in 0..n_bands {
            if score >= BAND_EDGES[band] && score < BAND_EDGES[band + 1] {
                idx = band;
                break;
            }
        }
        counts[idx] += 1;
    }

    let total = scores.len();
    let mut out = Vec::with_capacity(n_bands);
    for band in 0..n_bands {
        let fraction = if total == 0 {
            0.0
        } else {
            counts[band] as f64 / total as f64
        };
        out.push(BandStat {
            label: BAND_LABELS[band],
            lower: BAND_EDGES[band],
            upper: BAND_EDGES[band + 1],
            count: counts[band],
            fraction,
        });
    }
    out
}

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub week: &'a str,
    pub column: &'a str,
    pub adjustment: &'a Adjustment,
    pub raw_summary: &'a SummaryStatistics,
    pub adjusted_summary: &'a SummaryStatistics,
    pub bands: &'a [BandStat],
    pub dropped: usize,
    pub lookup: Option<&'a ScoreLookup>,

    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(
    input: &ReportInput<'_>,
    out_dir: &Path,
    mode: ReportMode,
) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    if mode == ReportMode::Full {
        let scores_path = out_dir.join("scores.csv");
        csv::write_scores_csv(&input.adjustment.raw, &input.adjustment.adjusted, &scores_path)?;
    }

    let summary_path = out_dir.join("summary.json");
    let summary = json::render_summary_json(input).map_err(std::io::Error::other)?;
    write_text(&summary_path, &summary)?;

    let report_path = out_dir.join("report.txt");
    let report = text::render_report_text(input);
    write_text(&report_path, &report)?;

    Ok(())
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(content.as_bytes())?;
    file.flush()
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
