use super::*;

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::adjust::lookup::lookup;
use crate::adjust::rescale::adjust;
use crate::adjust::stats::summarize;
use crate::model::config::AdjustmentConfig;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("quizcurve_report_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn sample_adjustment() -> Adjustment {
    adjust(
        &[4.0, 6.0, 8.0, 10.0],
        &AdjustmentConfig::new(7.5, 0.30, 8.0),
    )
    .unwrap()
}

fn render_input<'a>(
    adjustment: &'a Adjustment,
    raw_summary: &'a SummaryStatistics,
    adjusted_summary: &'a SummaryStatistics,
    bands: &'a [BandStat],
    found: Option<&'a ScoreLookup>,
) -> ReportInput<'a> {
    ReportInput {
        week: "week3",
        column: "Grade",
        adjustment,
        raw_summary,
        adjusted_summary,
        bands,
        dropped: 2,
        lookup: found,
        tool_name: "quizcurve".to_string(),
        tool_version: "0.1.0".to_string(),
    }
}

#[test]
fn test_band_counts_partition_the_set() {
    let scores = [0.0, 4.9, 5.0, 6.5, 7.9, 8.0, 9.5, 10.0];
    let bands = band_stats(&scores);
    assert_eq!(bands.len(), BAND_LABELS.len());
    let total: usize = bands.iter().map(|b| b.count).sum();
    assert_eq!(total, scores.len());

    let by_label = |label: &str| bands.iter().find(|b| b.label == label).unwrap().count;
    assert_eq!(by_label("F"), 2);
    assert_eq!(by_label("P"), 1);
    assert_eq!(by_label("H3"), 1);
    assert_eq!(by_label("H2"), 1);
    assert_eq!(by_label("H1"), 1);
    // 10.0 lands in the top band with 9.5
    assert_eq!(by_label("H1+"), 2);
}

#[test]
fn test_band_stats_empty_set() {
    let bands = band_stats(&[]);
    for band in &bands {
        assert_eq!(band.count, 0);
        assert_eq!(band.fraction, 0.0);
    }
}

#[test]
fn test_full_mode_writes_all_files() {
    let adjustment = sample_adjustment();
    let raw_summary = summarize(&adjustment.raw, 8.0).unwrap();
    let adjusted_summary = summarize(&adjustment.adjusted, 8.0).unwrap();
    let bands = band_stats(&adjustment.adjusted);
    let input = render_input(&adjustment, &raw_summary, &adjusted_summary, &bands, None);

    let dir = make_temp_dir();
    write_reports(&input, &dir, ReportMode::Full).unwrap();

    assert!(dir.join("scores.csv").exists());
    assert!(dir.join("summary.json").exists());
    assert!(dir.join("report.txt").exists());

    let csv = fs::read_to_string(dir.join("scores.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("original_score,adjusted_score"));
    assert_eq!(lines.next(), Some("4.00,6.22"));
    assert_eq!(csv.lines().count(), 1 + adjustment.raw.len());
}

#[test]
fn test_summary_mode_skips_per_student_csv() {
    let adjustment = sample_adjustment();
    let raw_summary = summarize(&adjustment.raw, 8.0).unwrap();
    let adjusted_summary = summarize(&adjustment.adjusted, 8.0).unwrap();
    let bands = band_stats(&adjustment.adjusted);
    let input = render_input(&adjustment, &raw_summary, &adjusted_summary, &bands, None);

    let dir = make_temp_dir();
    write_reports(&input, &dir, ReportMode::Summary).unwrap();

    assert!(!dir.join("scores.csv").exists());
    assert!(dir.join("summary.json").exists());
    assert!(dir.join("report.txt").exists());
}

#[test]
fn test_summary_json_shape() {
    let adjustment = sample_adjustment();
    let raw_summary = summarize(&adjustment.raw, 8.0).unwrap();
    let adjusted_summary = summarize(&adjustment.adjusted, 8.0).unwrap();
    let bands = band_stats(&adjustment.adjusted);
    let found = lookup(7.0, &adjustment);
    let input = render_input(
        &adjustment,
        &raw_summary,
        &adjusted_summary,
        &bands,
        Some(&found),
    );

    let rendered = json::render_summary_json(&input).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(doc["tool"]["name"], "quizcurve");
    assert_eq!(doc["week"], "week3");
    assert_eq!(doc["config"]["target_mean"], 7.5);
    assert_eq!(doc["raw"]["count"], 4);
    assert_eq!(doc["bands"].as_array().unwrap().len(), BAND_LABELS.len());
    assert_eq!(doc["dropped_entries"], 2);
    assert_eq!(doc["lookup"]["rank"], 3);
    assert!((doc["fit"]["required_std"].as_f64().unwrap() - 0.9535).abs() < 1e-3);
}

#[test]
fn test_summary_json_omits_absent_lookup() {
    let adjustment = sample_adjustment();
    let raw_summary = summarize(&adjustment.raw, 8.0).unwrap();
    let adjusted_summary = summarize(&adjustment.adjusted, 8.0).unwrap();
    let bands = band_stats(&adjustment.adjusted);
    let input = render_input(&adjustment, &raw_summary, &adjusted_summary, &bands, None);

    let rendered = json::render_summary_json(&input).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert!(doc.get("lookup").is_none());
}

#[test]
fn test_text_report_sections() {
    let adjustment = sample_adjustment();
    let raw_summary = summarize(&adjustment.raw, 8.0).unwrap();
    let adjusted_summary = summarize(&adjustment.adjusted, 8.0).unwrap();
    let bands = band_stats(&adjustment.adjusted);
    let found = lookup(9.0, &adjustment);
    let input = render_input(
        &adjustment,
        &raw_summary,
        &adjusted_summary,
        &bands,
        Some(&found),
    );

    let rendered = text::render_report_text(&input);
    for section in [
        "1. Cohort",
        "2. Raw distribution",
        "3. Adjustment fit",
        "4. Adjusted distribution",
        "5. Grade bands (adjusted)",
        "6. Configuration notes",
        "7. Score lookup",
    ] {
        assert!(rendered.contains(section), "missing section: {section}");
    }
    assert!(rendered.contains("Week: week3"));
    assert!(rendered.contains("(none)"));
    assert!(rendered.contains("H1+"));
}

#[test]
fn test_text_report_lists_warnings() {
    let adjustment = adjust(
        &[2.0, 5.0, 8.0],
        &AdjustmentConfig::new(9.0, 0.30, 8.0),
    )
    .unwrap();
    let raw_summary = summarize(&adjustment.raw, 8.0).unwrap();
    let adjusted_summary = summarize(&adjustment.adjusted, 8.0).unwrap();
    let bands = band_stats(&adjustment.adjusted);
    let input = render_input(&adjustment, &raw_summary, &adjusted_summary, &bands, None);

    let rendered = text::render_report_text(&input);
    assert!(rendered.contains("Warning:"));
    assert!(!rendered.contains("(none)"));
}

#[test]
fn test_two_decimal_rounding_in_csv() {
    let dir = make_temp_dir();
    let path = dir.join("scores.csv");
    csv::write_scores_csv(&[6.666, 3.0], &[7.125, 4.5], &path).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "original_score,adjusted_score\n6.67,7.12\n3.00,4.50\n"
    );
}
