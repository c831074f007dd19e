use crate::report::{ReportInput, format_f64_2, format_f64_6};

pub fn render_report_text(input: &ReportInput<'_>) -> String {
    let mut out = String::new();
    let adjustment = input.adjustment;
    let config = &adjustment.config;

    out.push_str("Weekly Quiz Score Adjustment Report\n");
    out.push_str("===================================\n\n");

    out.push_str("1. Cohort\n");
    out.push_str(&format!("Week: {}\n", input.week));
    out.push_str(&format!("Score column: {}\n", input.column));
    out.push_str(&format!("Valid scores: {}\n", input.raw_summary.count));
    out.push_str(&format!("Dropped entries: {}\n\n", input.dropped));

    out.push_str("2. Raw distribution\n");
    push_summary(&mut out, input.raw_summary, config.threshold);
    out.push('\n');

    out.push_str("3. Adjustment fit\n");
    out.push_str(&format!(
        "Target mean: {}\n",
        format_f64_6(config.target_mean)
    ));
    out.push_str(&format!(
        "High-score cap: {}\n",
        format_f64_6(config.max_fraction_above)
    ));
    out.push_str(&format!(
        "z threshold: {}\n",
        format_f64_6(adjustment.z_threshold)
    ));
    out.push_str(&format!(
        "Required std dev: {}\n\n",
        format_f64_6(adjustment.required_std)
    ));

    out.push_str("4. Adjusted distribution\n");
    push_summary(&mut out, input.adjusted_summary, config.threshold);
    out.push('\n');

    out.push_str("5. Grade bands (adjusted)\n");
    for band in input.bands {
        out.push_str(&format!(
            "{:<3} [{}, {}{}: {} ({})\n",
            band.label,
            format_f64_2(band.lower),
            format_f64_2(band.upper),
            if band.upper >= crate::model::SCORE_MAX {
                "]"
            } else {
                ")"
            },
            band.count,
            format_f64_6(band.fraction)
        ));
    }
    out.push('\n');

    out.push_str("6. Configuration notes\n");
    if adjustment.warnings.is_empty() {
        out.push_str("(none)\n");
    } else {
        for warning in &adjustment.warnings {
            out.push_str(&format!("Warning: {warning}\n"));
        }
    }

    if let Some(found) = input.lookup {
        out.push('\n');
        out.push_str("7. Score lookup\n");
        out.push_str(&format!("Raw score: {}\n", format_f64_2(found.raw)));
        out.push_str(&format!(
            "Adjusted score: {}\n",
            format_f64_2(found.adjusted)
        ));
        out.push_str(&format!("Rank: {} of {}\n", found.rank, found.total));
    }

    out
}

fn push_summary(
    out: &mut String,
    summary: &crate::model::stats::SummaryStatistics,
    threshold: f64,
) {
    out.push_str(&format!("Mean: {}\n", format_f64_6(summary.mean)));
    out.push_str(&format!("Std dev: {}\n", format_f64_6(summary.std_dev)));
    out.push_str(&format!(
        "Share >= {}: {}\n",
        format_f64_2(threshold),
        format_f64_6(summary.fraction_at_or_above)
    ));
}
