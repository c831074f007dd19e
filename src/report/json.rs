use serde::Serialize;

use crate::model::stats::SummaryStatistics;
use crate::report::ReportInput;

#[derive(Debug, Serialize)]
struct SummaryDoc<'a> {
    tool: ToolMeta<'a>,
    week: &'a str,
    column: &'a str,
    config: ConfigDoc,
    fit: FitDoc,
    raw: &'a SummaryStatistics,
    adjusted: &'a SummaryStatistics,
    dropped_entries: usize,
    bands: Vec<BandDoc<'a>>,
    warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lookup: Option<LookupDoc>,
}

#[derive(Debug, Serialize)]
struct ToolMeta<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct ConfigDoc {
    target_mean: f64,
    max_fraction_above: f64,
    threshold: f64,
}

#[derive(Debug, Serialize)]
struct FitDoc {
    raw_mean: f64,
    raw_std_dev: f64,
    z_threshold: f64,
    required_std: f64,
}

#[derive(Debug, Serialize)]
struct BandDoc<'a> {
    label: &'a str,
    lower: f64,
    upper: f64,
    count: usize,
    fraction: f64,
}

#[derive(Debug, Serialize)]
struct LookupDoc {
    raw: f64,
    adjusted: f64,
    rank: usize,
    total: usize,
}

pub fn render_summary_json(input: &ReportInput<'_>) -> serde_json::Result<String> {
    let adjustment = input.adjustment;
    let config = &adjustment.config;

    let doc = SummaryDoc {
        tool: ToolMeta {
            name: &input.tool_name,
            version: &input.tool_version,
        },
        week: input.week,
        column: input.column,
        config: ConfigDoc {
            target_mean: config.target_mean,
            max_fraction_above: config.max_fraction_above,
            threshold: config.threshold,
        },
        fit: FitDoc {
            raw_mean: adjustment.mean,
            raw_std_dev: adjustment.std_dev,
            z_threshold: adjustment.z_threshold,
            required_std: adjustment.required_std,
        },
        raw: input.raw_summary,
        adjusted: input.adjusted_summary,
        dropped_entries: input.dropped,
        bands: input
            .bands
            .iter()
            .map(|band| BandDoc {
                label: band.label,
                lower: band.lower,
                upper: band.upper,
                count: band.count,
                fraction: band.fraction,
            })
            .collect(),
        warnings: adjustment
            .warnings
            .iter()
            .map(|warning| warning.to_string())
            .collect(),
        lookup: input.lookup.map(|found| LookupDoc {
            raw: found.raw,
            adjusted: found.adjusted,
            rank: found.rank,
            total: found.total,
        }),
    };

    serde_json::to_string_pretty(&doc)
}
