mod adjust;
mod input;
mod logging;
mod model;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{error, info};

use crate::adjust::AdjustError;
use crate::adjust::lookup::{ScoreLookup, lookup};
use crate::adjust::rescale::adjust;
use crate::adjust::stats::summarize;
use crate::input::{InputError, load_week_scores};
use crate::model::DEFAULT_THRESHOLD;
use crate::model::config::AdjustmentConfig;
use crate::report::{ReportInput, ReportMode, band_stats, write_reports};

#[derive(Parser)]
#[command(
    name = "quizcurve",
    version,
    about = "Rescales weekly quiz scores to a target mean with a cap on the high-score share"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Adjust one week's scores and write the reports.
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Directory holding the week score files (<week>.csv or <week>.csv.gz).
    #[arg(long)]
    data: PathBuf,

    /// Week identifier, e.g. week3.
    #[arg(long)]
    week: String,

    /// Output directory for the reports.
    #[arg(long)]
    out: PathBuf,

    /// Desired mean of the adjusted scores.
    #[arg(long, default_value_t = 7.5)]
    target_mean: f64,

    /// Cap on the fraction of adjusted scores at or above the threshold.
    #[arg(long, default_value_t = 0.30)]
    max_above: f64,

    /// High-achievement cutoff the cap applies to.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Raw score to rescale and rank against the batch.
    #[arg(long)]
    lookup: Option<f64>,

    /// Report granularity.
    #[arg(long, value_enum, default_value_t = ReportModeArg::Full)]
    mode: ReportModeArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportModeArg {
    /// Per-student scores.csv plus summary.json and report.txt.
    Full,
    /// summary.json and report.txt only.
    Summary,
}

impl From<ReportModeArg> for ReportMode {
    fn from(value: ReportModeArg) -> Self {
        match value {
            ReportModeArg::Full => ReportMode::Full,
            ReportModeArg::Summary => ReportMode::Summary,
        }
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Adjust(#[from] AdjustError),
    #[error("lookup score {0} is not a finite number")]
    NonFiniteLookup(f64),
    #[error("failed to write reports: {0}")]
    Report(#[from] std::io::Error),
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let Command::Run(args) = cli.command;
    if let Err(err) = run(&args) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), AppError> {
    let week_scores = load_week_scores(&args.data, &args.week)?;
    info!(
        "adjusting {} scores from {}",
        week_scores.scores.len(),
        week_scores.path.display()
    );

    let config = AdjustmentConfig::new(args.target_mean, args.max_above, args.threshold);
    let adjustment = adjust(&week_scores.scores, &config)?;

    let raw_summary = summarize(&adjustment.raw, config.threshold)?;
    let adjusted_summary = summarize(&adjustment.adjusted, config.threshold)?;
    let bands = band_stats(&adjustment.adjusted);

    let found: Option<ScoreLookup> = match args.lookup {
        Some(score) if !score.is_finite() => return Err(AppError::NonFiniteLookup(score)),
        Some(score) => Some(lookup(score, &adjustment)),
        None => None,
    };
    if let Some(found) = &found {
        println!(
            "Adjusted score: {:.2} (rank {} of {})",
            found.adjusted, found.rank, found.total
        );
    }

    let report_input = ReportInput {
        week: &week_scores.week,
        column: &week_scores.column,
        adjustment: &adjustment,
        raw_summary: &raw_summary,
        adjusted_summary: &adjusted_summary,
        bands: &bands,
        dropped: week_scores.dropped,
        lookup: found.as_ref(),
        tool_name: "quizcurve".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&report_input, &args.out, args.mode.into())?;
    info!("reports written: dir={}", args.out.display());

    Ok(())
}
