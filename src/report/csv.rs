use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Per-student export: one row per score pair, two decimals for display.
pub fn write_scores_csv(raw: &[f64], adjusted: &[f64], path: &Path) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "original_score,adjusted_score")?;
    for (original, new) in raw.iter().zip(adjusted) {
        writeln!(out, "{:.2},{:.2}", original, new)?;
    }
    out.flush()
}
