use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::warn;

use crate::input::InputError;
use crate::model::clip_score;

#[derive(Debug, Clone)]
pub struct ParsedColumn {
    pub column: String,
    pub scores: Vec<f64>,
    pub dropped: usize,
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Extracts the first column of a score CSV. The first line is always a
/// header; data entries that are missing, non-numeric, or non-finite are
/// dropped with a warning, everything else is clamped to the score range.
pub fn parse_score_column(path: &Path) -> Result<ParsedColumn, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();

    let read = reader.read_line(&mut buf)?;
    if read == 0 {
        return Err(InputError::Parse(format!(
            "score file {} is empty",
            path.display()
        )));
    }
    let column = first_field(buf.trim_end()).to_string();

    let mut scores = Vec::new();
    let mut dropped = 0usize;
    let mut line_no = 1usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.is_empty() {
            continue;
        }
        let field = first_field(line);
        match field.parse::<f64>() {
            Ok(value) if value.is_finite() => scores.push(clip_score(value)),
            _ if field.is_empty() => {
                dropped += 1;
                warn!("missing score; skipping (line {line_no})");
            }
            _ => {
                dropped += 1;
                warn!("non-numeric score {field:?}; skipping (line {line_no})");
            }
        }
    }

    Ok(ParsedColumn {
        column,
        scores,
        dropped,
    })
}

fn first_field(line: &str) -> &str {
    line.split(',').next().unwrap_or("").trim()
}
