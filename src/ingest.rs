use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::args::Args;

// Embedded sample community for --sample runs.
const SAMPLE_DATASET: &str = include_str!("../sample_species.txt");

/// Acquire the raw species text for one analysis run.
///
/// `.csv` files go through the tabular reader and are re-emitted as
/// `name: count` lines; everything else (plain files, stdin, the embedded
/// sample) is handed to the parser as-is.
pub fn read_input(args: &Args) -> Result<String> {
    if args.sample {
        info!(
            action = "load",
            component = "ingest",
            source = "embedded_sample",
            "Using embedded sample dataset"
        );
        return Ok(SAMPLE_DATASET.to_string());
    }

    match &args.input {
        Some(path) if is_csv(path) => {
            info!(action = "load", component = "ingest", file_path = ?path, "Reading CSV input");
            let file = fs::File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            csv_to_lines(file)
        }
        Some(path) => {
            info!(action = "load", component = "ingest", file_path = ?path, "Reading text input");
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            info!(
                action = "load",
                component = "ingest",
                source = "stdin",
                "Reading species data from stdin"
            );
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read species data from stdin")?;
            Ok(buf)
        }
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

/// Re-format a header-less two-column table as `name: count` lines.
///
/// Rows with fewer than two columns or an empty first or second cell are
/// ignored here; anything else is left for the parser to judge.
pub fn csv_to_lines<R: Read>(reader: R) -> Result<String> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut formatted = String::new();
    for row in csv_reader.records() {
        let row = row.context("Failed to read CSV row")?;
        let name = row.get(0).unwrap_or("");
        let count = row.get(1).unwrap_or("");
        if row.len() >= 2 && !name.is_empty() && !count.is_empty() {
            let _ = writeln!(formatted, "{name}: {count}");
        }
    }

    Ok(formatted)
}
