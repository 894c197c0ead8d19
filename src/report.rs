use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::analyze::AnalysisResult;
use crate::args::OutputFormat;
use crate::stats::Record;

#[derive(Serialize)]
struct ReportDocument<'a> {
    generated: String,
    shannon: f64,
    simpson: f64,
    richness: usize,
    total_individuals: u64,
    skipped_lines: u32,
    species: &'a [Record],
}

fn generated_stamp() -> String {
    chrono::Local::now().format("%B %-d, %Y %H:%M").to_string()
}

/// The plain-text results document. Indices are shown to 4 decimal places;
/// the engine itself stays full-precision.
pub fn results_text(result: &AnalysisResult) -> String {
    let mut doc = String::new();
    doc.push_str("Ecological Diversity Analysis Results\n");
    doc.push_str(&format!("Generated: {}\n\n", generated_stamp()));
    doc.push_str(&format!("Shannon Index: {:.4}\n", result.indices.shannon));
    doc.push_str(&format!("Simpson Index: {:.4}\n", result.indices.simpson));
    doc.push_str(&format!("Species Richness: {}\n", result.indices.richness));
    doc.push_str(&format!(
        "Total Individuals: {}\n",
        crate::utils::format_number(result.indices.total)
    ));
    doc
}

/// The same document as JSON, for machine consumption.
pub fn results_json(result: &AnalysisResult) -> Result<String> {
    let doc = ReportDocument {
        generated: generated_stamp(),
        shannon: result.indices.shannon,
        simpson: result.indices.simpson,
        richness: result.indices.richness,
        total_individuals: result.indices.total,
        skipped_lines: result.skipped_lines,
        species: &result.records,
    };
    serde_json::to_string_pretty(&doc).context("Failed to serialize results")
}

/// Write the results document to a file, the export analog of the on-screen
/// summary.
pub fn write_report(result: &AnalysisResult, path: &Path, format: OutputFormat) -> Result<()> {
    let contents = match format {
        OutputFormat::Text => results_text(result),
        OutputFormat::Json => results_json(result)?,
    };

    fs::write(path, contents)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!(action = "export", component = "report", file_path = ?path, format = ?format, "Report written");
    Ok(())
}
