use anyhow::Result;
use std::time::Instant;
use tracing::info;

use crate::args::Args;
use crate::chart::Renderer;
use crate::stats::{compute_indices, DiversityIndices, Record};
use crate::{ingest, parse, utils};

#[derive(Debug)]
pub struct AnalysisResult {
    pub records: Vec<Record>,
    pub indices: DiversityIndices,
    pub skipped_lines: u32,
}

/// Run one full analysis: acquire input, parse, guard degenerate datasets,
/// compute the indices. Stateless; identical input gives identical results.
pub fn run_analysis(args: &Args) -> Result<AnalysisResult> {
    let start_time = Instant::now();
    info!(action = "start", component = "analysis", "Starting diversity analysis");

    let input = ingest::read_input(args)?;
    let outcome = parse::parse_species_data(&input);
    info!(
        action = "parse",
        component = "analysis",
        record_count = outcome.records.len(),
        skipped_lines = outcome.skipped_lines,
        "Parsed species data"
    );

    if outcome.records.is_empty() {
        anyhow::bail!("No valid species data found in input");
    }

    let indices = compute_indices(&outcome.records)?;

    let total_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "analysis",
        richness = indices.richness,
        total = indices.total,
        duration_ms = total_time.as_millis(),
        "Analysis completed successfully"
    );

    Ok(AnalysisResult {
        records: outcome.records,
        indices,
        skipped_lines: outcome.skipped_lines,
    })
}

pub fn print_analysis_results(result: &AnalysisResult, args: &Args) {
    println!("\n--- Diversity Analysis ---");
    println!("Species records: {}", result.indices.richness);
    println!(
        "Total individuals: {}",
        utils::format_number(result.indices.total)
    );
    if result.skipped_lines > 0 {
        println!("Lines skipped (malformed): {}", result.skipped_lines);
    }

    println!("\nShannon Index: {:.4}", result.indices.shannon);
    println!("Simpson Index: {:.4}", result.indices.simpson);
    println!("Species Richness: {}", result.indices.richness);

    let mut renderer = Renderer::new();
    if !args.no_chart {
        println!("\nRelative abundance:");
        print!(
            "{}",
            renderer.render_abundance_chart(&result.records, args.chart_width)
        );
    }
    if !args.no_tree {
        println!();
        print!("{}", renderer.render_tree(&args.tree_root, &result.records));
    }

    // Rank by count for the top/bottom listings.
    let mut sorted: Vec<&Record> = result.records.iter().collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));

    if let Some(top_count) = args.top {
        println!(
            "\nTop {} most abundant species:",
            std::cmp::min(top_count, sorted.len())
        );
        for record in sorted.iter().take(top_count) {
            println!(
                "- {}: {} individuals",
                record.name,
                utils::format_number(record.count)
            );
        }
    }

    if let Some(bottom_count) = args.bottom {
        println!(
            "\nBottom {} least abundant species:",
            std::cmp::min(bottom_count, sorted.len())
        );
        for record in sorted.iter().rev().take(bottom_count) {
            println!(
                "- {}: {} individuals",
                record.name,
                utils::format_number(record.count)
            );
        }
    }
}
