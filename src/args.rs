use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ecodiv",
    about = "Compute ecological diversity indices (Shannon, Simpson, richness) from species abundance data",
    version,
    long_about = None
)]
pub struct Args {
    /// Species data file: `name,count` / `name: count` lines, or a
    /// header-less two-column CSV. Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Analyze the embedded sample dataset instead of reading input
    #[arg(long)]
    pub sample: bool,

    /// Number of most abundant species to list
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Number of least abundant species to list
    #[arg(long)]
    pub bottom: Option<usize>,

    /// Output format for the results
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the results report to this file
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Skip the abundance chart
    #[arg(long)]
    pub no_chart: bool,

    /// Skip the hierarchy tree
    #[arg(long)]
    pub no_tree: bool,

    /// Chart width in characters
    #[arg(long, default_value_t = 40)]
    pub chart_width: usize,

    /// Label for the root of the hierarchy tree
    #[arg(long, default_value = "Community")]
    pub tree_root: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
