pub mod analyze;
pub mod args;
pub mod chart;
pub mod ingest;
pub mod parse;
pub mod report;
pub mod stats;
pub mod utils;

pub use analyze::{run_analysis, AnalysisResult};
pub use args::{Args, OutputFormat};
pub use parse::{parse_species_data, ParseOutcome};
pub use stats::{compute_indices, DiversityIndices, Record, StatsError};
