use anyhow::Result;
use clap::Parser;
use tracing::error;

use ecodiv::args::OutputFormat;
use ecodiv::{analyze, report, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    match analyze::run_analysis(&args) {
        Ok(result) => {
            match args.format {
                OutputFormat::Text => analyze::print_analysis_results(&result, &args),
                OutputFormat::Json => println!("{}", report::results_json(&result)?),
            }

            if let Some(path) = &args.report {
                report::write_report(&result, path, args.format)?;
                println!("Results written to {}", path.display());
            }

            Ok(())
        }
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
