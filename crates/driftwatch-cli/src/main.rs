mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::compare::CompareArgs;
use commands::scan::ScanArgs;

/// Population Stability Index drift detection for tabular datasets
#[derive(Parser)]
#[command(
    name = "driftwatch",
    version,
    about = "Population Stability Index drift detection for tabular datasets",
    long_about = "Computes the Population Stability Index between a reference \
                  (training) dataset and a newly observed one, per numeric \
                  feature, binning both by the reference distribution's \
                  quantiles. Writes a JSON drift report per feature."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every shared numeric feature of two datasets and write a report
    Scan(ScanArgs),
    /// Compute PSI for a single pair of numeric samples
    Compare(CompareArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Scan(args) => commands::scan::run_scan(args),
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::Version => {
            println!("driftwatch {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
