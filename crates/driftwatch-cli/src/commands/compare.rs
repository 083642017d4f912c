use clap::Args;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use driftwatch_core::stability::psi::population_stability_index;

use crate::input;

/// Arguments for a single-pair PSI comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to a JSON file with "reference" and "actual" arrays
    #[arg(long)]
    pub input: Option<String>,

    /// Comma-separated reference sample (e.g. "1.2,3.4,5.6")
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub reference: Option<Vec<f64>>,

    /// Comma-separated newly observed sample
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub actual: Option<Vec<f64>>,

    /// Quantile buckets
    #[arg(long, default_value_t = 10)]
    pub bins: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct CompareInput {
    reference: Vec<f64>,
    actual: Vec<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CompareOutput {
    psi: f64,
    bins: usize,
    reference_rows: usize,
    actual_rows: usize,
}

fn get_samples(args: &CompareArgs) -> Result<(Vec<f64>, Vec<f64>), Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        let parsed: CompareInput = input::file::read_json(path)?;
        return Ok((parsed.reference, parsed.actual));
    }
    if let (Some(reference), Some(actual)) = (&args.reference, &args.actual) {
        return Ok((reference.clone(), actual.clone()));
    }
    if let Some(data) = input::stdin::read_stdin()? {
        let parsed: CompareInput = serde_json::from_value(data)?;
        return Ok((parsed.reference, parsed.actual));
    }
    Err("Provide --reference and --actual, or --input file, or pipe JSON via stdin".into())
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (reference, actual) = get_samples(&args)?;

    let psi = population_stability_index(&reference, &actual, args.bins)?;

    let output = CompareOutput {
        psi,
        bins: args.bins,
        reference_rows: reference.len(),
        actual_rows: actual.len(),
    };
    Ok(serde_json::to_value(output)?)
}
