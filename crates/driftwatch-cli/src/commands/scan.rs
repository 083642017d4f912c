use clap::Args;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

use driftwatch_core::stability::scan::{scan_features, DriftScanInput};

use crate::input;

/// Arguments for a dataset drift scan
#[derive(Args)]
pub struct ScanArgs {
    /// Reference (training) dataset CSV
    #[arg(long, default_value = "data/processed/train.csv")]
    pub train: String,

    /// Newly observed dataset CSV
    #[arg(long = "new", default_value = "data/processed/test.csv")]
    pub new_data: String,

    /// Destination for the JSON report
    #[arg(long, default_value = "artifacts/psi.json")]
    pub out: String,

    /// Quantile buckets per feature
    #[arg(long, default_value_t = 10)]
    pub bins: usize,

    /// Label column to exclude from the scan
    #[arg(long)]
    pub target: Option<String>,
}

pub fn run_scan(args: ScanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let reference = input::csv::read_frame(&args.train)?;
    let actual = input::csv::read_frame(&args.new_data)?;

    let scan_input = DriftScanInput {
        reference,
        actual,
        target: args.target,
        bins: args.bins,
    };
    let output = scan_features(&scan_input)?;

    // the report file carries just the feature -> PSI mapping, keys in
    // reference column order
    let mut psi_map = serde_json::Map::new();
    for feature in &output.result.features {
        psi_map.insert(feature.feature.clone(), json!(feature.psi));
    }
    let report = json!({ "psi": psi_map });

    if let Some(parent) = Path::new(&args.out).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create '{}': {}", parent.display(), e))?;
        }
    }
    fs::write(&args.out, serde_json::to_string_pretty(&report)?)
        .map_err(|e| format!("Failed to write '{}': {}", args.out, e))?;
    eprintln!("PSI report saved to {}", args.out);

    Ok(serde_json::to_value(output)?)
}
