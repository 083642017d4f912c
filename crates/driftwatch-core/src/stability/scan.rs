use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::frame::Frame;
use crate::types::{with_metadata, ComputationOutput};
use crate::DriftResult;

use super::psi::{population_stability_index, DEFAULT_BINS};

/// Input for a per-feature drift scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftScanInput {
    /// Reference (training) dataset
    pub reference: Frame,
    /// Newly observed dataset
    pub actual: Frame,
    /// Label column excluded from drift scoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Requested quantile buckets per feature
    #[serde(default = "default_bins")]
    pub bins: usize,
}

fn default_bins() -> usize {
    DEFAULT_BINS
}

/// Drift score for one feature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureDrift {
    pub feature: String,
    pub psi: f64,
}

/// Output of a drift scan, features in reference column order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftScanOutput {
    pub features: Vec<FeatureDrift>,
}

/// Score every feature shared by both datasets.
///
/// Walks the reference dataset's columns in order and computes PSI for
/// each one that is numeric in both datasets, is present in `actual`, and
/// is not the target label. Skipped columns produce no entry in the
/// output, only a warning on the envelope.
pub fn scan_features(input: &DriftScanInput) -> DriftResult<ComputationOutput<DriftScanOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    let mut features: Vec<FeatureDrift> = Vec::new();

    for (name, column) in input.reference.iter() {
        if input.target.as_deref() == Some(name) {
            continue;
        }
        let Some(actual_column) = input.actual.get(name) else {
            warnings.push(format!("Column '{name}' absent from actual dataset, skipped"));
            continue;
        };
        let Some(reference_values) = column.as_numeric() else {
            warnings.push(format!(
                "Column '{name}' not numeric in reference dataset, skipped"
            ));
            continue;
        };
        let Some(actual_values) = actual_column.as_numeric() else {
            warnings.push(format!(
                "Column '{name}' not numeric in actual dataset, skipped"
            ));
            continue;
        };

        let psi = population_stability_index(reference_values, actual_values, input.bins)?;
        features.push(FeatureDrift {
            feature: name.to_string(),
            psi,
        });
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Population Stability Index (quantile buckets over the reference distribution)",
        &serde_json::json!({
            "bins": input.bins,
            "target": input.target,
            "reference_columns": input.reference.len(),
            "actual_columns": input.actual.len(),
        }),
        warnings,
        elapsed,
        DriftScanOutput { features },
    ))
}
