pub mod histogram;
pub mod psi;
pub mod quantile;
pub mod scan;

pub use psi::{population_stability_index, DEFAULT_BINS};
pub use scan::{scan_features, DriftScanInput, DriftScanOutput, FeatureDrift};
