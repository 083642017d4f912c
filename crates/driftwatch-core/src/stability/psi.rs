use crate::error::DriftError;
use crate::DriftResult;

use super::histogram::bin_counts;
use super::quantile::quantile_edges;

/// Default number of quantile buckets.
pub const DEFAULT_BINS: usize = 10;

/// Lower clip bound for bucket probabilities, preventing log(0) and 0/0.
const PROB_FLOOR: f64 = 1e-6;

/// Population Stability Index between a reference sample and a newly
/// observed one.
///
/// Buckets are the reference sample's quantiles at `bins + 1` evenly
/// spaced probabilities (duplicates collapsed), both samples are counted
/// into them, and the bucket shares are compared with
/// `sum((a - e) * ln(a / e))`. Values of `actual` outside the reference's
/// observed range fall into no bucket: PSI measures shift within the
/// reference's historical envelope.
///
/// Always finite for non-empty samples of finite values and `bins >= 1`:
/// an empty bucket clips to 1e-6 rather than producing an infinite log
/// term, and a sample with no in-range values normalizes against 1
/// instead of its zero total.
pub fn population_stability_index(
    reference: &[f64],
    actual: &[f64],
    bins: usize,
) -> DriftResult<f64> {
    if reference.is_empty() {
        return Err(DriftError::InsufficientData(
            "Reference sample must not be empty".into(),
        ));
    }
    if actual.is_empty() {
        return Err(DriftError::InsufficientData(
            "Actual sample must not be empty".into(),
        ));
    }

    let mut edges = quantile_edges(reference, bins)?;
    if edges.len() < 2 {
        // constant reference: every quantile coincides, leaving a single
        // point bucket at that value
        edges.push(edges[0]);
    }

    let expected = clipped_shares(&bin_counts(reference, &edges));
    let observed = clipped_shares(&bin_counts(actual, &edges));

    Ok(expected
        .iter()
        .zip(observed.iter())
        .map(|(e, a)| (a - e) * (a / e).ln())
        .sum())
}

/// Bucket counts as shares of their own total, clipped into
/// [`PROB_FLOOR`, 1]. A zero total divides by 1 instead, yielding an
/// all-floor vector after clipping.
fn clipped_shares(counts: &[u64]) -> Vec<f64> {
    let total = counts.iter().sum::<u64>().max(1) as f64;
    counts
        .iter()
        .map(|&c| (c as f64 / total).clamp(PROB_FLOOR, 1.0))
        .collect()
}
