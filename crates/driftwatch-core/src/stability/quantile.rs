use crate::error::DriftError;
use crate::DriftResult;

/// Quantile of a **sorted** slice at probability `q` in [0, 1], using
/// linear interpolation between order statistics.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = q * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let frac = rank - lower as f64;
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

/// Candidate bin edges for `sample`: its quantiles at `bins + 1` evenly
/// spaced probabilities over [0, 1] inclusive, deduplicated while
/// preserving ascending order.
///
/// Repeated values in the sample make neighbouring quantiles coincide, so
/// the result may hold fewer than `bins + 1` edges — the sample's own
/// sparsity sets the binning resolution. A constant sample collapses to a
/// single edge.
pub fn quantile_edges(sample: &[f64], bins: usize) -> DriftResult<Vec<f64>> {
    if sample.is_empty() {
        return Err(DriftError::InsufficientData(
            "At least 1 observation required to derive quantile edges".into(),
        ));
    }
    if bins == 0 {
        return Err(DriftError::InvalidInput {
            field: "bins".into(),
            reason: "At least 1 bucket required".into(),
        });
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut edges: Vec<f64> = Vec::with_capacity(bins + 1);
    for i in 0..=bins {
        let q = i as f64 / bins as f64;
        let value = quantile_sorted(&sorted, q);
        // quantiles are monotone in q, so comparing against the last
        // kept edge is enough to deduplicate
        if edges.last().is_none_or(|last| value > *last) {
            edges.push(value);
        }
    }

    Ok(edges)
}
