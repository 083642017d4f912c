use driftwatch_core::stability::psi::population_stability_index;
use driftwatch_core::stability::quantile::quantile_edges;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::Normal;

// ===========================================================================
// PSI — identity and invariance properties
// ===========================================================================

fn decile_reference() -> Vec<f64> {
    (1..=100).map(f64::from).collect()
}

#[test]
fn test_identical_samples_zero_for_any_bucket_count() {
    let sample = decile_reference();
    for bins in 1..=20 {
        let psi = population_stability_index(&sample, &sample, bins).unwrap();
        assert_eq!(psi, 0.0, "identical histograms must cancel at bins={bins}");
    }
}

#[test]
fn test_shift_invariance() {
    let reference = decile_reference();
    let actual: Vec<f64> = reference.iter().map(|v| v * 1.1 + 3.0).collect();

    let base = population_stability_index(&reference, &actual, 10).unwrap();

    let shifted_ref: Vec<f64> = reference.iter().map(|v| v + 250.0).collect();
    let shifted_act: Vec<f64> = actual.iter().map(|v| v + 250.0).collect();
    let shifted = population_stability_index(&shifted_ref, &shifted_act, 10).unwrap();

    // quantile-rank membership is unchanged by a common shift
    assert!(
        (base - shifted).abs() < 1e-9,
        "psi changed under common shift: {base} vs {shifted}"
    );
}

#[test]
fn test_scale_invariance() {
    let reference = decile_reference();
    let actual: Vec<f64> = reference.iter().rev().take(60).copied().collect();

    let base = population_stability_index(&reference, &actual, 10).unwrap();

    let scaled_ref: Vec<f64> = reference.iter().map(|v| v * 4.0).collect();
    let scaled_act: Vec<f64> = actual.iter().map(|v| v * 4.0).collect();
    let scaled = population_stability_index(&scaled_ref, &scaled_act, 10).unwrap();

    assert!((base - scaled).abs() < 1e-9);
}

// ===========================================================================
// PSI — range exclusion and total drift
// ===========================================================================

#[test]
fn test_actual_entirely_outside_reference_range() {
    let reference = decile_reference();
    let actual = vec![1000.0; 40];

    let psi = population_stability_index(&reference, &actual, 10).unwrap();

    // no actual value lands in any bucket: every observed share clips to
    // 1e-6 while each reference decile holds exactly 0.1
    let expected: f64 = (0..10)
        .map(|_| (1e-6_f64 - 0.1) * (1e-6_f64 / 0.1).ln())
        .sum();
    assert!((psi - expected).abs() < 1e-9);
    assert!(psi > 10.0, "total drift should score large, got {psi}");
}

#[test]
fn test_partial_range_exclusion_is_finite() {
    let reference = decile_reference();
    // half the actual values drifted past the reference maximum
    let mut actual = decile_reference();
    actual.extend((1..=100).map(|v| f64::from(v) + 500.0));

    let psi = population_stability_index(&reference, &actual, 10).unwrap();
    assert!(psi.is_finite());
    assert_eq!(psi, 0.0, "in-range values match the reference exactly");
}

// ===========================================================================
// PSI — finiteness under random data
// ===========================================================================

#[test]
fn test_finiteness_over_bucket_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let normal = Normal::new(0.0, 1.0).unwrap();

    let reference: Vec<f64> = (0..500).map(|_| rng.sample(normal)).collect();
    let actual: Vec<f64> = (0..300).map(|_| rng.sample(normal)).collect();

    for bins in [1, 2, 5, 10, 25, 50, 100] {
        let psi = population_stability_index(&reference, &actual, bins).unwrap();
        assert!(psi.is_finite(), "psi not finite at bins={bins}: {psi}");
    }
}

#[test]
fn test_detects_mean_shift() {
    let mut rng = StdRng::seed_from_u64(7);
    let baseline = Normal::new(0.0, 1.0).unwrap();
    let drifted = Normal::new(1.0, 1.0).unwrap();

    let reference: Vec<f64> = (0..5000).map(|_| rng.sample(baseline)).collect();
    let same: Vec<f64> = (0..5000).map(|_| rng.sample(baseline)).collect();
    let shifted: Vec<f64> = (0..5000).map(|_| rng.sample(drifted)).collect();

    let psi_same = population_stability_index(&reference, &same, 10).unwrap();
    let psi_shifted = population_stability_index(&reference, &shifted, 10).unwrap();

    // a one-sigma mean shift is far past the conventional 0.25 alert zone
    assert!(psi_same < 0.1, "same-distribution psi too high: {psi_same}");
    assert!(psi_shifted > 0.25, "shifted psi too low: {psi_shifted}");
    assert!(psi_shifted > psi_same);
}

// ===========================================================================
// Quantile edges — bucket count bound under ties
// ===========================================================================

#[test]
fn test_effective_buckets_never_exceed_request() {
    let mut heavy_ties = vec![1.0; 70];
    heavy_ties.extend(vec![2.0; 20]);
    heavy_ties.extend(vec![3.0; 10]);

    for bins in [1, 4, 10, 50] {
        let edges = quantile_edges(&heavy_ties, bins).unwrap();
        let effective = edges.len().saturating_sub(1);
        assert!(
            effective <= bins,
            "effective buckets {effective} exceed requested {bins}"
        );
    }
}

#[test]
fn test_edge_collapse_matches_duplicate_quantiles() {
    // 70% of mass at 1.0 puts quantiles 0.0..=0.7 on the same value
    let mut sample = vec![1.0; 70];
    sample.extend((1..=30).map(|v| 1.0 + f64::from(v)));

    let edges = quantile_edges(&sample, 10).unwrap();
    assert!(edges.len() < 11);
    assert!(edges.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_heavy_ties_still_score_finite() {
    let mut reference = vec![0.0; 90];
    reference.extend(vec![1.0; 10]);
    let actual = vec![1.0; 50];

    let psi = population_stability_index(&reference, &actual, 10).unwrap();
    assert!(psi.is_finite());
    assert!(psi > 0.0);
}
