/// Count how many of `values` fall into each bucket `[edges[i], edges[i+1])`,
/// with the last bucket closed on the right so the maximum edge is counted.
///
/// `edges` must be ascending with at least 2 elements; a collapsed pair of
/// equal edges forms a point bucket that counts exact hits only. Values
/// outside `[edges[0], edges[last]]` are excluded from the counts entirely,
/// so the counts need not sum to `values.len()`.
pub fn bin_counts(values: &[f64], edges: &[f64]) -> Vec<u64> {
    debug_assert!(edges.len() >= 2);
    let buckets = edges.len() - 1;
    let lo = edges[0];
    let hi = edges[buckets];

    let mut counts = vec![0u64; buckets];
    for &value in values {
        if !(lo..=hi).contains(&value) {
            continue;
        }
        let index = if value == hi {
            buckets - 1
        } else {
            // number of edges <= value, minus one, is the bucket index;
            // value >= lo guarantees at least one such edge
            edges.partition_point(|e| *e <= value) - 1
        };
        counts[index] += 1;
    }
    counts
}
