//! Normalization Utilities
//!
//! Min-max scaling of a numeric attribute across the full dataset, and the
//! linear-interpolation percentile used for category cutoffs.

/// Value every entry takes when a column has no spread (`max == min`).
/// Keeps composite scores finite.
pub const CONSTANT_COLUMN_FALLBACK: f64 = 0.5;

/// Min-max normalize to [0, 1]: `(v - min) / (max - min)`
///
/// Bounds are taken over the whole input slice. Empty input gives an empty
/// output; a constant column maps to [`CONSTANT_COLUMN_FALLBACK`].
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let Some((min, max)) = bounds(values) else {
        return Vec::new();
    };

    let span = max - min;
    if span == 0.0 {
        return vec![CONSTANT_COLUMN_FALLBACK; values.len()];
    }

    values.iter().map(|v| (v - min) / span).collect()
}

/// Normalize a "lower is better" attribute.
///
/// Scales `max - v` rather than `v`, so the smallest raw value maps to 1
/// and the largest to 0.
pub fn normalize_inverted(values: &[f64]) -> Vec<f64> {
    let Some((_, max)) = bounds(values) else {
        return Vec::new();
    };

    let flipped: Vec<f64> = values.iter().map(|v| max - v).collect();
    normalize(&flipped)
}

/// Percentile with linear interpolation between order statistics
///
/// Algorithm:
/// 1. Sort ascending, rank = p/100 × (n - 1)
/// 2. Interpolate between the values at floor(rank) and ceil(rank)
///
/// `p` is clamped to [0, 100]. Returns None for empty input.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = p.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lower_idx = rank.floor() as usize;
    let upper_idx = rank.ceil() as usize;
    let fraction = rank - lower_idx as f64;

    let lower = sorted[lower_idx];
    let upper = sorted[upper_idx];
    let diff = upper - lower;

    // Interpolate from the nearer end to keep results exact at the endpoints
    Some(if fraction >= 0.5 {
        upper - diff * (1.0 - fraction)
    } else {
        lower + diff * fraction
    })
}

fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((min, max)) => Some((min.min(v), max.max(v))),
    })
}
