//! Top-N selection per category
//!
//! Ranks a category's members by that category's own score, keeps the
//! first N, then narrows to whatever the caller's active filters allow.
//! The top N is taken over the whole category before the filter is
//! applied, so a filter can shrink a ranking but never promote a vehicle
//! into it.

use crate::classifier::{Category, ClassifiedVehicle};
use crate::data::VehicleKey;
use rustc_hash::FxHashSet;

pub const DEFAULT_TOP_N: usize = 5;

/// Top `n` vehicles of `category`, descending by that category's score
///
/// Exact score ties keep dataset order. An empty category yields an empty
/// ranking.
pub fn select_top(
    classified: &[ClassifiedVehicle],
    category: Category,
    n: usize,
) -> Vec<&ClassifiedVehicle> {
    let mut members: Vec<&ClassifiedVehicle> = classified
        .iter()
        .filter(|v| v.category == category)
        .collect();

    // Stable sort, so ties stay in dataset order
    members.sort_by(|a, b| b.score(category).total_cmp(&a.score(category)));
    members.truncate(n);
    members
}

/// Keep only ranked vehicles whose (brand, model) is in `filter_keys`
///
/// An empty key set means no filter is active: everything is retained.
pub fn intersect_with_filter<'a>(
    ranked: Vec<&'a ClassifiedVehicle>,
    filter_keys: &FxHashSet<VehicleKey>,
) -> Vec<&'a ClassifiedVehicle> {
    if filter_keys.is_empty() {
        return ranked;
    }

    retain_keys(ranked, filter_keys)
}

/// Keep only ranked vehicles whose (brand, model) is in `keys`
///
/// Unlike [`intersect_with_filter`], an empty key set retains nothing.
pub fn retain_keys<'a>(
    ranked: Vec<&'a ClassifiedVehicle>,
    keys: &FxHashSet<VehicleKey>,
) -> Vec<&'a ClassifiedVehicle> {
    ranked
        .into_iter()
        .filter(|v| keys.contains(&v.key()))
        .collect()
}

/// [`select_top`] followed by [`intersect_with_filter`]
pub fn select_recommendations<'a>(
    classified: &'a [ClassifiedVehicle],
    category: Category,
    n: usize,
    filter_keys: &FxHashSet<VehicleKey>,
) -> Vec<&'a ClassifiedVehicle> {
    intersect_with_filter(select_top(classified, category, n), filter_keys)
}
