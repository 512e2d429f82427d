//! CHARGING SCORE
//!
//! Convenience on the road: dominated by peak DC fast-charge power, with a
//! small nudge for pack size.

use super::attribute;
use crate::data::Vehicle;
use crate::utils::normalize;

pub const FAST_CHARGING_WEIGHT: f64 = 0.9;
pub const CAPACITY_WEIGHT: f64 = 0.1;

/// Charging score (0-100) for every vehicle, in input order
pub fn calculate_charging(vehicles: &[Vehicle]) -> Vec<f64> {
    let fast_charging = normalize(&attribute(vehicles, |v| v.fast_charging_power_kw_dc));
    let capacity = normalize(&attribute(vehicles, |v| v.battery_capacity_kwh));

    fast_charging
        .iter()
        .zip(&capacity)
        .map(|(power, cap)| (power * FAST_CHARGING_WEIGHT + cap * CAPACITY_WEIGHT) * 100.0)
        .collect()
}
