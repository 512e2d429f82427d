//! BATTERY SCORE
//!
//! Long-distance practicality: pack size, rated range and consumption.
//! Efficiency (Wh/km) gets the largest weight and is normalized inverted,
//! since lower consumption is better.

use super::attribute;
use crate::data::Vehicle;
use crate::utils::{normalize, normalize_inverted};

pub const CAPACITY_WEIGHT: f64 = 0.3;
pub const RANGE_WEIGHT: f64 = 0.3;
pub const EFFICIENCY_WEIGHT: f64 = 0.4;

/// Battery score (0-100) for every vehicle, in input order
pub fn calculate_battery(vehicles: &[Vehicle]) -> Vec<f64> {
    let capacity = normalize(&attribute(vehicles, |v| v.battery_capacity_kwh));
    let range = normalize(&attribute(vehicles, |v| v.range_km));
    let efficiency = normalize_inverted(&attribute(vehicles, |v| v.efficiency_wh_per_km));

    capacity
        .iter()
        .zip(&range)
        .zip(&efficiency)
        .map(|((cap, range), eff)| {
            (cap * CAPACITY_WEIGHT + range * RANGE_WEIGHT + eff * EFFICIENCY_WEIGHT) * 100.0
        })
        .collect()
}
