//! SPEED SCORE
//!
//! Straight-line performance: top speed plus 0-100 km/h acceleration, with
//! acceleration carrying the larger share. Acceleration is a time, so it is
//! normalized inverted (quicker = higher).

use super::attribute;
use crate::data::Vehicle;
use crate::utils::{normalize, normalize_inverted};

pub const TOP_SPEED_WEIGHT: f64 = 0.4;
pub const ACCELERATION_WEIGHT: f64 = 0.6;

/// Speed score (0-100) for every vehicle, in input order
pub fn calculate_speed(vehicles: &[Vehicle]) -> Vec<f64> {
    let top_speed = normalize(&attribute(vehicles, |v| v.top_speed_kmh));
    let acceleration = normalize_inverted(&attribute(vehicles, |v| v.acceleration_0_100_s));

    top_speed
        .iter()
        .zip(&acceleration)
        .map(|(speed, accel)| (speed * TOP_SPEED_WEIGHT + accel * ACCELERATION_WEIGHT) * 100.0)
        .collect()
}
