//! Composite score modules
//!
//! Each score is implemented in its own module. Every score is computed for
//! every vehicle over the full cleaned dataset; classification happens later.

pub mod speed;
pub mod battery;
pub mod charging;

pub use speed::calculate_speed;
pub use battery::calculate_battery;
pub use charging::calculate_charging;

use crate::classifier::Category;
use crate::data::{Vehicle, VehicleKey};
use serde::Serialize;

/// The three composite scores of one vehicle (each 0-100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryScores {
    #[serde(rename = "speed_score")]
    pub speed: f64,
    #[serde(rename = "battery_score")]
    pub battery: f64,
    #[serde(rename = "charging_score")]
    pub charging: f64,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Speed => self.speed,
            Category::Battery => self.battery,
            Category::Charging => self.charging,
        }
    }

    /// (category, score) pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |category| (category, self.get(category)))
    }
}

/// Vehicle with its composite scores attached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredVehicle {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    #[serde(flatten)]
    pub scores: CategoryScores,
}

impl ScoredVehicle {
    pub fn key(&self) -> VehicleKey {
        self.vehicle.key()
    }
}

/// Score every vehicle in the dataset
///
/// Normalization bounds come from the slice passed in, so this must be the
/// full cleaned dataset, never a filtered subset.
pub fn score_vehicles(vehicles: &[Vehicle]) -> Vec<ScoredVehicle> {
    let speed = calculate_speed(vehicles);
    let battery = calculate_battery(vehicles);
    let charging = calculate_charging(vehicles);

    vehicles
        .iter()
        .zip(speed)
        .zip(battery)
        .zip(charging)
        .map(|(((vehicle, speed), battery), charging)| ScoredVehicle {
            vehicle: vehicle.clone(),
            scores: CategoryScores {
                speed,
                battery,
                charging,
            },
        })
        .collect()
}

/// Pull one numeric attribute out as a column
pub(crate) fn attribute(vehicles: &[Vehicle], f: impl Fn(&Vehicle) -> f64) -> Vec<f64> {
    vehicles.iter().map(f).collect()
}

/// Vehicle with values ordered as `data::NUMERIC_COLUMNS`
#[cfg(test)]
pub(crate) fn test_vehicle(brand: &str, model: &str, values: [f64; 6]) -> Vehicle {
    Vehicle {
        brand: brand.to_string(),
        model: model.to_string(),
        top_speed_kmh: values[0],
        acceleration_0_100_s: values[1],
        battery_capacity_kwh: values[2],
        efficiency_wh_per_km: values[3],
        range_km: values[4],
        fast_charging_power_kw_dc: values[5],
    }
}
