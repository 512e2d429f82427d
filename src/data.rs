//! Data Loading and Cleaning
//!
//! Loads the vehicle spec table with Polars and produces the cleaned,
//! scoring-ready vehicle list. The raw frame is kept alongside so filtering
//! and display can still see rows that scoring had to drop.

use crate::error::{RecommendError, Result};
use crate::utils::materialize_with_columns;
use anyhow::Context;
use polars::prelude::*;
use serde::Serialize;
use std::fmt;
use std::path::Path;

pub const BRAND: &str = "brand";
pub const MODEL: &str = "model";
pub const TOP_SPEED: &str = "top_speed_kmh";
pub const ACCELERATION: &str = "acceleration_0_100_s";
pub const BATTERY_CAPACITY: &str = "battery_capacity_kWh";
pub const EFFICIENCY: &str = "efficiency_wh_per_km";
pub const RANGE: &str = "range_km";
pub const FAST_CHARGING: &str = "fast_charging_power_kw_dc";

/// The six numeric attributes every scored vehicle must have, in column order.
pub const NUMERIC_COLUMNS: [&str; 6] = [
    TOP_SPEED,
    ACCELERATION,
    BATTERY_CAPACITY,
    EFFICIENCY,
    RANGE,
    FAST_CHARGING,
];

/// Compound identity of a vehicle across the full and filtered tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VehicleKey {
    pub brand: String,
    pub model: String,
}

impl VehicleKey {
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
        }
    }
}

impl fmt::Display for VehicleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.brand, self.model)
    }
}

/// A complete vehicle row (all six numeric attributes present)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub brand: String,
    pub model: String,
    pub top_speed_kmh: f64,
    /// Seconds; lower is better
    pub acceleration_0_100_s: f64,
    #[serde(rename = "battery_capacity_kWh")]
    pub battery_capacity_kwh: f64,
    /// Wh/km; lower is better
    pub efficiency_wh_per_km: f64,
    pub range_km: f64,
    pub fast_charging_power_kw_dc: f64,
}

impl Vehicle {
    pub fn key(&self) -> VehicleKey {
        VehicleKey::new(self.brand.as_str(), self.model.as_str())
    }

    /// Build from values ordered as [`NUMERIC_COLUMNS`].
    fn from_values(brand: &str, model: &str, values: [f64; 6]) -> Self {
        let [
            top_speed_kmh,
            acceleration_0_100_s,
            battery_capacity_kwh,
            efficiency_wh_per_km,
            range_km,
            fast_charging_power_kw_dc,
        ] = values;

        Self {
            brand: brand.to_string(),
            model: model.to_string(),
            top_speed_kmh,
            acceleration_0_100_s,
            battery_capacity_kwh,
            efficiency_wh_per_km,
            range_km,
            fast_charging_power_kw_dc,
        }
    }
}

/// Loaded vehicle table plus its cleaned, scoring-ready rows
pub struct VehicleData {
    /// Raw table as loaded (all columns, incomplete rows included)
    frame: DataFrame,

    /// Rows with brand, model and all six numeric attributes present
    vehicles: Vec<Vehicle>,

    dropped_rows: usize,
}

impl VehicleData {
    /// Load a headered CSV file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .with_context(|| format!("Failed to create CSV reader: {}", path.display()))?
            .finish()
            .with_context(|| format!("Failed to load vehicle CSV: {}", path.display()))?;

        let data = Self::from_frame(df)
            .with_context(|| format!("Invalid vehicle dataset: {}", path.display()))?;

        tracing::info!(
            "Loaded {} rows from {} ({} complete, {} dropped)",
            data.frame.height(),
            path.display(),
            data.vehicles.len(),
            data.dropped_rows
        );

        Ok(data)
    }

    /// Validate and clean an already-loaded frame.
    ///
    /// Numeric columns are cast strictly: a value that is present but not a
    /// number is an error rather than a silently dropped row.
    pub fn from_frame(frame: DataFrame) -> Result<Self> {
        let mut required = vec![BRAND, MODEL];
        required.extend(NUMERIC_COLUMNS);

        let projected = materialize_with_columns(&frame.clone().lazy(), &required)?;

        let brand_col = projected.column(BRAND)?.cast(&DataType::String)?;
        let model_col = projected.column(MODEL)?.cast(&DataType::String)?;
        let brands = brand_col.str()?;
        let models = model_col.str()?;

        let numeric = NUMERIC_COLUMNS
            .iter()
            .map(|name| numeric_column(&projected, name))
            .collect::<Result<Vec<_>>>()?;

        let vehicles: Vec<Vehicle> = (0..projected.height())
            .filter_map(|idx| {
                let brand = brands.get(idx)?;
                let model = models.get(idx)?;
                let values = complete_values(&numeric, idx)?;
                Some(Vehicle::from_values(brand, model, values))
            })
            .collect();

        let dropped_rows = projected.height() - vehicles.len();
        if dropped_rows > 0 {
            tracing::warn!("Excluded {} incomplete rows from scoring", dropped_rows);
        }

        Ok(Self {
            frame,
            vehicles,
            dropped_rows,
        })
    }

    /// Full table, for filtering and display
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Cleaned rows, the population for normalization and cutoffs
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }
}

fn numeric_column(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let column = df
        .column(name)?
        .strict_cast(&DataType::Float64)
        .map_err(|source| RecommendError::NonNumeric {
            column: name.to_string(),
            source,
        })?;

    Ok(column.f64()?.clone())
}

/// All six values for a row, or None if any is missing or not finite
fn complete_values(columns: &[Float64Chunked], idx: usize) -> Option<[f64; 6]> {
    let mut values = [0.0; 6];
    for (slot, column) in values.iter_mut().zip(columns) {
        *slot = column.get(idx).filter(|v| v.is_finite())?;
    }
    Some(values)
}
