//! Recommender configuration
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults below. Score weights are deliberately not configurable.

use crate::classifier::DEFAULT_CUTOFF_PERCENTILE;
use crate::error::RecommendError;
use crate::filters::DEFAULT_FILTER_COLUMNS;
use crate::selector::DEFAULT_TOP_N;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecommenderConfig {
    /// Vehicles shown per category before filter intersection
    pub top_n: usize,

    /// Percentile (0-100) each score must reach to make its category a candidate
    pub cutoff_percentile: f64,

    /// Categorical columns offered as multi-select filters
    pub filter_columns: Vec<String>,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            cutoff_percentile: DEFAULT_CUTOFF_PERCENTILE,
            filter_columns: DEFAULT_FILTER_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl RecommenderConfig {
    /// Load configuration from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: RecommenderConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config JSON: {:?}", path))?;

        config.validate()?;

        tracing::info!(
            "Loaded config from {:?}: top_n={}, cutoff_percentile={}",
            path,
            config.top_n,
            config.cutoff_percentile
        );

        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), RecommendError> {
        if !(0.0..=100.0).contains(&self.cutoff_percentile) {
            return Err(RecommendError::InvalidConfig(format!(
                "cutoff_percentile must be within 0-100, got {}",
                self.cutoff_percentile
            )));
        }

        if let Some(blank) = self.filter_columns.iter().find(|c| c.trim().is_empty()) {
            return Err(RecommendError::InvalidConfig(format!(
                "filter column names must not be blank, got {:?}",
                blank
            )));
        }

        Ok(())
    }
}
