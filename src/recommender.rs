//! Recommender - Main coordinator for the recommendation pipeline
//!
//! Cleaned vehicles → composite scores → category classification →
//! per-category top-N → filter intersection. Every call recomputes from
//! the full dataset; nothing is cached between calls, and all inputs arrive
//! as explicit arguments.

use crate::classifier::{classify, Category, ClassifiedVehicle, Cutoffs};
use crate::config::RecommenderConfig;
use crate::data::{Vehicle, VehicleData, VehicleKey};
use crate::error::{RecommendError, Result};
use crate::filters::{apply_filters, identity_keys, FilterSelection};
use crate::metrics::score_vehicles;
use crate::presentation::{category_profile, highlights, CategoryProfile, Highlight};
use crate::selector::{retain_keys, select_top};
use rustc_hash::FxHashSet;
use serde::Serialize;

/// One entry of a category ranking, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedVehicle {
    /// 1-based position after filter intersection
    pub rank: usize,
    pub brand: String,
    pub model: String,
    /// The ranking category's score
    pub score: f64,
    /// Raw attributes relevant to the category
    pub highlights: Vec<Highlight>,
}

impl RankedVehicle {
    fn new(rank: usize, vehicle: &ClassifiedVehicle, category: Category) -> Self {
        let raw = &vehicle.scored.vehicle;
        Self {
            rank,
            brand: raw.brand.clone(),
            model: raw.model.clone(),
            score: vehicle.score(category),
            highlights: highlights(category, raw),
        }
    }

    pub fn key(&self) -> VehicleKey {
        VehicleKey::new(self.brand.as_str(), self.model.as_str())
    }
}

/// Ranking and display copy for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRecommendation {
    pub category: Category,
    pub profile: &'static CategoryProfile,
    /// Vehicles classified into this category across the full dataset
    pub category_size: usize,
    pub vehicles: Vec<RankedVehicle>,
}

impl CategoryRecommendation {
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

/// Full pipeline output, categories in fixed order (speed, battery, charging)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationReport {
    pub cutoffs: Cutoffs,
    /// Whether rankings were narrowed by an active filter
    pub filter_applied: bool,
    pub categories: Vec<CategoryRecommendation>,
}

impl RecommendationReport {
    pub fn category(&self, category: Category) -> Option<&CategoryRecommendation> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// How many vehicles each category holds over the whole dataset
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        self.categories
            .iter()
            .map(|c| (c.category, c.category_size))
            .collect()
    }
}

/// Stateless pipeline driver
pub struct Recommender {
    config: RecommenderConfig,
}

impl Recommender {
    pub fn new(config: RecommenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Run the pipeline over the full cleaned dataset
    ///
    /// `filter_keys` is the identity-key set of the caller's filtered view.
    /// An empty set means no filter is active.
    pub fn recommend(
        &self,
        vehicles: &[Vehicle],
        filter_keys: &FxHashSet<VehicleKey>,
    ) -> Result<RecommendationReport> {
        let filter = (!filter_keys.is_empty()).then_some(filter_keys);
        self.build_report(vehicles, filter)
    }

    /// Apply categorical filters to the raw table, then recommend
    ///
    /// Scoring still runs over every complete row; the filters only decide
    /// which ranked vehicles are shown. An unconstrained selection, or one
    /// that no row satisfies, leaves the rankings unfiltered. Otherwise the
    /// rankings are narrowed to the matching rows' keys, even when none of
    /// those rows has a usable (brand, model).
    pub fn recommend_filtered(
        &self,
        data: &VehicleData,
        selection: &FilterSelection,
    ) -> Result<RecommendationReport> {
        if selection.is_unconstrained() {
            tracing::info!("Recommending over {} vehicles (no filters)", data.vehicles().len());
            return self.build_report(data.vehicles(), None);
        }

        let filtered = apply_filters(data.frame(), selection)?;
        let filter_keys = identity_keys(&filtered)?;

        tracing::info!(
            "Recommending over {} vehicles ({} rows pass filters)",
            data.vehicles().len(),
            filtered.height()
        );

        let filter = (filtered.height() > 0).then_some(&filter_keys);
        self.build_report(data.vehicles(), filter)
    }

    /// `None` leaves rankings untouched; `Some(keys)` keeps only ranked
    /// vehicles whose key is in `keys`.
    fn build_report(
        &self,
        vehicles: &[Vehicle],
        filter: Option<&FxHashSet<VehicleKey>>,
    ) -> Result<RecommendationReport> {
        if vehicles.is_empty() {
            return Err(RecommendError::EmptyDataset);
        }

        let scored = score_vehicles(vehicles);
        let classification = classify(scored, self.config.cutoff_percentile)?;

        let categories = Category::ALL
            .into_iter()
            .map(|category| {
                let top = select_top(&classification.vehicles, category, self.config.top_n);
                let ranked = match filter {
                    Some(keys) => retain_keys(top, keys),
                    None => top,
                };
                let category_size = classification.count(category);

                tracing::debug!(
                    "{}: {} classified, {} recommended",
                    category,
                    category_size,
                    ranked.len()
                );

                CategoryRecommendation {
                    category,
                    profile: category_profile(category),
                    category_size,
                    vehicles: ranked
                        .into_iter()
                        .enumerate()
                        .map(|(idx, vehicle)| RankedVehicle::new(idx + 1, vehicle, category))
                        .collect(),
                }
            })
            .collect();

        Ok(RecommendationReport {
            cutoffs: classification.cutoffs,
            filter_applied: filter.is_some(),
            categories,
        })
    }
}
