//! Category classification
//!
//! Assigns every scored vehicle to exactly one of three categories using
//! per-score percentile cutoffs over the full dataset:
//! - Candidates: categories whose cutoff the vehicle's score meets (`>=`)
//! - Non-empty candidates: the highest-scoring candidate wins
//! - No candidates: the highest of the three raw scores wins
//!
//! Exact ties always resolve in declaration order: speed, battery, charging.

use crate::data::VehicleKey;
use crate::error::{RecommendError, Result};
use crate::metrics::{CategoryScores, ScoredVehicle};
use crate::utils::percentile;
use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// Default cutoff: the top 30% of each score clears its threshold
pub const DEFAULT_CUTOFF_PERCENTILE: f64 = 70.0;

/// Recommendation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Speed,
    Battery,
    Charging,
}

impl Category {
    /// Declaration order, which is also the tie-break order
    pub const ALL: [Category; 3] = [Category::Speed, Category::Battery, Category::Charging];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Speed => "speed",
            Category::Battery => "battery",
            Category::Charging => "charging",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-score threshold values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cutoffs {
    pub speed: f64,
    pub battery: f64,
    pub charging: f64,
}

impl Cutoffs {
    /// Percentile of each score over the whole scored dataset
    ///
    /// Returns None for an empty dataset.
    pub fn compute(scored: &[ScoredVehicle], p: f64) -> Option<Self> {
        let column = |f: fn(&CategoryScores) -> f64| -> Vec<f64> {
            scored.iter().map(|s| f(&s.scores)).collect()
        };

        Some(Self {
            speed: percentile(&column(|s| s.speed), p)?,
            battery: percentile(&column(|s| s.battery), p)?,
            charging: percentile(&column(|s| s.charging), p)?,
        })
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Speed => self.speed,
            Category::Battery => self.battery,
            Category::Charging => self.charging,
        }
    }
}

/// Scored vehicle with its single category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedVehicle {
    #[serde(flatten)]
    pub scored: ScoredVehicle,
    pub category: Category,
}

impl ClassifiedVehicle {
    pub fn key(&self) -> VehicleKey {
        self.scored.key()
    }

    /// Score for the given category
    pub fn score(&self, category: Category) -> f64 {
        self.scored.scores.get(category)
    }
}

/// Categories whose cutoff the scores meet, paired with the score
pub fn candidates(scores: &CategoryScores, cutoffs: &Cutoffs) -> SmallVec<[(Category, f64); 3]> {
    scores
        .iter()
        .filter(|&(category, score)| score >= cutoffs.get(category))
        .collect()
}

/// Highest-scoring candidate; the earliest wins exact ties
pub fn strongest_candidate(candidates: &[(Category, f64)]) -> Option<Category> {
    candidates
        .iter()
        .fold(None::<(Category, f64)>, |best, &(category, score)| match best {
            Some((_, best_score)) if score <= best_score => best,
            _ => Some((category, score)),
        })
        .map(|(category, _)| category)
}

/// Category of the highest raw score; the earliest wins exact ties
pub fn highest_score(scores: &CategoryScores) -> Category {
    scores
        .iter()
        .skip(1)
        .fold((Category::Speed, scores.speed), |best, (category, score)| {
            if score > best.1 {
                (category, score)
            } else {
                best
            }
        })
        .0
}

/// Classify one vehicle's scores against the cutoffs
pub fn classify_scores(scores: &CategoryScores, cutoffs: &Cutoffs) -> Category {
    strongest_candidate(&candidates(scores, cutoffs)).unwrap_or_else(|| highest_score(scores))
}

/// Result of classifying a full scored dataset
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub cutoffs: Cutoffs,
    /// One entry per scored vehicle, in dataset order
    pub vehicles: Vec<ClassifiedVehicle>,
}

impl Classification {
    /// Vehicles labelled with `category`, in dataset order
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &ClassifiedVehicle> {
        self.vehicles.iter().filter(move |v| v.category == category)
    }

    pub fn count(&self, category: Category) -> usize {
        self.in_category(category).count()
    }

    /// Identity key → category.
    ///
    /// (brand, model) is not guaranteed unique; the first row with a given
    /// key decides its entry.
    pub fn category_map(&self) -> FxHashMap<VehicleKey, Category> {
        let mut map = FxHashMap::default();
        for vehicle in &self.vehicles {
            map.entry(vehicle.key()).or_insert(vehicle.category);
        }
        map
    }
}

/// Classify every vehicle using cutoffs at percentile `p` of the full dataset
pub fn classify(scored: Vec<ScoredVehicle>, p: f64) -> Result<Classification> {
    let cutoffs = Cutoffs::compute(&scored, p).ok_or(RecommendError::EmptyDataset)?;

    tracing::debug!(
        "Cutoffs at p{}: speed={:.2}, battery={:.2}, charging={:.2}",
        p,
        cutoffs.speed,
        cutoffs.battery,
        cutoffs.charging
    );

    let vehicles = scored
        .into_iter()
        .map(|scored| {
            let category = classify_scores(&scored.scores, &cutoffs);
            ClassifiedVehicle { scored, category }
        })
        .collect();

    Ok(Classification { cutoffs, vehicles })
}
