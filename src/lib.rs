//! EV Recommender Rust Implementation
//!
//! Scores electric vehicles on three composite axes (speed, battery,
//! charging), assigns each vehicle to exactly one category via percentile
//! cutoffs, and produces per-category top-N recommendations narrowed by
//! categorical filters.
//!
//! Module layout:
//! - `utils/`: Normalization, percentile and LazyFrame helpers
//! - `data`: CSV loading and cleaning with Polars
//! - `metrics/`: Composite score implementations (speed, battery, charging)
//! - `classifier`: Percentile cutoffs and single-category assignment
//! - `selector`: Per-category top-N and filter intersection
//! - `filters`: Categorical multi-select filtering over the raw table
//! - `recommender`: Pipeline coordinator
//! - `presentation/`: Display copy, formatters and the diagnostic boundary

pub mod error;
pub mod config;
pub mod utils;
pub mod data;
pub mod metrics;
pub mod classifier;
pub mod selector;
pub mod filters;
pub mod recommender;
pub mod presentation;

// Re-export commonly used types
pub use error::{RecommendError, Result};
pub use config::RecommenderConfig;
pub use utils::{normalize, normalize_inverted, percentile};
pub use data::{Vehicle, VehicleData, VehicleKey};
pub use metrics::{score_vehicles, CategoryScores, ScoredVehicle};
pub use classifier::{classify, Category, Classification, ClassifiedVehicle, Cutoffs};
pub use selector::{retain_keys, select_recommendations, select_top};
pub use filters::{apply_filters, filter_options, identity_keys, FilterClause, FilterSelection};
pub use recommender::{CategoryRecommendation, RankedVehicle, RecommendationReport, Recommender};
pub use presentation::{diagnostic, render_or_diagnostic, JsonFormatter, MarkdownFormatter, OutputFormat};
