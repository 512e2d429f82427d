//! Utility modules for vehicle scoring
//!
//! Contains shared functionality used across the pipeline:
//! - Normalization: Min-max scaling and percentile cutoffs
//! - LazyFrame helpers: Safe materialization with column validation

pub mod normalization;
pub mod lazy_helpers;

// Re-export commonly used items
pub use normalization::{normalize, normalize_inverted, percentile, CONSTANT_COLUMN_FALLBACK};
pub use lazy_helpers::{materialize_with_columns, ensure_columns};
