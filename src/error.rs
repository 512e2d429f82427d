//! Typed errors for the recommendation pipeline.
//!
//! File-level failures (reading a CSV or a config file) are reported through
//! `anyhow` with context at the call site; everything the core itself can
//! reject lands here.

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("required column '{column}' not found in dataset")]
    MissingColumn { column: String },

    #[error("column '{column}' contains non-numeric values")]
    NonNumeric {
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error("filter column '{column}' not found in dataset")]
    UnknownFilterColumn { column: String },

    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no complete vehicle rows to score")]
    EmptyDataset,

    #[error("dataframe error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, RecommendError>;
