//! LazyFrame materialization helpers with column validation
//!
//! Provides safe, explicit patterns for working with Polars LazyFrames
//! so a missing column surfaces as a named error instead of a generic
//! plan failure.

use crate::error::{RecommendError, Result};
use polars::prelude::*;

/// Materialize LazyFrame with explicit column list and validation
///
/// # Arguments
/// * `lazy` - LazyFrame to materialize
/// * `columns` - Required column names
///
/// # Returns
/// DataFrame with exactly the specified columns, in the given order
///
/// # Errors
/// Returns `MissingColumn` naming the first required column that the
/// frame's schema does not contain.
///
/// # Example
/// ```rust,ignore
/// let df = materialize_with_columns(&vehicles_lazy, &["brand", "model", "range_km"])?;
/// ```
pub fn materialize_with_columns(lazy: &LazyFrame, columns: &[&str]) -> Result<DataFrame> {
    let schema = lazy.clone().collect_schema()?;

    if let Some(missing) = columns.iter().find(|name| !schema.contains(name)) {
        return Err(RecommendError::MissingColumn {
            column: missing.to_string(),
        });
    }

    let col_exprs: Vec<Expr> = columns.iter().map(|&name| col(name)).collect();

    Ok(lazy.clone().select(col_exprs).collect()?)
}

/// Check that every named column exists in an eager frame
pub fn ensure_columns(df: &DataFrame, columns: &[&str]) -> Result<()> {
    match columns
        .iter()
        .find(|&&name| df.get_column_index(name).is_none())
    {
        Some(missing) => Err(RecommendError::MissingColumn {
            column: missing.to_string(),
        }),
        None => Ok(()),
    }
}
