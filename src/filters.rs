//! Categorical multi-select filtering
//!
//! Narrows the raw vehicle table by categorical columns (size, drivetrain,
//! body type). Values selected within one column are alternatives; separate
//! columns must all match. A column with nothing selected places no
//! constraint on the table.
//!
//! The filtered table's identity keys are what the selector intersects its
//! rankings against.

use crate::data::{VehicleKey, BRAND, MODEL};
use crate::error::{RecommendError, Result};
use crate::utils::ensure_columns;
use polars::prelude::*;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_FILTER_COLUMNS: [&str; 3] = ["car_size", "drivetrain", "car_body_type"];

/// Selected values for one categorical column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterClause {
    pub column: String,
    pub values: Vec<String>,
}

impl FilterClause {
    pub fn new<I, S>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// A clause with no selected values does not constrain anything
    pub fn is_active(&self) -> bool {
        !self.values.is_empty()
    }
}

/// Parses `column=value1,value2`. An empty right-hand side is allowed and
/// yields an inactive clause.
impl FromStr for FilterClause {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self> {
        let (column, values) = s
            .split_once('=')
            .ok_or_else(|| RecommendError::InvalidFilter(format!("expected column=value[,value...], got '{s}'")))?;

        let column = column.trim();
        if column.is_empty() {
            return Err(RecommendError::InvalidFilter(format!("missing column name in '{s}'")));
        }

        let values = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty());

        Ok(Self::new(column, values))
    }
}

/// All clauses the user has set, in the order they were given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    clauses: Vec<FilterClause>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clause; values for a column already present are merged
    pub fn with<I, S>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(FilterClause::new(column, values));
        self
    }

    pub fn push(&mut self, clause: FilterClause) {
        match self.clauses.iter_mut().find(|c| c.column == clause.column) {
            Some(existing) => {
                for value in clause.values {
                    if !existing.values.contains(&value) {
                        existing.values.push(value);
                    }
                }
            }
            None => self.clauses.push(clause),
        }
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    /// True when no clause constrains the table
    pub fn is_unconstrained(&self) -> bool {
        !self.clauses.iter().any(FilterClause::is_active)
    }
}

impl FromIterator<FilterClause> for FilterSelection {
    fn from_iter<T: IntoIterator<Item = FilterClause>>(iter: T) -> Self {
        let mut selection = Self::new();
        for clause in iter {
            selection.push(clause);
        }
        selection
    }
}

/// Rows of `df` that satisfy every active clause
///
/// Missing cells never match an active clause. Every clause column must
/// exist, active or not.
pub fn apply_filters(df: &DataFrame, selection: &FilterSelection) -> Result<DataFrame> {
    let columns: Vec<&str> = selection.clauses().iter().map(|c| c.column.as_str()).collect();
    ensure_columns(df, &columns).map_err(|err| match err {
        RecommendError::MissingColumn { column } => RecommendError::UnknownFilterColumn { column },
        other => other,
    })?;

    let mut filtered = df.clone();
    for clause in selection.clauses().iter().filter(|c| c.is_active()) {
        let allowed: FxHashSet<&str> = clause.values.iter().map(String::as_str).collect();

        let column = filtered.column(&clause.column)?.cast(&DataType::String)?;
        let mask: BooleanChunked = column
            .str()?
            .into_iter()
            .map(|opt| opt.is_some_and(|value| allowed.contains(value)))
            .collect();

        filtered = filtered.filter(&mask)?;
    }

    tracing::debug!(
        "Filters kept {} of {} rows",
        filtered.height(),
        df.height()
    );

    Ok(filtered)
}

/// Distinct non-null values of a column, in first-seen order
pub fn distinct_values(df: &DataFrame, column: &str) -> Result<Vec<String>> {
    let values = df
        .column(column)
        .map_err(|_| RecommendError::UnknownFilterColumn {
            column: column.to_string(),
        })?
        .cast(&DataType::String)?;

    let mut seen = FxHashSet::default();
    let distinct = values
        .str()?
        .into_iter()
        .flatten()
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect();

    Ok(distinct)
}

/// Selectable options for each filter column that exists in `df`
///
/// Columns absent from the table are skipped, so a dataset without a body
/// type column simply offers no body type filter.
pub fn filter_options(df: &DataFrame, columns: &[String]) -> Result<Vec<(String, Vec<String>)>> {
    columns
        .iter()
        .filter(|column| df.get_column_index(column).is_some())
        .map(|column| Ok((column.clone(), distinct_values(df, column)?)))
        .collect()
}

/// (brand, model) of every row with both present
pub fn identity_keys(df: &DataFrame) -> Result<FxHashSet<VehicleKey>> {
    ensure_columns(df, &[BRAND, MODEL])?;

    let brand_col = df.column(BRAND)?.cast(&DataType::String)?;
    let model_col = df.column(MODEL)?.cast(&DataType::String)?;

    let keys = brand_col
        .str()?
        .into_iter()
        .zip(model_col.str()?)
        .filter_map(|(brand, model)| Some(VehicleKey::new(brand?, model?)))
        .collect();

    Ok(keys)
}
