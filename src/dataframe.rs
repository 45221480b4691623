//! Conversion of metric tables into Polars DataFrames
//!
//! Enabled with the `dataframe` feature.

use crate::error::{ClassMetricsError, Result};
use crate::table::{MetricTable, CLASS_COLUMN};
use polars::prelude::*;

/// Convert a metric table into a DataFrame with a `Class` column (u64) and
/// one f64 column per metric label.
///
/// # Errors
///
/// Returns `Shape` when the table is incomplete: a metric without valid data
/// leaves a value in every row but no column label, so rows are wider than
/// the header.
pub fn to_dataframe(table: &MetricTable) -> Result<DataFrame> {
    if !table.is_complete() {
        let width = table.rows().first().map_or(0, |r| r.values.len());
        return Err(ClassMetricsError::Shape(format!(
            "{} metric columns but rows hold {} values",
            table.metric_columns().len(),
            width
        )));
    }

    let ids: Vec<u64> = table.rows().iter().map(|r| r.category_id).collect();
    let mut columns = vec![Series::new(CLASS_COLUMN.into(), ids).into_column()];

    for (idx, label) in table.metric_columns().iter().enumerate() {
        let values: Vec<f64> = table.rows().iter().map(|r| r.values[idx]).collect();
        columns.push(Series::new(label.as_str().into(), values).into_column());
    }

    Ok(DataFrame::new(columns)?)
}
