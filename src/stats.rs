//! Statistics over a built metric table
//!
//! This module summarizes how many metric values of a table were computed
//! and how many fell back to the sentinel.

use crate::table::MetricTable;
use crate::types::SENTINEL;
use serde::{Deserialize, Serialize};

/// Counts collected from a [`MetricTable`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableStats {
    /// Number of category rows
    pub categories: usize,

    /// Total number of metric values across all rows
    pub metric_values: usize,

    /// Number of values equal to the sentinel
    ///
    /// This includes both metrics reported as the sentinel because their
    /// slice had no valid data and computed means that come out at exactly
    /// `-1.0` (a category whose entries are all sentinels inside an
    /// otherwise valid slice). Use `suppressed_labels` to count the former.
    pub sentinel_values: usize,

    /// Number of metric columns (excluding `"Class"`)
    pub metric_columns: usize,

    /// Metric values per row minus metric columns; non-zero when a metric
    /// had no valid data and its label was never added
    pub suppressed_labels: usize,
}

impl TableStats {
    /// Collect statistics from `table`
    pub fn from_table(table: &MetricTable) -> Self {
        let metric_values: usize = table.rows().iter().map(|r| r.values.len()).sum();
        let sentinel_values = table
            .rows()
            .iter()
            .flat_map(|r| r.values.iter())
            .filter(|&&v| v == SENTINEL)
            .count();
        let metric_columns = table.metric_columns().len();
        let row_width = table.rows().first().map_or(0, |r| r.values.len());

        Self {
            categories: table.len(),
            metric_values,
            sentinel_values,
            metric_columns,
            suppressed_labels: row_width.saturating_sub(metric_columns),
        }
    }

    /// Number of values that differ from the sentinel
    pub fn computed_values(&self) -> usize {
        self.metric_values.saturating_sub(self.sentinel_values)
    }

    /// Get a formatted string summary of the statistics
    pub fn summary_string(&self) -> String {
        format!(
            "TableStats {{ categories: {}, values: {}, computed: {}, sentinel: {}, suppressed_labels: {} }}",
            self.categories,
            self.metric_values,
            self.computed_values(),
            self.sentinel_values,
            self.suppressed_labels
        )
    }
}
