//! Per-category metric table.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Label of the leading category column.
pub const CLASS_COLUMN: &str = "Class";

/// Ordered, deduplicated column labels.
///
/// Labels keep first-seen order; pushing a label that was already seen is a no-op.
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl ColumnSet {
    /// A column set holding only the `"Class"` column.
    pub fn new() -> Self {
        let mut columns = Self::default();
        columns.push(CLASS_COLUMN.to_string());
        columns
    }

    /// Append `label` unless it is already present. Returns whether it was added.
    pub fn push(&mut self, label: String) -> bool {
        if self.seen.contains(&label) {
            return false;
        }
        self.seen.insert(label.clone());
        self.ordered.push(label);
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.seen.contains(label)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

/// One table row: a category and its metric values in traversal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub category_id: u64,
    /// AP over the IoU range, AP at each single threshold, then AR over the range.
    /// `-1.0` marks a metric without valid data.
    pub values: Vec<f64>,
}

/// Per-category metric table: one row per category, plus column labels.
///
/// `columns[0]` is always `"Class"`. When a metric had no valid data its
/// label is never added, so a row can hold more values than there are
/// metric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTable {
    columns: Vec<String>,
    rows: Vec<MetricRow>,
}

impl MetricTable {
    pub fn new(columns: ColumnSet, rows: Vec<MetricRow>) -> Self {
        Self {
            columns: columns.into_vec(),
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Metric column labels, without the leading `"Class"` column.
    pub fn metric_columns(&self) -> &[String] {
        self.columns.get(1..).unwrap_or(&[])
    }

    pub fn rows(&self) -> &[MetricRow] {
        &self.rows
    }

    /// Row for `category_id`, if present.
    pub fn row(&self, category_id: u64) -> Option<&MetricRow> {
        self.rows.iter().find(|r| r.category_id == category_id)
    }

    /// Value of the metric labelled `label` for `category_id`.
    ///
    /// Only meaningful when the table is complete; otherwise labels and
    /// value positions no longer line up and `None` is returned.
    pub fn value(&self, category_id: u64, label: &str) -> Option<f64> {
        if !self.is_complete() {
            return None;
        }
        let idx = self.metric_columns().iter().position(|c| c == label)?;
        self.row(category_id)?.values.get(idx).copied()
    }

    /// Whether every row has exactly one value per metric column.
    pub fn is_complete(&self) -> bool {
        let width = self.metric_columns().len();
        self.rows.iter().all(|r| r.values.len() == width)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serialize the table as pretty-printed JSON.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
