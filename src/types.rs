//! Core data types: evaluation parameters and the evaluator's score tensors.

use crate::error::{ClassMetricsError, Result};
use ndarray::{ArrayD, ArrayView4, ArrayView5, Array4, Array5, Ix4, Ix5};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Value marking "no ground truth / not computed" in precision and recall tensors.
pub const SENTINEL: f64 = -1.0;

/// Evaluation configuration the evaluator ran with.
///
/// The order of every sequence matters: it defines the position of the
/// corresponding axis in the precision and recall tensors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// IoU thresholds, ascending.
    pub iou_thresholds: Vec<f64>,
    /// Object-size bucket labels, e.g. `["all", "small", "medium", "large"]`.
    pub area_range_labels: Vec<String>,
    /// Detection-count caps, e.g. `[1, 10, 100]`.
    pub max_detections: Vec<usize>,
    /// Category identifiers; their order defines the table row order.
    pub category_ids: Vec<u64>,
}

impl Params {
    /// Standard COCO bbox parameters for the given categories.
    ///
    /// IoU thresholds 0.50:0.05:0.95, areas all/small/medium/large and
    /// maxDets 1/10/100.
    pub fn coco_default(category_ids: Vec<u64>) -> Self {
        Self {
            iou_thresholds: (0..10).map(|i| 0.5 + 0.05 * i as f64).collect(),
            area_range_labels: ["all", "small", "medium", "large"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_detections: vec![1, 10, 100],
            category_ids,
        }
    }

    /// First and last IoU threshold, if any.
    pub fn iou_range(&self) -> Option<(f64, f64)> {
        Some((*self.iou_thresholds.first()?, *self.iou_thresholds.last()?))
    }
}

/// Output of the external detection evaluator.
///
/// * `precision` is indexed by (iou threshold, recall bin, category, area range, max dets).
/// * `recall` is indexed by (iou threshold, category, area range, max dets).
///
/// Construction validates both tensors against `Params`, so every accessor
/// can be indexed without further checks.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    params: Params,
    precision: Array5<f64>,
    recall: Array4<f64>,
}

impl EvaluationResult {
    /// Validate and wrap the evaluator's tensors.
    ///
    /// # Errors
    ///
    /// * `Shape` if a tensor has the wrong rank or an extent disagrees with `Params`.
    /// * `Configuration` if `category_ids` contains duplicates.
    pub fn new(params: Params, precision: ArrayD<f64>, recall: ArrayD<f64>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(params.category_ids.len());
        if let Some(dup) = params.category_ids.iter().find(|id| !seen.insert(**id)) {
            return Err(ClassMetricsError::Configuration(format!(
                "duplicate category id {}",
                dup
            )));
        }

        let precision_rank = precision.ndim();
        let precision = precision.into_dimensionality::<Ix5>().map_err(|_| {
            ClassMetricsError::Shape(format!(
                "precision must have 5 axes (iou, recall bin, category, area, max dets), got {}",
                precision_rank
            ))
        })?;
        let (t, _, k, a, m) = precision.dim();
        check_extents("precision", [t, k, a, m], &params)?;

        let recall_rank = recall.ndim();
        let recall = recall.into_dimensionality::<Ix4>().map_err(|_| {
            ClassMetricsError::Shape(format!(
                "recall must have 4 axes (iou, category, area, max dets), got {}",
                recall_rank
            ))
        })?;
        let (t, k, a, m) = recall.dim();
        check_extents("recall", [t, k, a, m], &params)?;

        Ok(Self {
            params,
            precision,
            recall,
        })
    }

    /// Evaluation parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Precision tensor (T x R x K x A x M).
    pub fn precision(&self) -> ArrayView5<'_, f64> {
        self.precision.view()
    }

    /// Recall tensor (T x K x A x M).
    pub fn recall(&self) -> ArrayView4<'_, f64> {
        self.recall.view()
    }
}

/// Compare the (iou, category, area, max dets) extents of a tensor with `Params`.
fn check_extents(tensor: &str, extents: [usize; 4], params: &Params) -> Result<()> {
    let expected = [
        ("iou", params.iou_thresholds.len()),
        ("category", params.category_ids.len()),
        ("area", params.area_range_labels.len()),
        ("max dets", params.max_detections.len()),
    ];
    for (len, (axis, want)) in extents.into_iter().zip(expected) {
        if len != want {
            return Err(ClassMetricsError::Shape(format!(
                "{} {} axis has length {}, params define {}",
                tensor, axis, len, want
            )));
        }
    }
    Ok(())
}
