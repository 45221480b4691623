//! Restriction of score tensors to one metric variant.

use crate::metrics::bucket::BucketIndex;
use crate::metrics::variant::{MetricKind, MetricVariant};
use crate::types::{EvaluationResult, SENTINEL};
use ndarray::{ArrayD, Axis};

/// Score tensor restricted to a variant's IoU thresholds and the fixed bucket.
///
/// The remaining axes are (iou, recall bin, category) for precision and
/// (iou, category) for recall, so the category axis is always last.
#[derive(Debug, Clone)]
pub struct MetricSlice {
    variant: MetricVariant,
    scores: ArrayD<f64>,
    /// Column label, present exactly when the slice holds a valid value.
    label: Option<String>,
}

impl MetricSlice {
    /// Restrict the tensor matching `variant.kind`.
    ///
    /// Validity is decided here, across every category of the slice: the
    /// metric is reported for a category only if some value anywhere in the
    /// slice exceeds the sentinel.
    pub fn new(result: &EvaluationResult, variant: MetricVariant, bucket: BucketIndex) -> Self {
        let iou_indices = variant.iou.indices(result.params());
        let scores = match variant.kind {
            MetricKind::AveragePrecision => result
                .precision()
                .index_axis_move(Axis(4), bucket.max_dets)
                .index_axis_move(Axis(3), bucket.area)
                .select(Axis(0), &iou_indices)
                .into_dyn(),
            MetricKind::AverageRecall => result
                .recall()
                .index_axis_move(Axis(3), bucket.max_dets)
                .index_axis_move(Axis(2), bucket.area)
                .select(Axis(0), &iou_indices)
                .into_dyn(),
        };
        // A valid value implies at least one selected IoU threshold, so the label exists.
        let label = if scores.iter().any(|&v| v > SENTINEL) {
            variant.label(result.params())
        } else {
            None
        };

        Self {
            variant,
            scores,
            label,
        }
    }

    pub fn variant(&self) -> MetricVariant {
        self.variant
    }

    /// Whether any category has a value above the sentinel.
    pub fn has_valid(&self) -> bool {
        self.label.is_some()
    }

    /// Column label of a valid slice.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Mean over the remaining axes for the category at `category_idx`,
    /// paired with the slice's column label.
    ///
    /// Returns `None` when the slice holds no valid value. Sentinel entries of
    /// the category itself are averaged like any other value.
    pub fn category_mean(&self, category_idx: usize) -> Option<(f64, &str)> {
        let label = self.label.as_deref()?;
        let category_axis = Axis(self.scores.ndim() - 1);
        let mean = self.scores.index_axis(category_axis, category_idx).mean()?;
        Some((mean, label))
    }
}
