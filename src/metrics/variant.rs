//! Metric variants and their column labels.

use crate::metrics::iou::IouSelection;
use crate::types::Params;
use serde::{Deserialize, Serialize};

/// Kind of score tensor a metric is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    AveragePrecision,
    AverageRecall,
}

impl MetricKind {
    /// Short name used in column labels.
    pub fn short_name(&self) -> &'static str {
        match self {
            MetricKind::AveragePrecision => "AP",
            MetricKind::AverageRecall => "AR",
        }
    }

    pub fn long_name(&self) -> &'static str {
        match self {
            MetricKind::AveragePrecision => "Average Precision",
            MetricKind::AverageRecall => "Average Recall",
        }
    }
}

/// One reported metric: a kind plus the IoU thresholds it is averaged over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricVariant {
    pub kind: MetricKind,
    pub iou: IouSelection,
}

impl MetricVariant {
    pub fn precision(iou: IouSelection) -> Self {
        Self {
            kind: MetricKind::AveragePrecision,
            iou,
        }
    }

    pub fn recall(iou: IouSelection) -> Self {
        Self {
            kind: MetricKind::AverageRecall,
            iou,
        }
    }

    /// Column label, e.g. `"AP[IoU=0.50:0.95]"` or `"AP[IoU=0.75]"`.
    ///
    /// # Example
    ///
    /// ```
    /// use coco_class_metrics::metrics::{IouSelection, MetricVariant};
    /// use coco_class_metrics::Params;
    ///
    /// let params = Params::coco_default(vec![1]);
    /// let ar = MetricVariant::recall(IouSelection::Range);
    /// assert_eq!(ar.label(&params).unwrap(), "AR[IoU=0.50:0.95]");
    /// ```
    pub fn label(&self, params: &Params) -> Option<String> {
        self.iou
            .label(params)
            .map(|iou| format!("{}[IoU={}]", self.kind.short_name(), iou))
    }

    /// Evaluator-style summary line for one category, e.g.
    /// `" Average Precision  AP @[ IoU=0.50:0.95 | area=   all | maxDets=100 | label=3 ]"`.
    pub fn description(
        &self,
        params: &Params,
        area_label: &str,
        max_dets: usize,
        category_id: u64,
    ) -> String {
        let iou = self.iou.label(params).unwrap_or_default();
        format!(
            " {:<18} {} @[ IoU={:<9} | area={:>6} | maxDets={:>3} | label={} ]",
            self.kind.long_name(),
            self.kind.short_name(),
            iou,
            area_label,
            max_dets,
            category_id
        )
    }
}
