//! IoU threshold selection along the first tensor axis.

use crate::types::Params;
use serde::{Deserialize, Serialize};

/// Which IoU thresholds a metric is averaged over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IouSelection {
    /// The full range `iou_thresholds[0]..=iou_thresholds[last]`.
    Range,
    /// A single threshold, matched by exact equality.
    Threshold(f64),
}

impl IouSelection {
    /// Indices into `params.iou_thresholds` covered by this selection.
    ///
    /// A threshold that is not present yields no indices; the resulting
    /// slice is empty and reported as the sentinel, never interpolated.
    ///
    /// # Example
    ///
    /// ```
    /// use coco_class_metrics::metrics::IouSelection;
    /// use coco_class_metrics::Params;
    ///
    /// let params = Params::coco_default(vec![1]);
    /// assert_eq!(IouSelection::Threshold(0.75).indices(&params), vec![5]);
    /// assert_eq!(IouSelection::Threshold(0.8).indices(&params), vec![6]);
    /// assert!(IouSelection::Threshold(0.8001).indices(&params).is_empty());
    /// assert_eq!(IouSelection::Range.indices(&params).len(), 10);
    /// ```
    pub fn indices(&self, params: &Params) -> Vec<usize> {
        match *self {
            IouSelection::Range => (0..params.iou_thresholds.len()).collect(),
            IouSelection::Threshold(thr) => params
                .iou_thresholds
                .iter()
                .enumerate()
                .filter(|&(_, &t)| t == thr)
                .map(|(i, _)| i)
                .collect(),
        }
    }

    /// Human-readable IoU fragment: `"0.50:0.95"` for a range, `"0.75"` for a threshold.
    ///
    /// Returns `None` for a range over an empty threshold list.
    pub fn label(&self, params: &Params) -> Option<String> {
        match *self {
            IouSelection::Range => params
                .iou_range()
                .map(|(low, high)| format!("{:.2}:{:.2}", low, high)),
            IouSelection::Threshold(thr) => Some(format!("{:.2}", thr)),
        }
    }
}
