//! Aggregation of evaluator tensors into a per-category metric table.

use crate::config::ReportConfig;
use crate::error::Result;
use crate::metrics::{BucketIndex, IouSelection, MetricSlice, MetricVariant};
use crate::table::{ColumnSet, MetricRow, MetricTable};
use crate::types::{EvaluationResult, SENTINEL};
use tracing::{debug, info, instrument};

/// Builds a [`MetricTable`] from one [`EvaluationResult`].
///
/// Per category, in `category_ids` order, the row holds AP over the full IoU
/// range, AP at each configured single threshold, then AR over the full range.
/// The aggregator is stateless between calls; aggregating the same result
/// twice yields identical tables.
#[derive(Debug, Clone, Default)]
pub struct MetricAggregator {
    config: ReportConfig,
}

impl MetricAggregator {
    /// Create an aggregator, validating `config` first.
    pub fn new(config: ReportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Metric variants in per-row traversal order.
    pub fn variants(&self) -> Vec<MetricVariant> {
        std::iter::once(MetricVariant::precision(IouSelection::Range))
            .chain(
                self.config
                    .ap_iou_thresholds
                    .iter()
                    .map(|&thr| MetricVariant::precision(IouSelection::Threshold(thr))),
            )
            .chain(std::iter::once(MetricVariant::recall(IouSelection::Range)))
            .collect()
    }

    /// Build the per-category table.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the configured area label or max-detections
    /// cap does not resolve to exactly one position in the result's `Params`.
    /// No partial table is returned.
    #[instrument(skip_all, fields(categories = result.params().category_ids.len()))]
    pub fn aggregate(&self, result: &EvaluationResult) -> Result<MetricTable> {
        let params = result.params();
        let bucket = BucketIndex::resolve(
            params,
            &self.config.area_label,
            self.config.max_detections,
        )?;

        // Validity is shared by all categories of a slice, so restrict once per variant.
        let slices: Vec<MetricSlice> = self
            .variants()
            .into_iter()
            .map(|variant| MetricSlice::new(result, variant, bucket))
            .collect();
        for slice in slices.iter().filter(|s| !s.has_valid()) {
            debug!(
                metric = slice.variant().kind.short_name(),
                iou = ?slice.variant().iou,
                "no valid values in slice, reporting sentinel"
            );
        }

        let mut columns = ColumnSet::new();
        let mut rows = Vec::with_capacity(params.category_ids.len());

        for (category_idx, &category_id) in params.category_ids.iter().enumerate() {
            let mut values = Vec::with_capacity(slices.len());

            for slice in &slices {
                let variant = slice.variant();
                match slice.category_mean(category_idx) {
                    Some((mean, label)) => {
                        debug!(
                            "{} = {:.3}",
                            variant.description(
                                params,
                                &self.config.area_label,
                                self.config.max_detections,
                                category_id
                            ),
                            mean
                        );
                        columns.push(label.to_string());
                        values.push(mean);
                    }
                    None => values.push(SENTINEL),
                }
            }

            rows.push(MetricRow {
                category_id,
                values,
            });
        }

        let table = MetricTable::new(columns, rows);
        info!(
            rows = table.len(),
            columns = table.columns().len(),
            "built per-category metric table"
        );
        Ok(table)
    }
}

/// Build the standard per-category table (area `"all"`, 100 max detections,
/// AP over 0.50:0.95, AP at 0.50 and 0.75, AR over 0.50:0.95).
///
/// # Example
///
/// ```
/// use coco_class_metrics::{class_metrics, EvaluationResult, Params};
/// use ndarray::{Array4, Array5};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let params = Params::coco_default(vec![1, 2]);
/// let precision = Array5::from_elem((10, 101, 2, 4, 3), 0.8).into_dyn();
/// let recall = Array4::from_elem((10, 2, 4, 3), 0.9).into_dyn();
/// let result = EvaluationResult::new(params, precision, recall)?;
///
/// let table = class_metrics(&result)?;
/// assert_eq!(table.columns()[1], "AP[IoU=0.50:0.95]");
/// assert_eq!(table.rows()[1].category_id, 2);
/// # Ok(())
/// # }
/// ```
pub fn class_metrics(result: &EvaluationResult) -> Result<MetricTable> {
    MetricAggregator::default().aggregate(result)
}
