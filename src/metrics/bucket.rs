//! Resolution of the fixed area / max-detections bucket.

use crate::error::{ClassMetricsError, Result};
use crate::types::Params;

/// Positions of the reported area bucket and max-detections cap in `Params`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketIndex {
    pub area: usize,
    pub max_dets: usize,
}

impl BucketIndex {
    /// Locate `area_label` in `area_range_labels` and `max_dets` in `max_detections`.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` unless each value occurs exactly once.
    pub fn resolve(params: &Params, area_label: &str, max_dets: usize) -> Result<Self> {
        let area = unique_position(
            params.area_range_labels.iter().map(|l| l == area_label),
            || format!("area range label {:?}", area_label),
        )?;
        let max_dets_idx = unique_position(
            params.max_detections.iter().map(|&m| m == max_dets),
            || format!("max detections {}", max_dets),
        )?;
        Ok(Self {
            area,
            max_dets: max_dets_idx,
        })
    }
}

fn unique_position(
    matches: impl Iterator<Item = bool>,
    what: impl Fn() -> String,
) -> Result<usize> {
    let hits: Vec<usize> = matches
        .enumerate()
        .filter(|&(_, hit)| hit)
        .map(|(i, _)| i)
        .collect();
    match hits.as_slice() {
        [idx] => Ok(*idx),
        [] => Err(ClassMetricsError::Configuration(format!(
            "{} not found in params",
            what()
        ))),
        _ => Err(ClassMetricsError::Configuration(format!(
            "{} appears {} times in params",
            what(),
            hits.len()
        ))),
    }
}
