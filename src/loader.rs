//! JSON loading utilities for evaluator output.

use crate::error::{ClassMetricsError, Result};
use crate::types::{EvaluationResult, Params};
use ndarray::{ArrayD, IxDyn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A dense tensor stored as a shape plus row-major data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensorData {
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
}

impl TensorData {
    fn into_array(self, name: &str) -> Result<ArrayD<f64>> {
        ArrayD::from_shape_vec(IxDyn(&self.shape), self.data).map_err(|e| {
            ClassMetricsError::Shape(format!(
                "{} data does not fill shape {:?}: {}",
                name, self.shape, e
            ))
        })
    }
}

/// On-disk layout of an evaluation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationDocument {
    pub params: Params,
    pub precision: TensorData,
    pub recall: TensorData,
}

impl TryFrom<EvaluationDocument> for EvaluationResult {
    type Error = ClassMetricsError;

    fn try_from(doc: EvaluationDocument) -> Result<Self> {
        let precision = doc.precision.into_array("precision")?;
        let recall = doc.recall.into_array("recall")?;
        EvaluationResult::new(doc.params, precision, recall)
    }
}

/// Load an evaluation result from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the tensors
/// do not match the parameters.
///
/// # Example
///
/// ```no_run
/// use coco_class_metrics::loader::load_from_file;
///
/// let result = load_from_file("eval.json").unwrap();
/// println!("Loaded {} categories", result.params().category_ids.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<EvaluationResult> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let doc: EvaluationDocument = serde_json::from_reader(reader)?;
    doc.try_into()
}

/// Load an evaluation result from a JSON string.
///
/// # Example
///
/// ```
/// use coco_class_metrics::loader::load_from_string;
///
/// let json = r#"{
///     "params": {
///         "iou_thresholds": [0.5],
///         "area_range_labels": ["all"],
///         "max_detections": [100],
///         "category_ids": [1]
///     },
///     "precision": {"shape": [1, 2, 1, 1, 1], "data": [0.5, 1.0]},
///     "recall": {"shape": [1, 1, 1, 1], "data": [0.75]}
/// }"#;
/// let result = load_from_string(json).unwrap();
/// assert_eq!(result.precision().dim(), (1, 2, 1, 1, 1));
/// ```
pub fn load_from_string(json_str: &str) -> Result<EvaluationResult> {
    let doc: EvaluationDocument = serde_json::from_str(json_str)?;
    doc.try_into()
}
