//! # coco-class-metrics
//!
//! Per-category COCO metric tables built from the precision/recall tensors of
//! a detection evaluator.
//!
//! Given the evaluator's output, the library computes for every category:
//! - **AP[IoU=0.50:0.95]** (Average Precision over the full IoU range)
//! - **AP[IoU=0.50]** and **AP[IoU=0.75]**
//! - **AR[IoU=0.50:0.95]** (Average Recall over the full IoU range)
//!
//! restricted to the `"all"` area bucket and 100 max detections.
//!
//! ## Features
//!
//! - Typed, validated evaluator output (`Params`, `EvaluationResult`)
//! - Sentinel (`-1`) propagation for metrics without valid data
//! - Deduplicated, first-seen-ordered column labels
//! - JSON loading of evaluator output and JSON export of tables
//! - Optional Polars DataFrame export (`dataframe` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use coco_class_metrics::{class_metrics, EvaluationResult, Params};
//! use ndarray::{Array4, Array5};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = Params::coco_default(vec![1]);
//! let precision = Array5::from_elem((10, 101, 1, 4, 3), 0.5).into_dyn();
//! let recall = Array4::from_elem((10, 1, 4, 3), 0.5).into_dyn();
//! let result = EvaluationResult::new(params, precision, recall)?;
//!
//! let table = class_metrics(&result)?;
//! for row in table.rows() {
//!     println!("{} {:?}", row.category_id, row.values);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Tensor layout
//!
//! - precision: (iou threshold, recall bin, category, area range, max dets)
//! - recall: (iou threshold, category, area range, max dets)

pub mod aggregator;
pub mod config;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod stats;
pub mod table;
pub mod types;

#[cfg(feature = "dataframe")]
pub mod dataframe;

// Re-export commonly used types and functions
pub use aggregator::{class_metrics, MetricAggregator};
pub use config::ReportConfig;
pub use error::{ClassMetricsError, Result};
pub use loader::{load_from_file, load_from_string};
pub use stats::TableStats;
pub use table::{MetricRow, MetricTable};
pub use types::{EvaluationResult, Params, SENTINEL};
