//! Slicing of evaluator score tensors into per-category AP/AR values.

pub mod bucket;
pub mod iou;
pub mod slice;
pub mod variant;

pub use bucket::BucketIndex;
pub use iou::IouSelection;
pub use slice::MetricSlice;
pub use variant::{MetricKind, MetricVariant};
