//! Error handling and validation tests.

use coco_class_metrics::error::ClassMetricsError;
use coco_class_metrics::loader::load_from_string;
use coco_class_metrics::{class_metrics, EvaluationResult, MetricAggregator, Params, ReportConfig};
use ndarray::{ArrayD, IxDyn};

fn create_params(area_labels: &[&str], max_dets: Vec<usize>) -> Params {
    Params {
        iou_thresholds: vec![0.5, 0.75],
        area_range_labels: area_labels.iter().map(|s| s.to_string()).collect(),
        max_detections: max_dets,
        category_ids: vec![1, 2],
    }
}

fn create_result(params: Params) -> EvaluationResult {
    let (t, k, a, m) = (
        params.iou_thresholds.len(),
        params.category_ids.len(),
        params.area_range_labels.len(),
        params.max_detections.len(),
    );
    let precision = ArrayD::from_elem(IxDyn(&[t, 5, k, a, m]), 0.5);
    let recall = ArrayD::from_elem(IxDyn(&[t, k, a, m]), 0.5);
    EvaluationResult::new(params, precision, recall).unwrap()
}

// ============================================================================
// CONFIGURATION ERROR TESTS
// ============================================================================

#[test]
fn test_missing_all_area_label() {
    let result = create_result(create_params(&["small", "medium", "large"], vec![100]));

    match class_metrics(&result) {
        Err(ClassMetricsError::Configuration(msg)) => assert!(msg.contains("all")),
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}

#[test]
fn test_missing_max_dets_100() {
    let result = create_result(create_params(&["all"], vec![1, 10]));

    match class_metrics(&result) {
        Err(ClassMetricsError::Configuration(msg)) => assert!(msg.contains("100")),
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}

#[test]
fn test_ambiguous_max_dets() {
    let result = create_result(create_params(&["all"], vec![100, 100]));
    assert!(matches!(
        class_metrics(&result),
        Err(ClassMetricsError::Configuration(_))
    ));
}

#[test]
fn test_custom_bucket_must_exist() {
    let result = create_result(create_params(&["all", "small"], vec![100]));
    let config = ReportConfig {
        area_label: "medium".to_string(),
        ..ReportConfig::default()
    };
    let aggregator = MetricAggregator::new(config).unwrap();
    assert!(matches!(
        aggregator.aggregate(&result),
        Err(ClassMetricsError::Configuration(_))
    ));
}

#[test]
fn test_custom_bucket_resolves() {
    let result = create_result(create_params(&["all", "small"], vec![10, 100]));
    let config = ReportConfig {
        area_label: "small".to_string(),
        max_detections: 10,
        ..ReportConfig::default()
    };
    let table = MetricAggregator::new(config).unwrap().aggregate(&result).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn test_invalid_report_config_json() {
    let result = ReportConfig::from_json_str(r#"{"max_detections": 0}"#);
    assert!(matches!(result, Err(ClassMetricsError::Configuration(_))));

    let result = ReportConfig::from_json_str(r#"{"max_detections": "many"}"#);
    assert!(matches!(result, Err(ClassMetricsError::Json(_))));
}

// ============================================================================
// SHAPE ERROR TESTS
// ============================================================================

#[test]
fn test_precision_rank_mismatch() {
    let params = create_params(&["all"], vec![100]);
    let precision = ArrayD::from_elem(IxDyn(&[2, 5, 2, 1]), 0.5);
    let recall = ArrayD::from_elem(IxDyn(&[2, 2, 1, 1]), 0.5);

    match EvaluationResult::new(params, precision, recall) {
        Err(ClassMetricsError::Shape(msg)) => assert!(msg.contains("precision")),
        other => panic!("Expected Shape error, got {:?}", other),
    }
}

#[test]
fn test_recall_rank_mismatch() {
    let params = create_params(&["all"], vec![100]);
    let precision = ArrayD::from_elem(IxDyn(&[2, 5, 2, 1, 1]), 0.5);
    let recall = ArrayD::from_elem(IxDyn(&[2, 2, 1, 1, 1]), 0.5);

    match EvaluationResult::new(params, precision, recall) {
        Err(ClassMetricsError::Shape(msg)) => assert!(msg.contains("recall")),
        other => panic!("Expected Shape error, got {:?}", other),
    }
}

#[test]
fn test_iou_extent_mismatch() {
    let params = create_params(&["all"], vec![100]);
    let precision = ArrayD::from_elem(IxDyn(&[3, 5, 2, 1, 1]), 0.5);
    let recall = ArrayD::from_elem(IxDyn(&[2, 2, 1, 1]), 0.5);

    match EvaluationResult::new(params, precision, recall) {
        Err(ClassMetricsError::Shape(msg)) => assert!(msg.contains("iou")),
        other => panic!("Expected Shape error, got {:?}", other),
    }
}

#[test]
fn test_area_extent_mismatch() {
    let params = create_params(&["all", "small"], vec![100]);
    let precision = ArrayD::from_elem(IxDyn(&[2, 5, 2, 1, 1]), 0.5);
    let recall = ArrayD::from_elem(IxDyn(&[2, 2, 2, 1]), 0.5);

    match EvaluationResult::new(params, precision, recall) {
        Err(ClassMetricsError::Shape(msg)) => assert!(msg.contains("area")),
        other => panic!("Expected Shape error, got {:?}", other),
    }
}

#[test]
fn test_loader_shape_mismatch() {
    let json = r#"{
        "params": {
            "iou_thresholds": [0.5],
            "area_range_labels": ["all"],
            "max_detections": [100],
            "category_ids": [1, 2]
        },
        "precision": {"shape": [1, 1, 1, 1, 1], "data": [0.5]},
        "recall": {"shape": [1, 2, 1, 1], "data": [0.5, 0.5]}
    }"#;
    assert!(matches!(
        load_from_string(json),
        Err(ClassMetricsError::Shape(_))
    ));
}

#[test]
fn test_loader_duplicate_categories() {
    let json = r#"{
        "params": {
            "iou_thresholds": [0.5],
            "area_range_labels": ["all"],
            "max_detections": [100],
            "category_ids": [3, 3]
        },
        "precision": {"shape": [1, 1, 2, 1, 1], "data": [0.5, 0.5]},
        "recall": {"shape": [1, 2, 1, 1], "data": [0.5, 0.5]}
    }"#;
    assert!(matches!(
        load_from_string(json),
        Err(ClassMetricsError::Configuration(_))
    ));
}

#[test]
fn test_error_display() {
    let err = ClassMetricsError::Configuration("area range label \"all\" not found in params".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: area range label \"all\" not found in params"
    );
    let err = ClassMetricsError::Shape("bad".to_string());
    assert_eq!(err.to_string(), "Shape error: bad");
}
