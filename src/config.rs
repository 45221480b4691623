//! Report configuration.

use crate::error::{ClassMetricsError, Result};
use serde::{Deserialize, Serialize};

/// Which bucket and IoU thresholds the per-category table reports.
///
/// The defaults reproduce the standard COCO per-class table: area `"all"`,
/// 100 max detections, AP at 0.50 and 0.75 next to the full IoU range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub area_label: String,
    pub max_detections: usize,
    /// Single IoU thresholds reported as extra AP columns, in order.
    pub ap_iou_thresholds: Vec<f64>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            area_label: "all".to_string(),
            max_detections: 100,
            ap_iou_thresholds: vec![0.50, 0.75],
        }
    }
}

impl ReportConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use coco_class_metrics::ReportConfig;
    ///
    /// let config = ReportConfig::from_json_str(r#"{"max_detections": 10}"#).unwrap();
    /// assert_eq!(config.max_detections, 10);
    /// assert_eq!(config.area_label, "all");
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.area_label.is_empty() {
            return Err(ClassMetricsError::Configuration(
                "area label must not be empty".to_string(),
            ));
        }
        if self.max_detections == 0 {
            return Err(ClassMetricsError::Configuration(
                "max detections must be positive".to_string(),
            ));
        }
        if let Some(thr) = self
            .ap_iou_thresholds
            .iter()
            .find(|t| !(0.0..=1.0).contains(*t))
        {
            return Err(ClassMetricsError::Configuration(format!(
                "IoU threshold {} outside [0, 1]",
                thr
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.area_label, "all");
        assert_eq!(config.max_detections, 100);
        assert_eq!(config.ap_iou_thresholds, vec![0.5, 0.75]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = ReportConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_invalid_threshold() {
        let result = ReportConfig::from_json_str(r#"{"ap_iou_thresholds": [1.5]}"#);
        assert!(matches!(result, Err(ClassMetricsError::Configuration(_))));
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let config = ReportConfig {
            ap_iou_thresholds: vec![f64::NAN],
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_max_detections() {
        let config = ReportConfig {
            max_detections: 0,
            ..ReportConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ClassMetricsError::Configuration(_))
        ));
    }
}
