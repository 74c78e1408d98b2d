use std::collections::BTreeMap;

use restoreval_image::InputOrder;
use serde::{Deserialize, Serialize};

use crate::MetricError;

/// Options shared by the full-reference metrics.
///
/// Missing keys take their defaults when deserialized; unknown keys are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricOptions {
    /// Pixels trimmed from each edge before scoring.
    pub crop_border: usize,
    /// Layout of the raw input arrays.
    pub input_order: InputOrder,
    /// Score the luma channel only, for metrics that support it.
    pub test_y_channel: bool,
}

impl MetricOptions {
    /// Set the crop border.
    pub fn with_crop_border(mut self, crop_border: usize) -> Self {
        self.crop_border = crop_border;
        self
    }

    /// Set the input order.
    pub fn with_input_order(mut self, input_order: InputOrder) -> Self {
        self.input_order = input_order;
        self
    }

    /// Set whether only the Y channel is scored.
    pub fn with_test_y_channel(mut self, test_y_channel: bool) -> Self {
        self.test_y_channel = test_y_channel;
        self
    }
}

/// One entry of a metrics configuration section.
///
/// ```
/// use restoreval_metrics::MetricConfig;
///
/// let config: MetricConfig = serde_json::from_str(
///     r#"{ "type": "calculate_lpips", "crop_border": 4 }"#,
/// ).unwrap();
///
/// assert_eq!(config.kind, "calculate_lpips");
/// assert_eq!(config.options().crop_border, 4);
/// ```
// NOTE: the option fields are repeated from `MetricOptions` because
// `#[serde(flatten)]` does not work together with `deny_unknown_fields`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricConfig {
    /// Registry name of the metric.
    #[serde(rename = "type")]
    pub kind: String,
    /// Pixels trimmed from each edge before scoring.
    #[serde(default)]
    pub crop_border: usize,
    /// Layout of the raw input arrays.
    #[serde(default)]
    pub input_order: InputOrder,
    /// Score the luma channel only, for metrics that support it.
    #[serde(default)]
    pub test_y_channel: bool,
}

impl MetricConfig {
    /// Create a configuration for the metric registered as `kind`.
    pub fn new(kind: impl Into<String>, options: MetricOptions) -> Self {
        Self {
            kind: kind.into(),
            crop_border: options.crop_border,
            input_order: options.input_order,
            test_y_channel: options.test_y_channel,
        }
    }

    /// The metric options carried by this entry.
    pub fn options(&self) -> MetricOptions {
        MetricOptions {
            crop_border: self.crop_border,
            input_order: self.input_order,
            test_y_channel: self.test_y_channel,
        }
    }
}

/// A metrics configuration section: user label to metric entry.
pub type MetricsConfig = BTreeMap<String, MetricConfig>;

/// Parse a metrics configuration section from JSON.
///
/// # Errors
///
/// Returns [`MetricError::Config`] on malformed JSON, unknown keys or an unsupported
/// `input_order`.
pub fn parse_metrics_config(json: &str) -> Result<MetricsConfig, MetricError> {
    Ok(serde_json::from_str(json)?)
}
