use restoreval_image::ImageError;
use restoreval_tensor::TensorError;

use crate::network::NetworkError;

/// An error type for metric computation.
#[derive(thiserror::Error, Debug)]
pub enum MetricError {
    /// The two images do not have the same shape.
    #[error("Image shapes are different: {0:?}, {1:?}.")]
    ShapeMismatch([usize; 3], [usize; 3]),

    /// An image preprocessing step failed.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// A tensor could not be built.
    #[error(transparent)]
    Tensor(#[from] TensorError),

    /// The metric needs a perceptual network and none was supplied.
    #[error("{0} requires a perceptual network handle, but none was provided")]
    NetworkUnavailable(String),

    /// The perceptual network failed to evaluate.
    #[error("Perceptual network failed: {0}")]
    Network(#[from] NetworkError),

    /// No metric is registered under the name.
    #[error("Unknown metric {0}")]
    UnknownMetric(String),

    /// A metric is already registered under the name.
    #[error("Metric {0} is already registered")]
    DuplicateMetric(String),

    /// The metric configuration could not be parsed.
    #[error("Invalid metric configuration: {0}")]
    Config(#[from] serde_json::Error),
}
