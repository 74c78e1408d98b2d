use restoreval_tensor::TensorError;

/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the underlying tensor cannot be built.
    #[error("Failed to create image data: {0}")]
    TensorError(#[from] TensorError),

    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the number of channels does not match the image type.
    #[error("Expected {0} channels, got {1}")]
    InvalidChannels(usize, usize),

    /// Error when two images are expected to have the same size.
    #[error("Image size mismatch ({0}x{1}) vs ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel data cannot be cast to the requested type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),

    /// Error when a border crop would leave no pixels.
    #[error("Crop border {border} is too large for an image of size {width}x{height}")]
    CropBorderTooLarge {
        /// Pixels trimmed from each edge.
        border: usize,
        /// Width of the image before cropping.
        width: usize,
        /// Height of the image before cropping.
        height: usize,
    },

    /// Error when the input order is not supported.
    #[error("Wrong input_order {0}. Supported input_orders are \"HWC\" and \"CHW\"")]
    InvalidInputOrder(String),
}
