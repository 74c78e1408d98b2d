use restoreval_tensor::{Device, Tensor4};

/// An error type for perceptual network evaluation.
#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    /// The input is not a single RGB image batch.
    #[error("Expected an input of shape [1, 3, H, W], got {0:?}")]
    InvalidInputShape([usize; 4]),

    /// The two inputs do not have the same shape.
    #[error("Input shapes differ: {0:?} vs {1:?}")]
    ShapeMismatch([usize; 4], [usize; 4]),

    /// The backend running the network reported an error.
    #[error("Inference failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A pretrained network that scores the perceptual distance between two images.
///
/// The inputs are `[1, 3, H, W]` tensors in RGB order, normalized to roughly
/// `[-1, 1]`. Implementations return a non-negative distance that is `0` for
/// perceptually identical inputs.
///
/// Handles are borrowed immutably, so an implementation that is not reentrant must
/// serialize access internally.
pub trait PerceptualNetwork: Send + Sync {
    /// The device the network evaluates on.
    fn device(&self) -> Device;

    /// Compute the perceptual distance between two image batches.
    fn distance(&self, img: &Tensor4<f32>, img2: &Tensor4<f32>) -> Result<f32, NetworkError>;
}

/// Validate that two network inputs are equally shaped single RGB images.
///
/// Intended for [`PerceptualNetwork`] implementations.
///
/// # Example
///
/// ```
/// use restoreval_metrics::network::check_input_shapes;
/// use restoreval_tensor::Tensor4;
///
/// let a = Tensor4::from_shape_val([1, 3, 8, 8], 0.0f32);
/// let b = Tensor4::from_shape_val([1, 3, 8, 8], 0.0f32);
/// assert!(check_input_shapes(&a, &b).is_ok());
///
/// let c = Tensor4::from_shape_val([2, 3, 8, 8], 0.0f32);
/// assert!(check_input_shapes(&a, &c).is_err());
/// ```
pub fn check_input_shapes(img: &Tensor4<f32>, img2: &Tensor4<f32>) -> Result<(), NetworkError> {
    for shape in [img.shape, img2.shape] {
        if shape[0] != 1 || shape[1] != 3 {
            return Err(NetworkError::InvalidInputShape(shape));
        }
    }

    if img.shape != img2.shape {
        return Err(NetworkError::ShapeMismatch(img.shape, img2.shape));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_input_shapes, NetworkError};
    use restoreval_tensor::Tensor4;

    #[test]
    fn rejects_grayscale_input() {
        let a = Tensor4::from_shape_val([1, 1, 4, 4], 0.0f32);
        let res = check_input_shapes(&a, &a);
        assert!(matches!(res, Err(NetworkError::InvalidInputShape([1, 1, 4, 4]))));
    }

    #[test]
    fn rejects_different_sizes() {
        let a = Tensor4::from_shape_val([1, 3, 4, 4], 0.0f32);
        let b = Tensor4::from_shape_val([1, 3, 4, 5], 0.0f32);
        let res = check_input_shapes(&a, &b);
        assert!(matches!(res, Err(NetworkError::ShapeMismatch(_, _))));
    }
}
