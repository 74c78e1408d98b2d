use num_traits::Float;
use restoreval_image::{Image, ImageError};

/// Compute the mean squared error (MSE) between two images.
///
/// $ MSE = \frac{1}{n} \sum_{i=1}^{n} (I_1 - I_2)^2 $
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the two images have different sizes.
///
/// # Example
///
/// ```
/// use restoreval_image::{Image, ImageSize};
/// use restoreval_imgproc::metrics::mse;
///
/// let image1 = Image::<f32, 1>::new(ImageSize { width: 2, height: 2 }, vec![0.0, 1.0, 2.0, 3.0]).unwrap();
/// let image2 = Image::<f32, 1>::new(ImageSize { width: 2, height: 2 }, vec![0.0, 3.0, 2.0, 3.0]).unwrap();
///
/// assert_eq!(mse(&image1, &image2).unwrap(), 1.0);
/// ```
pub fn mse<T, const C: usize>(image1: &Image<T, C>, image2: &Image<T, C>) -> Result<T, ImageError>
where
    T: Float,
{
    if image1.size() != image2.size() {
        return Err(ImageError::InvalidImageSize(
            image1.cols(),
            image1.rows(),
            image2.cols(),
            image2.rows(),
        ));
    }

    let sum = image1
        .as_slice()
        .iter()
        .zip(image2.as_slice().iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + (a - b) * (a - b));

    let numel = T::from(image1.numel())
        .ok_or_else(|| ImageError::CastError(std::any::type_name::<T>().to_string()))?;

    Ok(sum / numel)
}

/// Compute the peak signal-to-noise ratio (PSNR) between two images.
///
/// $ PSNR = 10 \log_{10} \left( \frac{MAX^2}{MSE} \right) $
///
/// Identical images yield `+inf`.
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
/// * `max_value` - The maximum possible pixel value.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the two images have different sizes.
pub fn psnr<T, const C: usize>(
    image1: &Image<T, C>,
    image2: &Image<T, C>,
    max_value: T,
) -> Result<T, ImageError>
where
    T: Float,
{
    let mse = mse(image1, image2)?;

    if mse == T::zero() {
        return Ok(T::infinity());
    }

    let ten = T::from(10.0)
        .ok_or_else(|| ImageError::CastError(std::any::type_name::<T>().to_string()))?;

    Ok(ten * (max_value * max_value / mse).log10())
}
