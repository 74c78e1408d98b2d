//! Image normalization operations.
//!
//! Pretrained networks expect their inputs standardized per channel. The perceptual
//! metrics in this workspace map `[0, 1]` images to `[-1, 1]` with a mean and a
//! standard deviation of `0.5` on every channel:
//!
//! ```text
//! normalized = (pixel - μ) / σ
//! ```
//!
//! # Example
//!
//! ```
//! use restoreval_image::{Image, ImageSize};
//! use restoreval_imgproc::normalize::normalize_mean_std;
//!
//! let image = Image::<f32, 3>::from_size_val(ImageSize { width: 4, height: 4 }, 1.0).unwrap();
//! let mut normalized = Image::<f32, 3>::from_size_val(image.size(), 0.0).unwrap();
//!
//! normalize_mean_std(&image, &mut normalized, &[0.5; 3], &[0.5; 3]).unwrap();
//! assert!(normalized.as_slice().iter().all(|&x| x == 1.0));
//! ```

use num_traits::Float;

use restoreval_image::{Image, ImageError};

use crate::parallel;

/// Normalize an image using per-channel mean and standard deviation.
///
/// Applies `(pixel - μ) / σ` independently to each channel.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output normalized image with shape (H, W, C).
/// * `mean` - Mean values, one per channel.
/// * `std` - Standard deviation values, one per channel.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if `src` and `dst` have different dimensions.
pub fn normalize_mean_std<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    mean: &[T; C],
    std: &[T; C],
) -> Result<(), ImageError>
where
    T: Send + Sync + Float,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        src_pixel
            .iter()
            .zip(dst_pixel.iter_mut())
            .zip(mean.iter())
            .zip(std.iter())
            .for_each(|(((&src_val, dst_val), &mean_val), &std_val)| {
                *dst_val = (src_val - mean_val) / std_val;
            });
    });

    Ok(())
}
