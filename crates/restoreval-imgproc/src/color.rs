use restoreval_image::{Image, ImageError};

use crate::parallel;

/// Convert a BGR image to RGB by swapping the blue and red channels.
///
/// # Arguments
///
/// * `src` - The input BGR image.
/// * `dst` - The output RGB image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use restoreval_image::{Image, ImageSize};
/// use restoreval_imgproc::color::rgb_from_bgr;
///
/// let bgr = Image::<u8, 3>::new(ImageSize { width: 1, height: 1 }, vec![10, 20, 30]).unwrap();
/// let mut rgb = Image::<u8, 3>::from_size_val(bgr.size(), 0).unwrap();
///
/// rgb_from_bgr(&bgr, &mut rgb).unwrap();
/// assert_eq!(rgb.as_slice(), &[30, 20, 10]);
/// ```
pub fn rgb_from_bgr<T>(src: &Image<T, 3>, dst: &mut Image<T, 3>) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
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
        dst_pixel
            .iter_mut()
            .zip(src_pixel.iter().rev())
            .for_each(|(d, s)| {
                *d = *s;
            });
    });

    Ok(())
}

/// Compute the luma (Y) channel of a BGR image in the ITU-R BT.601 YCbCr space.
///
/// The input is expected in the range [0, 255]; the output is in [16, 235]:
///
/// `Y = (65.481 R + 128.553 G + 24.966 B) / 255 + 16`
///
/// # Arguments
///
/// * `src` - The input BGR image.
/// * `dst` - The output single channel image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use restoreval_image::{Image, ImageSize};
/// use restoreval_imgproc::color::y_from_bgr;
///
/// let bgr = Image::<f64, 3>::new(ImageSize { width: 2, height: 1 }, vec![
///     0.0, 0.0, 0.0,
///     255.0, 255.0, 255.0,
/// ]).unwrap();
/// let mut y = Image::<f64, 1>::from_size_val(bgr.size(), 0.0).unwrap();
///
/// y_from_bgr(&bgr, &mut y).unwrap();
/// assert_eq!(y.as_slice()[0], 16.0);
/// assert!((y.as_slice()[1] - 235.0).abs() < 1e-9);
/// ```
pub fn y_from_bgr(src: &Image<f64, 3>, dst: &mut Image<f64, 1>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let (b, g, r) = (src_pixel[0], src_pixel[1], src_pixel[2]);
        dst_pixel[0] = (24.966 * b + 128.553 * g + 65.481 * r) / 255.0 + 16.0;
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use restoreval_image::{Image, ImageError, ImageSize};

    #[test]
    fn rgb_from_bgr() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::<u8, 3>::new(
            ImageSize { width: 2, height: 1 },
            vec![
                0, 1, 2,
                3, 4, 5,
            ],
        )?;
        let mut rgb = Image::<u8, 3>::from_size_val(image.size(), 0)?;
        super::rgb_from_bgr(&image, &mut rgb)?;
        assert_eq!(rgb.as_slice(), &[2, 1, 0, 5, 4, 3]);
        Ok(())
    }

    #[test]
    fn rgb_from_bgr_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val([2, 2].into(), 0)?;
        let mut rgb = Image::<u8, 3>::from_size_val([3, 2].into(), 0)?;
        let res = super::rgb_from_bgr(&image, &mut rgb);
        assert_eq!(res, Err(ImageError::InvalidImageSize(2, 2, 3, 2)));
        Ok(())
    }

    #[test]
    fn y_from_bgr_primaries() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::<f64, 3>::new(
            ImageSize { width: 3, height: 1 },
            vec![
                255.0, 0.0, 0.0, // blue
                0.0, 255.0, 0.0, // green
                0.0, 0.0, 255.0, // red
            ],
        )?;
        let mut y = Image::<f64, 1>::from_size_val(image.size(), 0.0)?;
        super::y_from_bgr(&image, &mut y)?;
        assert_relative_eq!(y.as_slice()[0], 24.966 + 16.0, epsilon = 1e-9);
        assert_relative_eq!(y.as_slice()[1], 128.553 + 16.0, epsilon = 1e-9);
        assert_relative_eq!(y.as_slice()[2], 65.481 + 16.0, epsilon = 1e-9);
        Ok(())
    }
}
