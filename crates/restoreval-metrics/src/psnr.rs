use num_traits::NumCast;
use restoreval_image::Image;
use restoreval_imgproc::{color, crop, metrics, reorder};
use restoreval_tensor::Tensor3;

use crate::{MetricError, MetricOptions};

/// Calculate the peak signal-to-noise ratio between two images.
///
/// Both images are expected in [0, 255], BGR. With `test_y_channel` set, only the
/// luma channel of the YCbCr representation is compared.
///
/// # Returns
///
/// The PSNR in dB; `f64::INFINITY` for identical inputs.
///
/// # Errors
///
/// * [`MetricError::ShapeMismatch`] if the images differ in shape.
/// * [`MetricError::Image`] if the images are not 3-channel or `crop_border` leaves no pixels.
///
/// # Example
///
/// ```
/// use restoreval_metrics::{calculate_psnr, MetricOptions};
/// use restoreval_tensor::Tensor3;
///
/// let img = Tensor3::from_shape_val([8, 8, 3], 100u8);
/// let img2 = Tensor3::from_shape_val([8, 8, 3], 110u8);
///
/// let psnr = calculate_psnr(&img, &img2, &MetricOptions::default()).unwrap();
/// assert!((psnr - 28.1308).abs() < 1e-4);
/// ```
pub fn calculate_psnr<T>(
    img: &Tensor3<T>,
    img2: &Tensor3<T>,
    options: &MetricOptions,
) -> Result<f64, MetricError>
where
    T: Copy + NumCast,
{
    if img.shape != img2.shape {
        return Err(MetricError::ShapeMismatch(img.shape, img2.shape));
    }

    let image = prepare(img, options)?;
    let image2 = prepare(img2, options)?;

    let psnr = if options.test_y_channel {
        metrics::psnr(&to_y_channel(&image)?, &to_y_channel(&image2)?, 255.0)?
    } else {
        metrics::psnr(&image, &image2, 255.0)?
    };

    Ok(psnr)
}

fn prepare<T>(img: &Tensor3<T>, options: &MetricOptions) -> Result<Image<f64, 3>, MetricError>
where
    T: Copy + NumCast,
{
    let image: Image<T, 3> = reorder::reorder_image(img, options.input_order)?;
    let image = image.cast_and_scale::<f64>(1.0)?;
    Ok(crop::crop_border(&image, options.crop_border)?)
}

fn to_y_channel(image: &Image<f64, 3>) -> Result<Image<f64, 1>, MetricError> {
    let mut y = Image::from_size_val(image.size(), 0.0)?;
    color::y_from_bgr(image, &mut y)?;
    Ok(y)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use restoreval_image::{ImageError, InputOrder};
    use restoreval_tensor::Tensor3;

    use super::calculate_psnr;
    use crate::{MetricError, MetricOptions};

    #[test]
    fn identical_is_infinite() -> Result<(), MetricError> {
        let img = Tensor3::from_shape_fn([6, 6, 3], |[y, x, c]| (y * 30 + x * 5 + c) as u8);
        let psnr = calculate_psnr(&img, &img, &MetricOptions::default())?;
        assert!(psnr.is_infinite() && psnr > 0.0);
        Ok(())
    }

    #[test]
    fn constant_offset() -> Result<(), MetricError> {
        let img = Tensor3::from_shape_val([4, 4, 3], 10u8);
        let img2 = Tensor3::from_shape_val([4, 4, 3], 12u8);
        let psnr = calculate_psnr(&img, &img2, &MetricOptions::default())?;
        assert_relative_eq!(psnr, 10.0 * (255.0f64 * 255.0 / 4.0).log10(), epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn crop_border_ignores_edges() -> Result<(), MetricError> {
        let img = Tensor3::from_shape_val([8, 8, 3], 50u8);
        // differ only on the outermost ring
        let img2 = Tensor3::from_shape_fn([8, 8, 3], |[y, x, _]| {
            if y == 0 || x == 0 || y == 7 || x == 7 {
                200u8
            } else {
                50u8
            }
        });

        let full = calculate_psnr(&img, &img2, &MetricOptions::default())?;
        assert!(full.is_finite());

        let cropped = calculate_psnr(&img, &img2, &MetricOptions::default().with_crop_border(1))?;
        assert!(cropped.is_infinite());
        Ok(())
    }

    #[test]
    fn y_channel_only_sees_luma() -> Result<(), MetricError> {
        // swapping blue for red changes the luma
        let img = Tensor3::from_shape_fn([4, 4, 3], |[_, _, c]| [200u8, 0, 0][c]);
        let img2 = Tensor3::from_shape_fn([4, 4, 3], |[_, _, c]| [0u8, 0, 200][c]);

        let options = MetricOptions::default().with_test_y_channel(true);
        let psnr_y = calculate_psnr(&img, &img2, &options)?;

        let diff = (65.481 - 24.966) * 200.0 / 255.0;
        assert_relative_eq!(
            psnr_y,
            10.0 * (255.0f64 * 255.0 / (diff * diff)).log10(),
            epsilon = 1e-9
        );

        let psnr_rgb = calculate_psnr(&img, &img2, &MetricOptions::default())?;
        assert!(psnr_rgb < psnr_y);
        Ok(())
    }

    #[test]
    fn chw_input() -> Result<(), MetricError> {
        let img = Tensor3::from_shape_val([3, 5, 5], 20u8);
        let img2 = Tensor3::from_shape_val([3, 5, 5], 22u8);
        let options = MetricOptions::default().with_input_order(InputOrder::Chw);
        let psnr = calculate_psnr(&img, &img2, &options)?;
        assert_relative_eq!(psnr, 10.0 * (255.0f64 * 255.0 / 4.0).log10(), epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn errors() {
        let img = Tensor3::from_shape_val([4, 4, 3], 0u8);
        let img2 = Tensor3::from_shape_val([4, 5, 3], 0u8);
        let res = calculate_psnr(&img, &img2, &MetricOptions::default());
        assert!(matches!(res, Err(MetricError::ShapeMismatch(_, _))));

        let res = calculate_psnr(&img, &img, &MetricOptions::default().with_crop_border(2));
        assert!(matches!(
            res,
            Err(MetricError::Image(ImageError::CropBorderTooLarge { .. }))
        ));
    }
}
