//! LPIPS perceptual distance.
//!
//! The distance itself is computed by an external pretrained network; this module
//! owns the preprocessing that turns two raw `[0, 255]` BGR arrays into the
//! normalized RGB batches the network expects:
//!
//! 1. reorder to HWC
//! 2. rescale to `[0, 1]`
//! 3. crop `crop_border` pixels from every edge
//! 4. BGR to RGB, HWC to CHW
//! 5. normalize with mean `0.5` and std `0.5` per channel
//! 6. add the batch axis

use num_traits::NumCast;
use restoreval_image::Image;
use restoreval_imgproc::{color, crop, normalize, reorder};
use restoreval_tensor::{Tensor3, Tensor4};

use crate::{MetricError, MetricOptions, PerceptualNetwork};

/// Per-channel mean applied before the network.
pub const LPIPS_MEAN: [f32; 3] = [0.5, 0.5, 0.5];

/// Per-channel standard deviation applied before the network.
pub const LPIPS_STD: [f32; 3] = [0.5, 0.5, 0.5];

/// Calculate the LPIPS perceptual distance between two images.
///
/// # Arguments
///
/// * `img` - The first image, BGR, with values in [0, 255].
/// * `img2` - The second image, same shape as `img`.
/// * `options` - Crop border and input order. `test_y_channel` is accepted but has no
///   effect on this metric; all three channels are always scored.
/// * `network` - The pretrained perceptual network.
///
/// # Returns
///
/// The perceptual distance, lower meaning more similar.
///
/// # Errors
///
/// * [`MetricError::ShapeMismatch`] if the images differ in shape.
/// * [`MetricError::Image`] if the images are not 3-channel or `crop_border` leaves no pixels.
/// * [`MetricError::Network`] if the network fails.
pub fn calculate_lpips<T>(
    img: &Tensor3<T>,
    img2: &Tensor3<T>,
    options: &MetricOptions,
    network: &dyn PerceptualNetwork,
) -> Result<f32, MetricError>
where
    T: Copy + NumCast,
{
    if img.shape != img2.shape {
        return Err(MetricError::ShapeMismatch(img.shape, img2.shape));
    }

    if options.test_y_channel {
        log::warn!("test_y_channel is ignored by lpips, all RGB channels are scored");
    }

    let batch = preprocess(img, options)?;
    let batch2 = preprocess(img2, options)?;

    let device = network.device();
    if !device.is_accelerator() {
        log::warn!("lpips network runs on {device}, expect slow evaluation");
    }
    log::debug!("lpips: scoring batches of shape {:?} on {device}", batch.shape);

    let distance = network.distance(&batch, &batch2)?;

    Ok(distance)
}

/// Turn a raw BGR array in [0, 255] into a normalized `[1, 3, H, W]` RGB batch.
///
/// # Errors
///
/// Fails if the image is not 3-channel or the crop border is too large.
pub fn preprocess<T>(
    img: &Tensor3<T>,
    options: &MetricOptions,
) -> Result<Tensor4<f32>, MetricError>
where
    T: Copy + NumCast,
{
    let image: Image<T, 3> = reorder::reorder_image(img, options.input_order)?;

    let image = image.cast_and_scale::<f64>(1.0 / 255.0)?;

    let image = crop::crop_border(&image, options.crop_border)?;
    if options.crop_border != 0 {
        log::debug!(
            "lpips: cropped {} pixels per edge to {}",
            options.crop_border,
            image.size()
        );
    }

    let image = image.cast_and_scale::<f32>(1.0)?;

    let mut rgb = Image::from_size_val(image.size(), 0.0f32)?;
    color::rgb_from_bgr(&image, &mut rgb)?;

    let mut normalized = Image::from_size_val(rgb.size(), 0.0f32)?;
    normalize::normalize_mean_std(&rgb, &mut normalized, &LPIPS_MEAN, &LPIPS_STD)?;

    Ok(reorder::image_to_batch(&normalized)?)
}
