use restoreval_image::{Image, ImageError, InputOrder};
use restoreval_tensor::{Tensor3, Tensor4};

/// Bring a raw pixel array into the canonical HWC image layout.
///
/// # Arguments
///
/// * `img` - The raw pixel array, laid out as described by `input_order`.
/// * `input_order` - Whether `img` is `HWC` or `CHW`.
///
/// # Errors
///
/// Returns [`ImageError::InvalidChannels`] if the channel axis is not `C` long.
///
/// # Example
///
/// ```
/// use restoreval_image::InputOrder;
/// use restoreval_imgproc::reorder::reorder_image;
/// use restoreval_tensor::Tensor3;
///
/// // 3 channels, 1 row, 2 columns
/// let chw = Tensor3::from_shape_vec([3, 1, 2], vec![0u8, 1, 2, 3, 4, 5]).unwrap();
/// let image = reorder_image::<_, 3>(&chw, InputOrder::Chw).unwrap();
///
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.as_slice(), &[0, 2, 4, 1, 3, 5]);
/// ```
pub fn reorder_image<T, const C: usize>(
    img: &Tensor3<T>,
    input_order: InputOrder,
) -> Result<Image<T, C>, ImageError>
where
    T: Clone,
{
    let hwc = match input_order {
        InputOrder::Hwc => img.clone(),
        InputOrder::Chw => img.permute_axes(input_order.to_hwc_axes()).as_contiguous(),
    };

    Image::from_tensor(hwc)
}

/// Convert an HWC image into a CHW tensor.
///
/// # Example
///
/// ```
/// use restoreval_image::{Image, ImageSize};
/// use restoreval_imgproc::reorder::image_to_tensor;
///
/// let image = Image::<u8, 3>::new(ImageSize { width: 2, height: 1 }, vec![0, 1, 2, 3, 4, 5]).unwrap();
/// let chw = image_to_tensor(&image);
///
/// assert_eq!(chw.shape, [3, 1, 2]);
/// assert_eq!(chw.as_slice(), &[0, 3, 1, 4, 2, 5]);
/// ```
pub fn image_to_tensor<T, const C: usize>(image: &Image<T, C>) -> Tensor3<T>
where
    T: Clone,
{
    image.permute_axes([2, 0, 1]).as_contiguous()
}

/// Convert an HWC image into a single-element NCHW batch of shape `[1, C, H, W]`.
///
/// # Errors
///
/// Propagates tensor construction errors.
pub fn image_to_batch<T, const C: usize>(image: &Image<T, C>) -> Result<Tensor4<T>, ImageError>
where
    T: Clone,
{
    let chw = image_to_tensor(image);
    // NOTE: the batch axis only prepends a dimension, the data order is unchanged
    let batch = Tensor4::from_shape_vec(
        [1, chw.shape[0], chw.shape[1], chw.shape[2]],
        chw.into_vec(),
    )?;
    Ok(batch)
}
