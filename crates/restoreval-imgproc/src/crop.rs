use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};
use restoreval_image::{Image, ImageError, ImageSize};

/// Crop an image to a specified region.
///
/// # Arguments
///
/// * `src` - The source image to crop.
/// * `dst` - The destination image to store the cropped image.
/// * `x` - The x-coordinate of the top-left corner of the region to crop.
/// * `y` - The y-coordinate of the top-left corner of the region to crop.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the region does not fit inside `src`.
///
/// # Examples
///
/// ```rust
/// use restoreval_image::{Image, ImageSize};
/// use restoreval_imgproc::crop::crop_image;
///
/// let image = Image::<_, 1>::new(ImageSize { width: 4, height: 4 }, vec![
///     0u8, 1, 2, 3,
///     4u8, 5, 6, 7,
///     8u8, 9, 10, 11,
///     12u8, 13, 14, 15
/// ]).unwrap();
///
/// let mut cropped = Image::<_, 1>::from_size_val(ImageSize { width: 2, height: 2 }, 0u8).unwrap();
///
/// crop_image(&image, &mut cropped, 1, 1).unwrap();
///
/// assert_eq!(cropped.as_slice(), &[5u8, 6, 9, 10]);
/// ```
pub fn crop_image<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    x: usize,
    y: usize,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if x + dst.cols() > src.cols() || y + dst.rows() > src.rows() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let dst_cols = dst.cols();
    if dst_cols == 0 {
        return Ok(());
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(dst_cols * C)
        .enumerate()
        .for_each(|(i, dst_row)| {
            // get the slice at the top left corner
            let offset = (y + i) * src.cols() * C + x * C;
            let src_slice = &src.as_slice()[offset..offset + dst_cols * C];

            // copy the slice to the destination
            dst_row.copy_from_slice(src_slice);
        });

    Ok(())
}

/// Trim `border` pixels from each of the four edges of an image.
///
/// A border of zero returns an unchanged copy.
///
/// # Errors
///
/// Returns [`ImageError::CropBorderTooLarge`] when `2 * border` reaches the width or
/// the height, i.e. when nothing would remain.
///
/// # Examples
///
/// ```rust
/// use restoreval_image::{Image, ImageSize};
/// use restoreval_imgproc::crop::crop_border;
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 8, height: 6 }, 0).unwrap();
/// let cropped = crop_border(&image, 2).unwrap();
///
/// assert_eq!(cropped.size(), ImageSize { width: 4, height: 2 });
/// ```
pub fn crop_border<T, const C: usize>(
    src: &Image<T, C>,
    border: usize,
) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default + Send + Sync,
{
    if border == 0 {
        return Ok(src.clone());
    }

    // same as `2 * border >= side`, without overflowing on huge borders
    if border >= src.width().div_ceil(2) || border >= src.height().div_ceil(2) {
        return Err(ImageError::CropBorderTooLarge {
            border,
            width: src.width(),
            height: src.height(),
        });
    }

    let new_size = ImageSize {
        width: src.width() - 2 * border,
        height: src.height() - 2 * border,
    };

    let mut dst = Image::from_size_val(new_size, T::default())?;
    crop_image(src, &mut dst, border, border)?;

    Ok(dst)
}
