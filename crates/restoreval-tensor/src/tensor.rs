use thiserror::Error;

use crate::view::TensorView;

/// An error type for tensor operations.
#[derive(Error, Debug, PartialEq)]
pub enum TensorError {
    /// Tensor shape does not match the provided data.
    #[error(
        "Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data"
    )]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },
}

impl TensorError {
    /// Create an invalid shape error.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }
}

/// Compute the strides from the shape of a tensor.
///
/// # Arguments
///
/// * `shape` - The shape of the tensor.
///
/// # Returns
///
/// * `strides` - The row-major strides of the tensor.
///
/// # Examples
///
/// ```rust
/// use restoreval_tensor::get_strides_from_shape;
///
/// let strides = get_strides_from_shape([2, 3, 4]);
/// assert_eq!(strides, [12, 4, 1]);
/// ```
pub fn get_strides_from_shape<const N: usize>(shape: [usize; N]) -> [usize; N] {
    let mut strides: [usize; N] = [0; N];
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        stride *= shape[i];
    }
    strides
}

/// A multi-dimensional array with owned, row-major data.
///
/// # Type Parameters
///
/// * `T` - The element type stored in the tensor
/// * `N` - The number of dimensions
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T, const N: usize> {
    /// The storage of the tensor.
    pub storage: Vec<T>,
    /// The shape of the tensor.
    pub shape: [usize; N],
    /// The strides of the tensor data in memory.
    pub strides: [usize; N],
}

impl<T, const N: usize> Tensor<T, N> {
    /// Creates a new `Tensor` with the given shape and data.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape of the tensor, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use restoreval_tensor::Tensor2;
    ///
    /// let t = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(t.shape, [2, 2]);
    /// assert_eq!(t.strides, [2, 1]);
    /// ```
    pub fn from_shape_vec(shape: [usize; N], data: Vec<T>) -> Result<Self, TensorError> {
        let numel = shape.iter().product::<usize>();
        if numel != data.len() {
            return Err(TensorError::invalid_shape(numel, data.len()));
        }
        let strides = get_strides_from_shape(shape);
        Ok(Self {
            storage: data,
            shape,
            strides,
        })
    }

    /// Creates a new `Tensor` filled with a single value.
    pub fn from_shape_val(shape: [usize; N], value: T) -> Self
    where
        T: Clone,
    {
        let numel = shape.iter().product::<usize>();
        Self {
            storage: vec![value; numel],
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Creates a new `Tensor` by evaluating `f` at every index in row-major order.
    ///
    /// # Example
    ///
    /// ```
    /// use restoreval_tensor::Tensor2;
    ///
    /// let t = Tensor2::from_shape_fn([2, 3], |[i, j]| i * 10 + j);
    /// assert_eq!(t.as_slice(), &[0, 1, 2, 10, 11, 12]);
    /// ```
    pub fn from_shape_fn<F>(shape: [usize; N], f: F) -> Self
    where
        F: Fn([usize; N]) -> T,
    {
        let numel = shape.iter().product::<usize>();
        let strides = get_strides_from_shape(shape);
        let storage = (0..numel)
            .map(|offset| f(unravel_index(offset, &shape, &strides)))
            .collect();
        Self {
            storage,
            shape,
            strides,
        }
    }

    /// Get the data of the tensor as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Get the data of the tensor as a mutable slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.storage
    }

    /// Consumes the tensor and returns the underlying data.
    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }

    /// Returns the number of elements in the tensor.
    #[inline]
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// Get the offset of the element at the given index, if it is in bounds.
    pub fn get_iter_offset(&self, index: [usize; N]) -> Option<usize> {
        let mut offset = 0;
        for ((&idx, &dim_size), &stride) in index.iter().zip(self.shape.iter()).zip(&self.strides)
        {
            if idx >= dim_size {
                return None;
            }
            offset += idx * stride;
        }
        Some(offset)
    }

    /// Get the element at the given index.
    ///
    /// # Example
    ///
    /// ```
    /// use restoreval_tensor::Tensor2;
    ///
    /// let t = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(t.get([1, 0]), Some(&3));
    /// assert_eq!(t.get([2, 0]), None);
    /// ```
    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        self.get_iter_offset(index)
            .and_then(|offset| self.storage.get(offset))
    }

    /// Permutes (reorders) the dimensions of the tensor.
    ///
    /// This is a zero-copy operation that returns a view with reordered dimensions.
    /// `axes[i]` names the source dimension that becomes the i-th output dimension.
    pub fn permute_axes(&self, axes: [usize; N]) -> TensorView<'_, T, N> {
        let mut new_shape = [0; N];
        let mut new_strides = [0; N];
        for (i, &axis) in axes.iter().enumerate() {
            new_shape[i] = self.shape[axis];
            new_strides[i] = self.strides[axis];
        }

        TensorView {
            storage: &self.storage,
            shape: new_shape,
            strides: new_strides,
        }
    }
}

/// Convert a row-major offset back into a multi-dimensional index.
pub(crate) fn unravel_index<const N: usize>(
    offset: usize,
    shape: &[usize; N],
    strides: &[usize; N],
) -> [usize; N] {
    let mut index = [0; N];
    let mut remainder = offset;
    for axis in 0..N {
        if shape[axis] == 0 {
            continue;
        }
        index[axis] = remainder / strides[axis];
        remainder %= strides[axis];
    }
    index
}

#[cfg(test)]
mod tests {
    use crate::{Tensor, Tensor2, Tensor3, TensorError};

    #[test]
    fn constructor_1d() -> Result<(), TensorError> {
        let t = Tensor::<u8, 1>::from_shape_vec([1], vec![2])?;
        assert_eq!(t.shape, [1]);
        assert_eq!(t.as_slice(), &[2]);
        assert_eq!(t.strides, [1]);
        assert_eq!(t.numel(), 1);
        Ok(())
    }

    #[test]
    fn constructor_invalid_shape() {
        let res = Tensor2::<u8>::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5]);
        assert_eq!(res, Err(TensorError::invalid_shape(6, 5)));
    }

    #[test]
    fn from_shape_val() {
        let t = Tensor3::from_shape_val([2, 2, 3], 7u8);
        assert_eq!(t.numel(), 12);
        assert!(t.as_slice().iter().all(|&x| x == 7));
        assert_eq!(t.strides, [6, 3, 1]);
    }

    #[test]
    fn from_shape_fn_3d() {
        let t = Tensor3::from_shape_fn([2, 3, 2], |[i, j, k]| i * 100 + j * 10 + k);
        assert_eq!(t.get([0, 0, 1]), Some(&1));
        assert_eq!(t.get([1, 2, 0]), Some(&120));
        assert_eq!(t.get([1, 2, 1]), Some(&121));
        assert_eq!(t.get([1, 1, 1]), Some(&111));
    }

    #[test]
    fn get_out_of_bounds() -> Result<(), TensorError> {
        let t = Tensor2::<u8>::from_shape_vec([2, 2], vec![1, 2, 3, 4])?;
        assert_eq!(t.get([0, 2]), None);
        assert_eq!(t.get([1, 1]), Some(&4));
        Ok(())
    }

    #[test]
    fn permute_hwc_to_chw() -> Result<(), TensorError> {
        #[rustfmt::skip]
        let t = Tensor3::from_shape_vec([2, 2, 3], vec![
            0u8, 1, 2,   3, 4, 5,
            6, 7, 8,     9, 10, 11,
        ])?;
        let chw = t.permute_axes([2, 0, 1]).as_contiguous();
        assert_eq!(chw.shape, [3, 2, 2]);
        assert_eq!(chw.strides, [4, 2, 1]);
        assert_eq!(chw.as_slice(), &[0, 3, 6, 9, 1, 4, 7, 10, 2, 5, 8, 11]);

        let back = chw.permute_axes([1, 2, 0]).as_contiguous();
        assert_eq!(back, t);
        Ok(())
    }
}
