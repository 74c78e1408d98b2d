use crate::{get_strides_from_shape, tensor::unravel_index, Tensor};

/// A non-owning view into tensor data.
///
/// Views carry their own shape and strides, which lets axis permutation happen
/// without copying. Call [`TensorView::as_contiguous`] to materialize a row-major
/// tensor.
///
/// ```rust
/// use restoreval_tensor::Tensor;
///
/// let tensor = Tensor::<i32, 2>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
/// let contiguous = tensor.permute_axes([1, 0]).as_contiguous();
/// assert_eq!(contiguous.as_slice(), &[1, 3, 2, 4]);
/// ```
pub struct TensorView<'a, T, const N: usize> {
    /// Reference to the storage held by another tensor.
    pub storage: &'a [T],

    /// The shape of the tensor view.
    pub shape: [usize; N],

    /// The strides for accessing elements in the view.
    pub strides: [usize; N],
}

impl<T, const N: usize> TensorView<'_, T, N> {
    /// Returns the number of elements visible through the view.
    #[inline]
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Gets the element at the given index using the view's strides.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset falls outside of the storage.
    pub fn get_unchecked(&self, index: [usize; N]) -> &T {
        let offset = index
            .iter()
            .zip(self.strides.iter())
            .map(|(&idx, &stride)| idx * stride)
            .sum::<usize>();
        &self.storage[offset]
    }

    /// Copy the view into a new row-major tensor.
    pub fn as_contiguous(&self) -> Tensor<T, N>
    where
        T: Clone,
    {
        let shape = self.shape;
        let strides = get_strides_from_shape(shape);
        let storage = (0..self.numel())
            .map(|offset| {
                self.get_unchecked(unravel_index(offset, &shape, &strides))
                    .clone()
            })
            .collect();

        Tensor {
            storage,
            shape,
            strides,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Tensor2, TensorError};

    #[test]
    fn view_identity() -> Result<(), TensorError> {
        let t = Tensor2::<u8>::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6])?;
        let view = t.permute_axes([0, 1]);
        assert_eq!(view.numel(), 6);
        assert_eq!(*view.get_unchecked([1, 2]), 6);
        assert_eq!(view.as_contiguous(), t);
        Ok(())
    }

    #[test]
    fn view_transpose() -> Result<(), TensorError> {
        let t = Tensor2::<u8>::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6])?;
        let view = t.permute_axes([1, 0]);
        assert_eq!(view.shape, [3, 2]);
        assert_eq!(*view.get_unchecked([2, 1]), 6);
        assert_eq!(view.as_contiguous().as_slice(), &[1, 4, 2, 5, 3, 6]);
        Ok(())
    }
}
