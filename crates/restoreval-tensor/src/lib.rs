#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `restoreval-tensor` provides the small tensor type the rest of the workspace is
//! built on: an owned, row-major buffer with a compile-time number of dimensions,
//! plus zero-copy views for axis permutation.
//!
//! ```rust
//! use restoreval_tensor::Tensor;
//!
//! let tensor = Tensor::<u8, 3>::from_shape_vec([2, 1, 3], vec![0, 1, 2, 3, 4, 5]).unwrap();
//!
//! // HWC -> CHW
//! let chw = tensor.permute_axes([2, 0, 1]).as_contiguous();
//! assert_eq!(chw.shape, [3, 2, 1]);
//! assert_eq!(chw.as_slice(), &[0, 3, 1, 4, 2, 5]);
//! ```

/// Device module containing the device descriptor.
pub mod device;

/// Tensor module containing the main tensor implementation and error types.
pub mod tensor;

/// View module containing non-owning tensor views.
pub mod view;

pub use crate::device::Device;
pub use crate::tensor::{get_strides_from_shape, Tensor, TensorError};
pub use crate::view::TensorView;

/// Type alias for a 2-dimensional tensor.
pub type Tensor2<T> = Tensor<T, 2>;

/// Type alias for a 3-dimensional tensor.
pub type Tensor3<T> = Tensor<T, 3>;

/// Type alias for a 4-dimensional tensor.
pub type Tensor4<T> = Tensor<T, 4>;
