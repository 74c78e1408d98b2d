#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image cropping module.
pub mod crop;

/// image processing metrics module.
pub mod metrics;

/// operations to normalize images.
pub mod normalize;

/// module containing parallization utilities.
pub mod parallel;

/// layout conversion between raw arrays, images and network tensors.
pub mod reorder;
