#![deny(missing_docs)]
//! Image types and layouts for restoration metrics

/// image representation for metric computation.
pub mod image;

/// Error types for the image module.
pub mod error;

/// Memory layout of raw pixel arrays.
pub mod layout;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::layout::InputOrder;
