#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use restoreval_tensor as tensor;

#[doc(inline)]
pub use restoreval_image as image;

#[doc(inline)]
pub use restoreval_imgproc as imgproc;

#[doc(inline)]
pub use restoreval_metrics as metrics;
