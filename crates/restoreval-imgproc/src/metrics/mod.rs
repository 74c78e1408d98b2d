//! Pixel-wise image quality metrics.
//!
//! - **MSE** (Mean Squared Error): Average squared difference between pixels
//! - **PSNR** (Peak Signal-to-Noise Ratio): Quality metric in dB scale

mod mse;

pub use mse::{mse, psnr};
