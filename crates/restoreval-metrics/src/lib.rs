#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! The crate computes full-reference image metrics the way a restoration evaluation
//! harness consumes them: two raw pixel arrays in `[0, 255]`, a handful of options,
//! and a scalar out. Metrics are registered by name in a [`MetricRegistry`] so a
//! configuration file can select them.
//!
//! The perceptual metric ([`calculate_lpips`]) does not ship a network. Callers pass a
//! handle implementing [`PerceptualNetwork`].

/// Error types for the metrics crate.
pub mod error;

/// Perceptual distance (LPIPS) metric.
pub mod lpips;

/// The perceptual network interface.
pub mod network;

/// Metric options and configuration parsing.
pub mod options;

/// Peak signal-to-noise ratio metric.
pub mod psnr;

/// Name-keyed metric registry.
pub mod registry;

pub use crate::error::MetricError;
pub use crate::lpips::calculate_lpips;
pub use crate::network::{NetworkError, PerceptualNetwork};
pub use crate::options::{MetricConfig, MetricOptions, MetricsConfig};
pub use crate::psnr::calculate_psnr;
pub use crate::registry::{MetricContext, MetricFn, MetricRegistry};
