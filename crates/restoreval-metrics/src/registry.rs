use std::collections::{BTreeMap, HashMap};

use restoreval_tensor::Tensor3;

use crate::{
    calculate_lpips, calculate_psnr, MetricConfig, MetricError, MetricOptions, MetricsConfig,
    PerceptualNetwork,
};

/// Registry name of the LPIPS metric.
pub const LPIPS: &str = "calculate_lpips";

/// Registry name of the PSNR metric.
pub const PSNR: &str = "calculate_psnr";

/// Resources a metric may need beyond the two images.
#[derive(Clone, Copy, Default)]
pub struct MetricContext<'a> {
    perceptual_network: Option<&'a dyn PerceptualNetwork>,
}

impl<'a> MetricContext<'a> {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a perceptual network handle.
    pub fn with_perceptual_network(mut self, network: &'a dyn PerceptualNetwork) -> Self {
        self.perceptual_network = Some(network);
        self
    }

    /// The perceptual network, or [`MetricError::NetworkUnavailable`] naming `metric`.
    pub fn perceptual_network(
        &self,
        metric: &str,
    ) -> Result<&'a dyn PerceptualNetwork, MetricError> {
        self.perceptual_network
            .ok_or_else(|| MetricError::NetworkUnavailable(metric.to_string()))
    }
}

impl std::fmt::Debug for MetricContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricContext")
            .field(
                "perceptual_network",
                &self.perceptual_network.map(|network| network.device()),
            )
            .finish()
    }
}

/// The signature every registered metric shares.
pub type MetricFn = fn(
    &Tensor3<u8>,
    &Tensor3<u8>,
    &MetricOptions,
    &MetricContext<'_>,
) -> Result<f64, MetricError>;

/// Metrics looked up by name.
///
/// [`MetricRegistry::default`] holds the built-in metrics under [`LPIPS`] and [`PSNR`].
///
/// # Example
///
/// ```
/// use restoreval_metrics::{MetricConfig, MetricContext, MetricOptions, MetricRegistry};
/// use restoreval_tensor::Tensor3;
///
/// let registry = MetricRegistry::default();
/// let img = Tensor3::from_shape_val([8, 8, 3], 100u8);
/// let img2 = Tensor3::from_shape_val([8, 8, 3], 110u8);
///
/// let config = MetricConfig::new("calculate_psnr", MetricOptions::default());
/// let psnr = registry.calculate(&config, &img, &img2, &MetricContext::new()).unwrap();
/// assert!((psnr - 28.1308).abs() < 1e-4);
/// ```
#[derive(Clone)]
pub struct MetricRegistry {
    metrics: HashMap<String, MetricFn>,
}

impl MetricRegistry {
    /// Create a registry with no metrics.
    pub fn new() -> Self {
        Self {
            metrics: HashMap::new(),
        }
    }

    /// Register `metric` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`MetricError::DuplicateMetric`] if the name is taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        metric: MetricFn,
    ) -> Result<(), MetricError> {
        let name = name.into();
        if self.metrics.contains_key(&name) {
            return Err(MetricError::DuplicateMetric(name));
        }
        log::debug!("registering metric {name}");
        self.metrics.insert(name, metric);
        Ok(())
    }

    /// Look up a metric by name.
    pub fn get(&self, name: &str) -> Result<MetricFn, MetricError> {
        self.metrics
            .get(name)
            .copied()
            .ok_or_else(|| MetricError::UnknownMetric(name.to_string()))
    }

    /// Whether a metric is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.metrics.contains_key(name)
    }

    /// The registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.metrics.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    /// Run the metric selected by `config` on a pair of images.
    pub fn calculate(
        &self,
        config: &MetricConfig,
        img: &Tensor3<u8>,
        img2: &Tensor3<u8>,
        ctx: &MetricContext<'_>,
    ) -> Result<f64, MetricError> {
        let metric = self.get(&config.kind)?;
        log::debug!("calculating {} with {:?}", config.kind, config.options());
        metric(img, img2, &config.options(), ctx)
    }

    /// Run every entry of a configuration section, keyed by its label.
    ///
    /// Stops at the first failing metric.
    pub fn calculate_all(
        &self,
        section: &MetricsConfig,
        img: &Tensor3<u8>,
        img2: &Tensor3<u8>,
        ctx: &MetricContext<'_>,
    ) -> Result<BTreeMap<String, f64>, MetricError> {
        section
            .iter()
            .map(|(label, config)| {
                let score = self.calculate(config, img, img2, ctx)?;
                log::info!("{label} ({}): {score:.4}", config.kind);
                Ok((label.clone(), score))
            })
            .collect()
    }
}

impl std::fmt::Debug for MetricRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricRegistry")
            .field("metrics", &self.names())
            .finish()
    }
}

impl Default for MetricRegistry {
    fn default() -> Self {
        let metrics: [(&str, MetricFn); 2] = [(LPIPS, lpips_entry), (PSNR, psnr_entry)];
        Self {
            metrics: metrics
                .into_iter()
                .map(|(name, metric)| (name.to_string(), metric))
                .collect(),
        }
    }
}

fn lpips_entry(
    img: &Tensor3<u8>,
    img2: &Tensor3<u8>,
    options: &MetricOptions,
    ctx: &MetricContext<'_>,
) -> Result<f64, MetricError> {
    let network = ctx.perceptual_network(LPIPS)?;
    Ok(calculate_lpips(img, img2, options, network)? as f64)
}

fn psnr_entry(
    img: &Tensor3<u8>,
    img2: &Tensor3<u8>,
    options: &MetricOptions,
    _ctx: &MetricContext<'_>,
) -> Result<f64, MetricError> {
    calculate_psnr(img, img2, options)
}

#[cfg(test)]
mod tests {
    use restoreval_tensor::{Device, Tensor3, Tensor4};

    use super::{MetricContext, MetricRegistry, LPIPS, PSNR};
    use crate::network::{check_input_shapes, NetworkError, PerceptualNetwork};
    use crate::{MetricConfig, MetricError, MetricOptions};

    struct ConstantNetwork(f32);

    impl PerceptualNetwork for ConstantNetwork {
        fn device(&self) -> Device {
            Device::Cpu
        }

        fn distance(&self, img: &Tensor4<f32>, img2: &Tensor4<f32>) -> Result<f32, NetworkError> {
            check_input_shapes(img, img2)?;
            Ok(self.0)
        }
    }

    fn always_one(
        _: &Tensor3<u8>,
        _: &Tensor3<u8>,
        _: &MetricOptions,
        _: &MetricContext<'_>,
    ) -> Result<f64, MetricError> {
        Ok(1.0)
    }

    #[test]
    fn default_names() {
        let registry = MetricRegistry::default();
        assert_eq!(registry.names(), vec![LPIPS, PSNR]);
        assert!(registry.contains("calculate_lpips"));
        assert!(!registry.contains("calculate_ssim"));
        assert!(MetricRegistry::new().names().is_empty());
    }

    #[test]
    fn register_and_dispatch() -> Result<(), MetricError> {
        let mut registry = MetricRegistry::new();
        registry.register("one", always_one)?;

        let img = Tensor3::from_shape_val([2, 2, 3], 0u8);
        let config = MetricConfig::new("one", MetricOptions::default());
        let score = registry.calculate(&config, &img, &img, &MetricContext::new())?;
        assert_eq!(score, 1.0);

        let res = registry.register("one", always_one);
        assert!(matches!(res, Err(MetricError::DuplicateMetric(name)) if name == "one"));
        Ok(())
    }

    #[test]
    fn unknown_metric() {
        let registry = MetricRegistry::default();
        let img = Tensor3::from_shape_val([2, 2, 3], 0u8);
        let config = MetricConfig::new("calculate_niqe", MetricOptions::default());
        let res = registry.calculate(&config, &img, &img, &MetricContext::new());
        assert!(matches!(res, Err(MetricError::UnknownMetric(name)) if name == "calculate_niqe"));
    }

    #[test]
    fn lpips_needs_a_network() -> Result<(), MetricError> {
        let registry = MetricRegistry::default();
        let img = Tensor3::from_shape_val([4, 4, 3], 0u8);
        let config = MetricConfig::new(LPIPS, MetricOptions::default());

        let res = registry.calculate(&config, &img, &img, &MetricContext::new());
        assert!(matches!(res, Err(MetricError::NetworkUnavailable(name)) if name == LPIPS));

        let network = ConstantNetwork(0.25);
        let ctx = MetricContext::new().with_perceptual_network(&network);
        let score = registry.calculate(&config, &img, &img, &ctx)?;
        assert_eq!(score, 0.25);
        Ok(())
    }

    #[test]
    fn psnr_ignores_the_network() -> Result<(), MetricError> {
        let registry = MetricRegistry::default();
        let img = Tensor3::from_shape_val([4, 4, 3], 7u8);
        let config = MetricConfig::new(PSNR, MetricOptions::default());
        let score = registry.calculate(&config, &img, &img, &MetricContext::new())?;
        assert!(score.is_infinite());
        Ok(())
    }

    #[test]
    fn context_debug_shows_device() {
        let network = ConstantNetwork(0.0);
        let ctx = MetricContext::new().with_perceptual_network(&network);
        assert_eq!(
            format!("{ctx:?}"),
            "MetricContext { perceptual_network: Some(Cpu) }"
        );
    }
}
