/// Compute device a tensor consumer runs on.
///
/// The tensors in this crate always live in host memory; the device is reported by
/// the components that consume them (e.g. a perceptual network) so callers can tell
/// where the heavy lifting happens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Device {
    /// CPU device
    #[default]
    Cpu,
    /// CUDA device with device ID
    Cuda {
        /// The CUDA device ID
        device_id: usize,
    },
}

impl Device {
    /// Creates a CUDA device with the specified device ID.
    pub fn cuda(device_id: usize) -> Self {
        Device::Cuda { device_id }
    }

    /// Returns true if the device is CPU.
    pub fn is_cpu(&self) -> bool {
        matches!(self, Device::Cpu)
    }

    /// Returns true if the device is an accelerator.
    pub fn is_accelerator(&self) -> bool {
        !self.is_cpu()
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Cuda { device_id } => write!(f, "cuda:{}", device_id),
        }
    }
}
