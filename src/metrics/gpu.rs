//! Graphics metric reader.

use crate::metrics::{source, GpuSnapshot, SENTINEL_READING};
use crate::platform;
use lazy_static::lazy_static;
use tracing::warn;

lazy_static! {
    static ref INSTANCE: GpuMetrics = GpuMetrics::init();
}

/// Process-wide graphics telemetry reader.
///
/// Reports GPU-allocated memory and GPU core temperature, re-queried on
/// every call. Returns [`SENTINEL_READING`] on an unsupported host or when
/// the vendor tool output is malformed.
pub struct GpuMetrics {
    supported: bool,
}

impl GpuMetrics {
    /// The shared instance, initialized on first access.
    pub fn instance() -> &'static GpuMetrics {
        &INSTANCE
    }

    fn init() -> Self {
        Self {
            supported: platform::is_raspberry_pi(),
        }
    }

    /// Memory allocated to the GPU side of the split, in megabytes.
    pub fn memory_mb(&self) -> f64 {
        if !self.supported {
            return SENTINEL_READING;
        }
        source::memory_split_mb("gpu").unwrap_or_else(|| {
            warn!("unreadable GPU memory split, reporting sentinel");
            SENTINEL_READING
        })
    }

    /// GPU core temperature in degrees Celsius.
    pub fn temp_celsius(&self) -> f64 {
        if !self.supported {
            return SENTINEL_READING;
        }
        source::gpu_temp_celsius().unwrap_or_else(|| {
            warn!("unreadable GPU temperature, reporting sentinel");
            SENTINEL_READING
        })
    }

    /// A fresh bundle of all graphics readings.
    pub fn snapshot(&self) -> GpuSnapshot {
        GpuSnapshot {
            memory_mb: self.memory_mb(),
            temp_celsius: self.temp_celsius(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_is_shared() {
        let a = GpuMetrics::instance() as *const GpuMetrics;
        let b = GpuMetrics::instance() as *const GpuMetrics;
        assert_eq!(a, b);
    }

    #[test]
    fn test_sentinel_off_target() {
        if !platform::is_raspberry_pi() {
            let gpu = GpuMetrics::instance();
            assert_eq!(gpu.memory_mb(), SENTINEL_READING);
            assert_eq!(gpu.temp_celsius(), SENTINEL_READING);
        }
    }
}
