//! Processor metric reader.

use crate::metrics::{source, CpuSnapshot, SENTINEL_READING};
use crate::platform;
use lazy_static::lazy_static;
use std::sync::Mutex;
use sysinfo::{CpuRefreshKind, RefreshKind, System};
use tracing::warn;

lazy_static! {
    static ref INSTANCE: CpuMetrics = CpuMetrics::init();
}

/// Process-wide processor telemetry reader.
///
/// Reports ARM-allocated memory, SoC temperature, and overall utilization.
/// Each accessor re-queries the platform data source on every call; on an
/// unsupported host all accessors return [`SENTINEL_READING`].
pub struct CpuMetrics {
    supported: bool,
    system: Mutex<System>,
}

impl CpuMetrics {
    /// The shared instance, initialized on first access.
    pub fn instance() -> &'static CpuMetrics {
        &INSTANCE
    }

    fn init() -> Self {
        Self {
            supported: platform::is_raspberry_pi(),
            system: Mutex::new(System::new_with_specifics(
                RefreshKind::new().with_cpu(CpuRefreshKind::new().with_cpu_usage()),
            )),
        }
    }

    /// Memory allocated to the ARM side of the split, in megabytes.
    pub fn memory_mb(&self) -> f64 {
        if !self.supported {
            return SENTINEL_READING;
        }
        source::memory_split_mb("arm").unwrap_or_else(|| {
            warn!("unreadable ARM memory split, reporting sentinel");
            SENTINEL_READING
        })
    }

    /// SoC temperature in degrees Celsius.
    pub fn temp_celsius(&self) -> f64 {
        if !self.supported {
            return SENTINEL_READING;
        }
        source::soc_temp_celsius().unwrap_or_else(|| {
            warn!("unreadable SoC temperature, reporting sentinel");
            SENTINEL_READING
        })
    }

    /// Overall processor utilization percentage, in [0, 100].
    pub fn utilization_percent(&self) -> f64 {
        if !self.supported {
            return SENTINEL_READING;
        }
        let mut system = match self.system.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        system.refresh_cpu_usage();
        f64::from(system.global_cpu_usage()).clamp(0.0, 100.0)
    }

    /// A fresh bundle of all processor readings.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            memory_mb: self.memory_mb(),
            temp_celsius: self.temp_celsius(),
            utilization_percent: self.utilization_percent(),
        }
    }
}
