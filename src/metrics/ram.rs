//! System memory metric reader.

use crate::metrics::{RamSnapshot, SENTINEL_READING};
use crate::platform;
use lazy_static::lazy_static;
use std::sync::Mutex;
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

lazy_static! {
    static ref INSTANCE: RamMetrics = RamMetrics::init();
}

/// Process-wide system memory reader.
///
/// Reports used RAM in megabytes, re-queried on every call. Returns
/// [`SENTINEL_READING`] on an unsupported host.
pub struct RamMetrics {
    supported: bool,
    system: Mutex<System>,
}

impl RamMetrics {
    /// The shared instance, initialized on first access.
    pub fn instance() -> &'static RamMetrics {
        &INSTANCE
    }

    fn init() -> Self {
        Self {
            supported: platform::is_raspberry_pi(),
            system: Mutex::new(System::new_with_specifics(
                RefreshKind::new().with_memory(MemoryRefreshKind::new().with_ram()),
            )),
        }
    }

    /// Currently used system memory, in megabytes.
    pub fn used_mb(&self) -> f64 {
        if !self.supported {
            return SENTINEL_READING;
        }
        let mut system = match self.system.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        system.refresh_memory();
        system.used_memory() as f64 / (1024.0 * 1024.0)
    }

    /// A fresh bundle of the memory readings.
    pub fn snapshot(&self) -> RamSnapshot {
        RamSnapshot {
            used_mb: self.used_mb(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_is_shared() {
        let a = RamMetrics::instance() as *const RamMetrics;
        let b = RamMetrics::instance() as *const RamMetrics;
        assert_eq!(a, b);
    }

    #[test]
    fn test_used_mb_never_panics() {
        let used = RamMetrics::instance().used_mb();
        assert!(used >= 0.0);
    }

    #[test]
    fn test_sentinel_off_target() {
        if !platform::is_raspberry_pi() {
            assert_eq!(RamMetrics::instance().used_mb(), SENTINEL_READING);
        }
    }
}
