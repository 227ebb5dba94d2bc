//! Data structures for metric readings.

use serde::{Deserialize, Serialize};

/// Point-in-time processor readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuSnapshot {
    /// Memory allocated to the ARM side, in megabytes
    pub memory_mb: f64,
    /// SoC temperature in Celsius
    pub temp_celsius: f64,
    /// Overall utilization percentage (0.0 to 100.0)
    pub utilization_percent: f64,
}

/// Point-in-time graphics readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuSnapshot {
    /// Memory allocated to the GPU side, in megabytes
    pub memory_mb: f64,
    /// GPU core temperature in Celsius
    pub temp_celsius: f64,
}

/// Point-in-time system memory readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RamSnapshot {
    /// Used system memory in megabytes
    pub used_mb: f64,
}

/// A combined snapshot across all three readers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareSnapshot {
    /// Timestamp when this snapshot was taken (Unix timestamp in milliseconds)
    pub timestamp: u64,
    /// Whether the host was classified as a supported target
    pub platform_supported: bool,
    /// Board model string, if detection found one
    pub model: Option<String>,
    /// Processor readings
    pub cpu: CpuSnapshot,
    /// Graphics readings
    pub gpu: GpuSnapshot,
    /// System memory readings
    pub ram: RamSnapshot,
}

impl HardwareSnapshot {
    /// Capture a fresh snapshot from all three readers.
    ///
    /// Readings are recomputed on every call, never cached.
    pub fn capture() -> Self {
        Self {
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as u64,
            platform_supported: crate::platform::is_raspberry_pi(),
            model: crate::platform::model().map(str::to_string),
            cpu: super::CpuMetrics::instance().snapshot(),
            gpu: super::GpuMetrics::instance().snapshot(),
            ram: super::RamMetrics::instance().snapshot(),
        }
    }
}

impl Default for CpuSnapshot {
    fn default() -> Self {
        Self {
            memory_mb: 0.0,
            temp_celsius: 0.0,
            utilization_percent: 0.0,
        }
    }
}

impl Default for GpuSnapshot {
    fn default() -> Self {
        Self {
            memory_mb: 0.0,
            temp_celsius: 0.0,
        }
    }
}

impl Default for RamSnapshot {
    fn default() -> Self {
        Self { used_mb: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = CpuSnapshot {
            memory_mb: 948.0,
            temp_celsius: 52.1,
            utilization_percent: 17.5,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: CpuSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.memory_mb, 948.0);
        assert_eq!(back.temp_celsius, 52.1);
        assert_eq!(back.utilization_percent, 17.5);
    }

    #[test]
    fn test_defaults_are_zero() {
        assert_eq!(CpuSnapshot::default().utilization_percent, 0.0);
        assert_eq!(GpuSnapshot::default().memory_mb, 0.0);
        assert_eq!(RamSnapshot::default().used_mb, 0.0);
    }

    #[test]
    fn test_capture_has_timestamp() {
        let snapshot = HardwareSnapshot::capture();
        assert!(snapshot.timestamp > 0);
    }
}
