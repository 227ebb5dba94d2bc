//! Host platform detection.
//!
//! Classifies the running host once per process by reading the device-tree
//! model descriptor. The classification gates which GPIO backend can be
//! constructed and whether the metric readers query real data sources.

use lazy_static::lazy_static;
use std::fs;

/// Classification of the running host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// A Raspberry Pi board with GPIO and vendor telemetry available
    RaspberryPi,
    /// Any other host; hardware access and telemetry are unavailable
    Unsupported,
}

impl Platform {
    /// Whether this platform supports hardware pin access and telemetry.
    pub fn is_supported(&self) -> bool {
        matches!(self, Platform::RaspberryPi)
    }
}

lazy_static! {
    static ref DETECTED: (Platform, Option<String>) = detect();
}

/// The platform detected at first access, fixed for the process lifetime.
pub fn current() -> Platform {
    DETECTED.0
}

/// Shorthand for `current().is_supported()`.
pub fn is_raspberry_pi() -> bool {
    current().is_supported()
}

/// The raw board model string, if one was found during detection.
pub fn model() -> Option<&'static str> {
    DETECTED.1.as_deref()
}

fn detect() -> (Platform, Option<String>) {
    let model = read_board_model();

    let platform = match &model {
        Some(m) if m.contains("Raspberry Pi") => Platform::RaspberryPi,
        _ => Platform::Unsupported,
    };

    (platform, model)
}

/// Read the board model descriptor, degrading to `None` if unavailable.
fn read_board_model() -> Option<String> {
    // Device tree is authoritative on Pi hardware. The file is NUL-terminated.
    if let Ok(raw) = fs::read_to_string("/proc/device-tree/model") {
        let model = raw.trim_end_matches('\0').trim().to_string();
        if !model.is_empty() {
            return Some(model);
        }
    }

    // Fallback: older kernels expose the model in /proc/cpuinfo.
    let cpuinfo = fs::read_to_string("/proc/cpuinfo").ok()?;
    for line in cpuinfo.lines() {
        if line.starts_with("Model") {
            if let Some((_, value)) = line.split_once(':') {
                return Some(value.trim().to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_is_stable() {
        // Repeated calls must observe the same cached classification.
        let first = current();
        let second = current();
        assert_eq!(first, second);
    }

    #[test]
    fn test_supported_matches_enum() {
        match current() {
            Platform::RaspberryPi => assert!(is_raspberry_pi()),
            Platform::Unsupported => assert!(!is_raspberry_pi()),
        }
    }

    #[test]
    fn test_model_implies_detection_ran() {
        // A Pi classification is only ever derived from a model string.
        if is_raspberry_pi() {
            assert!(model().is_some());
        }
    }
}
