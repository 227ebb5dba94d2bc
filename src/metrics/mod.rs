//! Platform system-metric readers.
//!
//! Three process-wide readers expose point-in-time telemetry: processor
//! ([`CpuMetrics`]), graphics ([`GpuMetrics`]), and memory ([`RamMetrics`]).
//! Each is a lazily-initialized singleton reached through `instance()`.
//! On a Raspberry Pi every call re-queries the platform data source; on any
//! other host every accessor returns [`SENTINEL_READING`] so callers and
//! tests run unchanged without hardware.

pub mod cpu;
pub mod data;
pub mod gpu;
pub mod ram;

mod source;

pub use cpu::CpuMetrics;
pub use data::{CpuSnapshot, GpuSnapshot, HardwareSnapshot, RamSnapshot};
pub use gpu::GpuMetrics;
pub use ram::RamMetrics;

/// Placeholder reading reported when genuine telemetry cannot be obtained,
/// either because the host is unsupported or a data source returned
/// malformed output. Metrics are best-effort telemetry and never fail.
pub const SENTINEL_READING: f64 = 0.0;
