//! # pi_hal - Raspberry Pi Hardware Abstraction
//!
//! A small hardware abstraction layer for Raspberry Pi GPIO pin control and
//! system telemetry. Application code programs against uniform interfaces
//! and runs identically on a Pi and on a generic development host without
//! hardware access.
//!
//! ## Features
//!
//! - **Pin control**: set/read/toggle levels and software-timed blinking
//!   through one [`PinController`] contract with two backends
//! - **Hardware backend**: real GPIO and hardware PWM via rppal
//!   (feature-gated behind `gpio`)
//! - **Simulated backend**: in-memory pin usable on any host
//! - **Metric readers**: processor, graphics, and memory telemetry as
//!   process-wide singletons, inert sentinels off-target
//! - **Platform detection**: one-time host classification gating it all
//!
//! ## Quick Start
//!
//! ```rust
//! use pi_hal::{platform, PinController, SimulatedPin};
//!
//! // Pick the backend once, based on the detected platform.
//! assert!(platform::current() == platform::current());
//!
//! let mut pin = SimulatedPin::new(18);
//! pin.set_high();
//! assert!(pin.state());
//! assert!(pin.shutdown());
//! ```

pub mod error;
pub mod gpio;
pub mod metrics;
pub mod platform;

// Re-export public API
pub use error::{HalError, Result};
pub use gpio::{PinController, SimulatedPin};
pub use metrics::{
    CpuMetrics, CpuSnapshot, GpuMetrics, GpuSnapshot, HardwareSnapshot, RamMetrics, RamSnapshot,
    SENTINEL_READING,
};
pub use platform::Platform;

#[cfg(feature = "gpio")]
pub use gpio::HardwarePin;

/// The default blink period in milliseconds
pub const DEFAULT_BLINK_PERIOD_MS: u32 = 125;

/// The default PWM duty-cycle range for hardware pins
pub const DEFAULT_PWM_RANGE: u32 = 100;
