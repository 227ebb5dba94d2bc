//! GPIO pin control for Raspberry Pi.
//!
//! This module provides a single pin abstraction with two backends: a
//! hardware-backed pin driven through rppal (feature-gated) and an
//! in-memory simulated pin usable on any host. Callers pick the backend
//! once at construction based on [`crate::platform`] and then program
//! against the shared [`PinController`] contract.

pub mod simulated;

#[cfg(feature = "gpio")]
pub mod hardware;

pub use simulated::SimulatedPin;

#[cfg(feature = "gpio")]
pub use hardware::HardwarePin;

/// Contract shared by all pin backends.
///
/// Operations assume single-writer access per handle; `&mut self` receivers
/// enforce that within one process. After a successful [`shutdown`], level
/// operations become inert no-ops and `state` keeps reporting the last
/// level before release.
///
/// [`shutdown`]: PinController::shutdown
pub trait PinController {
    /// Drive the pin high. Idempotent.
    fn set_high(&mut self);

    /// Drive the pin low. Idempotent.
    fn set_low(&mut self);

    /// Current logical level; reflects the most recent level operation.
    fn state(&self) -> bool;

    /// Flip the current logical level.
    fn toggle(&mut self);

    /// Drive the pin to the given logical level.
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Blink the pin for `cycles` full on/off cycles, sleeping `period_ms`
    /// between toggles.
    ///
    /// Each cycle is two toggles, so the call blocks the calling thread for
    /// at least `period_ms * 2 * cycles` milliseconds and the pin ends at
    /// the level it started from. There is no background timer and no
    /// cancellation; callers in latency-sensitive contexts must dispatch
    /// this onto a dedicated worker thread.
    fn blink(&mut self, period_ms: u32, cycles: u32) {
        for _ in 0..cycles.saturating_mul(2) {
            std::thread::sleep(std::time::Duration::from_millis(u64::from(period_ms)));
            self.toggle();
        }
    }

    /// Release the underlying resource.
    ///
    /// Returns `true` on the first successful release and `false` on any
    /// subsequent call. Construct a new controller to use the pin again.
    fn shutdown(&mut self) -> bool;
}
