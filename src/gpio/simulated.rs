//! In-memory pin backend for hosts without GPIO hardware.

use crate::gpio::PinController;
use tracing::debug;

/// Simulated pin with no real-world side effects.
///
/// Behaves identically to the hardware backend through the
/// [`PinController`] contract, except that level changes only touch an
/// in-memory flag. Construction always succeeds, on any host.
#[derive(Debug)]
pub struct SimulatedPin {
    pin: u8,
    high: bool,
    released: bool,
}

impl SimulatedPin {
    /// Create a simulated controller for the given pin index.
    pub fn new(pin: u8) -> Self {
        debug!(pin, "claiming simulated pin");
        Self {
            pin,
            high: false,
            released: false,
        }
    }

    /// The pin index this controller was constructed with.
    pub fn pin(&self) -> u8 {
        self.pin
    }
}

impl PinController for SimulatedPin {
    fn set_high(&mut self) {
        if !self.released {
            self.high = true;
        }
    }

    fn set_low(&mut self) {
        if !self.released {
            self.high = false;
        }
    }

    fn state(&self) -> bool {
        self.high
    }

    fn toggle(&mut self) {
        if !self.released {
            self.high = !self.high;
        }
    }

    fn shutdown(&mut self) -> bool {
        if self.released {
            return false;
        }
        debug!(pin = self.pin, "releasing simulated pin");
        self.released = true;
        true
    }
}
