//! Hardware pin backend driven through rppal.
//!
//! Requires privileged GPIO access and a Raspberry Pi host; construction
//! fails fast when either the pin or the PWM channel cannot be claimed.
//! Callers should consult [`crate::platform::is_raspberry_pi`] before
//! constructing this backend.

use crate::error::{HalError, Result};
use crate::gpio::PinController;
use rppal::gpio::{Gpio, OutputPin};
use rppal::pwm::{Channel, Polarity, Pwm};
use tracing::debug;

/// Frequency used for the hardware PWM channel, in hertz.
const PWM_FREQUENCY_HZ: f64 = 1000.0;

/// Pin controller backed by a real GPIO line and a hardware PWM channel.
///
/// The pin index, PWM channel, and duty-cycle range are fixed at
/// construction. Level operations write through rppal and are infallible
/// once the resources are claimed; [`shutdown`](PinController::shutdown)
/// releases both resources and leaves the controller inert.
pub struct HardwarePin {
    pin_index: u8,
    output: Option<OutputPin>,
    pwm: Option<Pwm>,
    pwm_range: u32,
    high: bool,
}

impl HardwarePin {
    /// Claim the given pin as an output and the given hardware PWM channel.
    ///
    /// `pwm_range` bounds the duty values accepted by [`set_duty`]; duty
    /// `pwm_range` maps to a fully-on signal.
    ///
    /// Fails with [`HalError::Gpio`] or [`HalError::Pwm`] if either claim
    /// is rejected (unsupported host, pin in use, permission denied). A
    /// failed claim is never downgraded to a simulated pin.
    ///
    /// [`set_duty`]: HardwarePin::set_duty
    pub fn new(pin: u8, pwm_channel: u8, pwm_range: u32) -> Result<Self> {
        let gpio = Gpio::new()
            .map_err(|e| HalError::gpio_error(format!("Failed to initialize GPIO: {}", e)))?;

        let mut output = gpio
            .get(pin)
            .map_err(|e| HalError::gpio_error(format!("Failed to claim pin {}: {}", pin, e)))?
            .into_output();
        output.set_low();

        let channel = match pwm_channel {
            0 => Channel::Pwm0,
            1 => Channel::Pwm1,
            other => {
                return Err(HalError::pwm_error(format!(
                    "No such PWM channel: {}",
                    other
                )))
            }
        };

        let pwm = Pwm::with_frequency(channel, PWM_FREQUENCY_HZ, 0.0, Polarity::Normal, false)
            .map_err(|e| {
                HalError::pwm_error(format!("Failed to claim PWM channel {}: {}", pwm_channel, e))
            })?;

        debug!(pin, pwm_channel, pwm_range, "claimed hardware pin");

        Ok(Self {
            pin_index: pin,
            output: Some(output),
            pwm: Some(pwm),
            pwm_range: pwm_range.max(1),
            high: false,
        })
    }

    /// The pin index this controller was constructed with.
    pub fn pin(&self) -> u8 {
        self.pin_index
    }

    /// Write a hardware PWM duty value, clamped to the construction range.
    pub fn set_duty(&mut self, duty: u32) -> Result<()> {
        let pwm = self
            .pwm
            .as_mut()
            .ok_or_else(|| HalError::pwm_error("PWM channel already released"))?;

        let clamped = duty.min(self.pwm_range);
        let cycle = f64::from(clamped) / f64::from(self.pwm_range);

        pwm.enable()
            .map_err(|e| HalError::pwm_error(format!("Failed to enable PWM: {}", e)))?;
        pwm.set_duty_cycle(cycle)
            .map_err(|e| HalError::pwm_error(format!("Failed to set duty cycle: {}", e)))?;
        Ok(())
    }
}

impl PinController for HardwarePin {
    fn set_high(&mut self) {
        if let Some(output) = self.output.as_mut() {
            output.set_high();
            self.high = true;
        }
    }

    fn set_low(&mut self) {
        if let Some(output) = self.output.as_mut() {
            output.set_low();
            self.high = false;
        }
    }

    fn state(&self) -> bool {
        self.high
    }

    fn toggle(&mut self) {
        if let Some(output) = self.output.as_mut() {
            output.toggle();
            self.high = !self.high;
        }
    }

    fn shutdown(&mut self) -> bool {
        if self.output.is_none() {
            return false;
        }
        debug!(pin = self.pin_index, "releasing hardware pin");

        // Dropping the rppal handles releases the pin and PWM channel.
        if let Some(pwm) = self.pwm.take() {
            let _ = pwm.disable();
        }
        self.output = None;
        true
    }
}
