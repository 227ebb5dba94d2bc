//! Error handling for the hardware abstraction layer.

/// A specialized `Result` type for hardware operations.
pub type Result<T> = std::result::Result<T, HalError>;

/// The main error type for hardware abstraction operations.
#[derive(Debug, thiserror::Error)]
pub enum HalError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Platform data parsing failed
    #[error("Failed to parse platform data: {0}")]
    Parse(String),

    /// GPIO pin could not be claimed or driven
    #[error("GPIO error: {0}")]
    Gpio(String),

    /// Hardware PWM channel could not be claimed or driven
    #[error("PWM error: {0}")]
    Pwm(String),
}

impl HalError {
    /// Create a new parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a new GPIO error
    pub fn gpio_error(msg: impl Into<String>) -> Self {
        Self::Gpio(msg.into())
    }

    /// Create a new PWM error
    pub fn pwm_error(msg: impl Into<String>) -> Self {
        Self::Pwm(msg.into())
    }
}
