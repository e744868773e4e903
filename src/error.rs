//! Unified error types for the office controller.
//!
//! A single `Error` enum every subsystem converts into.  Collaborator
//! failures are carried inside their variant exactly as the port reported
//! them.

use core::fmt;

use crate::config::ConfigError;
use crate::pins::PinId;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The occupancy check was given a pin that is not an infrared input.
    InvalidPin(PinId),
    /// A sensor (GPIO input, clock, lux sensor) could not be read.
    Sensor(SensorError),
    /// An actuator write failed.
    Actuator(ActuatorError),
    /// The controller was built from an invalid configuration.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPin(pin) => write!(f, "invalid pin: {pin} is not an infrared sensor"),
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Actuator(e) => write!(f, "actuator: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// GPIO read returned an error.
    GpioReadFailed,
    /// The real-time clock did not answer or returned an invalid date.
    ClockReadFailed,
    /// The ambient-light sensor did not answer.
    LuxReadFailed,
    /// No input line is mapped to the requested pin.
    UnknownPin(PinId),
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioReadFailed => write!(f, "GPIO read failed"),
            Self::ClockReadFailed => write!(f, "clock read failed"),
            Self::LuxReadFailed => write!(f, "lux read failed"),
            Self::UnknownPin(pin) => write!(f, "no input mapped to {pin}"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// GPIO set failed.
    GpioWriteFailed,
    /// No output line is mapped to the requested pin.
    UnknownPin(PinId),
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
            Self::UnknownPin(pin) => write!(f, "no output mapped to {pin}"),
        }
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
