//! Controller configuration
//!
//! Pin roles, the blind schedule and the lux threshold.  The controller
//! takes an [`OfficeConfig`] at construction and never mutates it.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::pins::{self, PinId};

/// Lux below which the light is always commanded on (strict `<`).
///
/// Only finite, non-negative readings are compared against it.  A NaN,
/// infinite or negative reading fails the light poll with
/// `SensorError::LuxReadFailed` and leaves the light untouched.
pub const LUX_THRESHOLD: f32 = 500.0;

/// Weekday blinds open at 07:30 ...
pub const BLINDS_OPEN_HOUR: u8 = 7;
pub const BLINDS_OPEN_MINUTE: u8 = 30;
/// ... and close at 19:00.
pub const BLINDS_CLOSE_HOUR: u8 = 19;
pub const BLINDS_CLOSE_MINUTE: u8 = 0;

/// Weekday window during which the blinds are held open.
///
/// Open from `open` (inclusive) to `close` (exclusive); closed for the
/// rest of the day, wrapping midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlindSchedule {
    pub open_hour: u8,
    pub open_minute: u8,
    pub close_hour: u8,
    pub close_minute: u8,
}

impl BlindSchedule {
    /// Opening time as minutes since midnight.
    pub fn open_minute_of_day(&self) -> u16 {
        u16::from(self.open_hour) * 60 + u16::from(self.open_minute)
    }

    /// Closing time as minutes since midnight.
    pub fn close_minute_of_day(&self) -> u16 {
        u16::from(self.close_hour) * 60 + u16::from(self.close_minute)
    }
}

impl Default for BlindSchedule {
    fn default() -> Self {
        Self {
            open_hour: BLINDS_OPEN_HOUR,
            open_minute: BLINDS_OPEN_MINUTE,
            close_hour: BLINDS_CLOSE_HOUR,
            close_minute: BLINDS_CLOSE_MINUTE,
        }
    }
}

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeConfig {
    // --- Inputs ---
    /// Infrared occupancy inputs, indexed by quadrant
    pub infrared_pins: [PinId; 4],

    // --- Outputs ---
    /// Indicator light output
    pub light_pin: PinId,
    /// Blind servo output
    pub blind_pin: PinId,

    // --- Rules ---
    /// Illuminance (lux) below which the light is forced on
    pub lux_threshold: f32,
    /// Weekday blind window
    pub blinds: BlindSchedule,
}

impl Default for OfficeConfig {
    fn default() -> Self {
        Self {
            infrared_pins: pins::INFRARED_PINS,
            light_pin: pins::LIGHT_PIN,
            blind_pin: pins::SERVO_PIN,
            lux_threshold: LUX_THRESHOLD,
            blinds: BlindSchedule::default(),
        }
    }
}

impl OfficeConfig {
    /// Parse a JSON document and validate it.  Omitted fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject wiring collisions and impossible schedules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, pin) in self.infrared_pins.iter().enumerate() {
            if self.infrared_pins[i + 1..].contains(pin) {
                return Err(ConfigError::ValidationFailed("duplicate infrared pin"));
            }
        }
        if self.infrared_pins.contains(&self.light_pin) {
            return Err(ConfigError::ValidationFailed("light pin collides with an infrared input"));
        }
        if self.infrared_pins.contains(&self.blind_pin) {
            return Err(ConfigError::ValidationFailed("blind pin collides with an infrared input"));
        }
        if self.light_pin == self.blind_pin {
            return Err(ConfigError::ValidationFailed("light and blind share an output pin"));
        }

        let b = &self.blinds;
        if b.open_hour > 23 || b.close_hour > 23 {
            return Err(ConfigError::ValidationFailed("blind hour must be 0-23"));
        }
        if b.open_minute > 59 || b.close_minute > 59 {
            return Err(ConfigError::ValidationFailed("blind minute must be 0-59"));
        }
        if b.open_minute_of_day() >= b.close_minute_of_day() {
            return Err(ConfigError::ValidationFailed("blinds must open before they close"));
        }

        if !self.lux_threshold.is_finite() || self.lux_threshold < 0.0 {
            return Err(ConfigError::ValidationFailed("lux threshold must be a non-negative number"));
        }
        Ok(())
    }
}

/// Errors from loading or validating an [`OfficeConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The document is not valid JSON for this schema.
    Parse(String),
    /// A field failed range or consistency validation.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "parse error: {}", msg),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}
