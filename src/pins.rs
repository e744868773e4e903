//! GPIO pin assignments for the office controller board.
//!
//! Single source of truth for the default wiring.  [`OfficeConfig`]
//! starts from these values; a deployment with different wiring overrides
//! them through the configuration rather than editing drivers.
//!
//! [`OfficeConfig`]: crate::config::OfficeConfig

use core::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of one digital input or output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinId(pub u8);

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Infrared occupancy sensors (one per quadrant). HIGH = person detected.
// ---------------------------------------------------------------------------

pub const INFRARED_PIN1: PinId = PinId(11);
pub const INFRARED_PIN2: PinId = PinId(12);
pub const INFRARED_PIN3: PinId = PinId(13);
pub const INFRARED_PIN4: PinId = PinId(15);

/// Infrared inputs in quadrant order.
pub const INFRARED_PINS: [PinId; 4] = [INFRARED_PIN1, INFRARED_PIN2, INFRARED_PIN3, INFRARED_PIN4];

// ---------------------------------------------------------------------------
// Actuators
// ---------------------------------------------------------------------------

/// Digital output: indicator light relay (active HIGH).
pub const LIGHT_PIN: PinId = PinId(29);
/// Digital output: blind servo.  HIGH = fully open, LOW = fully closed.
pub const SERVO_PIN: PinId = PinId(18);
