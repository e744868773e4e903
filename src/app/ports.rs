//! Port traits — the boundary between the rules and the hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ OfficeController (domain)
//! ```
//!
//! The GPIO bus, the real-time clock and the ambient-light sensor are
//! driven adapters implementing these traits.  The
//! [`OfficeController`](super::controller::OfficeController) owns one of
//! each via generics, so the rules never touch hardware directly and
//! tests substitute in-memory fakes.
//!
//! All port errors are typed and reach the caller unchanged.

use chrono::NaiveDateTime;
use embedded_hal::digital::PinState;

use crate::error::{ActuatorError, SensorError};
use crate::pins::PinId;

// ───────────────────────────────────────────────────────────────
// Digital I/O port (GPIO bus)
// ───────────────────────────────────────────────────────────────

/// Pin-addressed digital input/output.
pub trait DigitalIo {
    /// Sample the current level of an input line.
    fn read(&mut self, pin: PinId) -> Result<PinState, SensorError>;

    /// Drive an output line to `level`.
    fn write(&mut self, pin: PinId, level: PinState) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port (real-time clock)
// ───────────────────────────────────────────────────────────────

/// Local wall-clock time.  Weekday, hour and minute are derived from the
/// returned timestamp.
pub trait ClockPort {
    fn read_datetime(&mut self) -> Result<NaiveDateTime, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Light sensor port (ambient illuminance)
// ───────────────────────────────────────────────────────────────

/// Instantaneous illuminance in lux.
pub trait LightSensorPort {
    fn lux(&mut self) -> Result<f32, SensorError>;
}

// Forward through `&mut` so callers can lend adapters instead of moving them.

impl<T: DigitalIo + ?Sized> DigitalIo for &mut T {
    fn read(&mut self, pin: PinId) -> Result<PinState, SensorError> {
        (**self).read(pin)
    }

    fn write(&mut self, pin: PinId, level: PinState) -> Result<(), ActuatorError> {
        (**self).write(pin, level)
    }
}

impl<T: ClockPort + ?Sized> ClockPort for &mut T {
    fn read_datetime(&mut self) -> Result<NaiveDateTime, SensorError> {
        (**self).read_datetime()
    }
}

impl<T: LightSensorPort + ?Sized> LightSensorPort for &mut T {
    fn lux(&mut self) -> Result<f32, SensorError> {
        (**self).lux()
    }
}
