//! Pure decision rules.
//!
//! No I/O here: the controller gathers readings through its ports and
//! asks these functions what to command.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use embedded_hal::digital::PinState;

use crate::config::BlindSchedule;

/// Position the blind servo should be driven to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlindCommand {
    /// Fully open (HIGH).
    Open,
    /// Fully closed (LOW).
    Close,
}

impl BlindCommand {
    /// Output level that realises this command.
    pub fn level(self) -> PinState {
        match self {
            Self::Open => PinState::High,
            Self::Close => PinState::Low,
        }
    }
}

/// Decide the blind position for `now`.
///
/// Weekends return `None`: the blinds are left alone.  On weekdays the
/// blinds are open inside `[open, close)` and closed otherwise.
pub fn blind_command(now: NaiveDateTime, schedule: &BlindSchedule) -> Option<BlindCommand> {
    if matches!(now.weekday(), Weekday::Sat | Weekday::Sun) {
        return None;
    }

    let minute_of_day = (now.hour() * 60 + now.minute()) as u16;
    let open = schedule.open_minute_of_day();
    let close = schedule.close_minute_of_day();

    if (open..close).contains(&minute_of_day) {
        Some(BlindCommand::Open)
    } else {
        Some(BlindCommand::Close)
    }
}

/// Whether a lux reading can be fed to the light rule.
///
/// NaN and infinities are sensor faults; every comparison against the
/// threshold would be false and silently pick the dark branch.
pub fn lux_is_valid(lux: f32) -> bool {
    lux.is_finite() && lux >= 0.0
}

/// Whether occupancy has to be sampled for a given lux reading.
///
/// Below the threshold the light goes on regardless of who is present.
pub fn needs_occupancy(lux: f32, threshold: f32) -> bool {
    lux >= threshold
}

/// Decide the light level.
///
/// `occupied` is ignored when the room is dark (`lux < threshold`).
pub fn light_command(lux: f32, threshold: f32, occupied: bool) -> PinState {
    if !needs_occupancy(lux, threshold) || occupied {
        PinState::High
    } else {
        PinState::Low
    }
}
