//! In-memory office for host-side simulation.
//!
//! [`SimulatedOffice`] is a cheap-to-clone handle onto one simulated
//! room and implements every port.  Hand clones to the controller as its
//! GPIO bus, clock and lux sensor, keep one to set inputs, move the
//! clock, and inspect what was written.  Faults can be injected per
//! collaborator to exercise error paths.
//!
//! Single-threaded only (`Rc<RefCell<_>>`).

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDateTime;
use embedded_hal::digital::PinState;
use log::debug;

use super::gpio::GpioMapError;
use crate::app::ports::{ClockPort, DigitalIo, LightSensorPort};
use crate::error::{ActuatorError, SensorError};
use crate::pins::PinId;

/// Capacity of each pin table.
pub const MAX_PINS: usize = 16;
/// Writes retained in the log; older entries are dropped first.
pub const MAX_WRITES: usize = 32;

struct Room {
    inputs: heapless::Vec<(PinId, PinState), MAX_PINS>,
    outputs: heapless::Vec<(PinId, PinState), MAX_PINS>,
    writes: heapless::Deque<(PinId, PinState), MAX_WRITES>,
    now: NaiveDateTime,
    lux: f32,
    reads: usize,
    fail_gpio: bool,
    fail_clock: bool,
    fail_lux: bool,
}

#[derive(Clone)]
pub struct SimulatedOffice {
    room: Rc<RefCell<Room>>,
}

impl SimulatedOffice {
    /// An empty office at `now`, in full daylight, nobody present.
    pub fn new(now: NaiveDateTime) -> Self {
        let room = Room {
            inputs: heapless::Vec::new(),
            outputs: heapless::Vec::new(),
            writes: heapless::Deque::new(),
            now,
            lux: 1000.0,
            reads: 0,
            fail_gpio: false,
            fail_clock: false,
            fail_lux: false,
        };
        Self {
            room: Rc::new(RefCell::new(room)),
        }
    }

    // ── Scenario setup ────────────────────────────────────────

    /// Drive an input line.  Lines never set read LOW.
    ///
    /// Fails with [`GpioMapError::Full`] once `MAX_PINS` distinct inputs
    /// are in use; the level is not recorded in that case.
    pub fn set_input(&self, pin: PinId, level: PinState) -> Result<(), GpioMapError> {
        if upsert(&mut self.room.borrow_mut().inputs, pin, level) {
            Ok(())
        } else {
            Err(GpioMapError::Full)
        }
    }

    pub fn set_time(&self, now: NaiveDateTime) {
        self.room.borrow_mut().now = now;
    }

    pub fn set_lux(&self, lux: f32) {
        self.room.borrow_mut().lux = lux;
    }

    /// Make every GPIO read and write fail.
    pub fn fail_gpio(&self, fail: bool) {
        self.room.borrow_mut().fail_gpio = fail;
    }

    pub fn fail_clock(&self, fail: bool) {
        self.room.borrow_mut().fail_clock = fail;
    }

    pub fn fail_lux(&self, fail: bool) {
        self.room.borrow_mut().fail_lux = fail;
    }

    // ── Inspection ────────────────────────────────────────────

    /// Last level written to `pin`, if any.
    pub fn output(&self, pin: PinId) -> Option<PinState> {
        self.room
            .borrow()
            .outputs
            .iter()
            .find(|(p, _)| *p == pin)
            .map(|(_, l)| *l)
    }

    /// Recorded writes, oldest first.
    pub fn writes(&self) -> Vec<(PinId, PinState)> {
        self.room.borrow().writes.iter().copied().collect()
    }

    /// Levels written to `pin`, oldest first.
    pub fn writes_to(&self, pin: PinId) -> Vec<PinState> {
        self.room
            .borrow()
            .writes
            .iter()
            .filter(|(p, _)| *p == pin)
            .map(|(_, l)| *l)
            .collect()
    }

    /// Total GPIO reads served.
    pub fn read_count(&self) -> usize {
        self.room.borrow().reads
    }

    /// Forget recorded writes and reads; latched outputs are kept.
    pub fn clear_log(&self) {
        let mut room = self.room.borrow_mut();
        room.writes.clear();
        room.reads = 0;
    }
}

fn upsert(table: &mut heapless::Vec<(PinId, PinState), MAX_PINS>, pin: PinId, level: PinState) -> bool {
    if let Some(entry) = table.iter_mut().find(|(p, _)| *p == pin) {
        entry.1 = level;
        return true;
    }
    table.push((pin, level)).is_ok()
}

impl DigitalIo for SimulatedOffice {
    fn read(&mut self, pin: PinId) -> Result<PinState, SensorError> {
        let mut room = self.room.borrow_mut();
        if room.fail_gpio {
            return Err(SensorError::GpioReadFailed);
        }
        room.reads += 1;
        Ok(room
            .inputs
            .iter()
            .find(|(p, _)| *p == pin)
            .map_or(PinState::Low, |(_, l)| *l))
    }

    fn write(&mut self, pin: PinId, level: PinState) -> Result<(), ActuatorError> {
        let mut room = self.room.borrow_mut();
        if room.fail_gpio {
            return Err(ActuatorError::GpioWriteFailed);
        }
        if !upsert(&mut room.outputs, pin, level) {
            return Err(ActuatorError::UnknownPin(pin));
        }
        if room.writes.is_full() {
            let _ = room.writes.pop_front();
        }
        let _ = room.writes.push_back((pin, level));
        debug!("sim: {} <- {:?}", pin, level);
        Ok(())
    }
}

impl ClockPort for SimulatedOffice {
    fn read_datetime(&mut self) -> Result<NaiveDateTime, SensorError> {
        let room = self.room.borrow();
        if room.fail_clock {
            return Err(SensorError::ClockReadFailed);
        }
        Ok(room.now)
    }
}

impl LightSensorPort for SimulatedOffice {
    fn lux(&mut self) -> Result<f32, SensorError> {
        let room = self.room.borrow();
        if room.fail_lux {
            return Err(SensorError::LuxReadFailed);
        }
        Ok(room.lux)
    }
}
