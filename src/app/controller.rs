//! Office controller — the hexagonal core.
//!
//! [`OfficeController`] owns the three collaborator ports and the single
//! piece of mutable state, `light_on`.  Every operation is a direct,
//! blocking call into a port followed by a pure rule from
//! [`rules`](super::rules).
//!
//! ```text
//!       DigitalIo ◀──┐
//!                    │  ┌────────────────────────────┐
//!       ClockPort ───┼──│      OfficeController      │
//!                    │  │ occupancy · blinds · light │
//! LightSensorPort ───┘  └────────────────────────────┘
//! ```

use embedded_hal::digital::PinState;
use log::{debug, info, warn};

use crate::config::OfficeConfig;
use crate::error::{Error, Result, SensorError};
use crate::pins::PinId;

use super::ports::{ClockPort, DigitalIo, LightSensorPort};
use super::rules::{self, BlindCommand};

/// One of the four office zones watched by an infrared sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    /// All quadrants in configuration order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    /// Index into [`OfficeConfig::infrared_pins`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

// ───────────────────────────────────────────────────────────────
// OfficeController
// ───────────────────────────────────────────────────────────────

pub struct OfficeController<Io, Clock, Lux> {
    config: OfficeConfig,
    io: Io,
    clock: Clock,
    lux: Lux,
    /// Last light level commanded by [`manage_light_level`](Self::manage_light_level).
    light_on: bool,
}

impl<Io, Clock, Lux> OfficeController<Io, Clock, Lux>
where
    Io: DigitalIo,
    Clock: ClockPort,
    Lux: LightSensorPort,
{
    /// Build a controller around its collaborators.
    ///
    /// Fails with [`Error::Config`] if `config` does not validate.  The
    /// light is assumed off until the first call to `manage_light_level`.
    pub fn new(config: OfficeConfig, io: Io, clock: Clock, lux: Lux) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            io,
            clock,
            lux,
            light_on: false,
        })
    }

    // ── Occupancy ─────────────────────────────────────────────

    /// Report whether the quadrant watched by `pin` is occupied.
    ///
    /// `pin` must be one of the four infrared inputs; anything else is
    /// rejected with [`Error::InvalidPin`] before the bus is touched.
    pub fn check_quadrant_occupancy(&mut self, pin: PinId) -> Result<bool> {
        if self.quadrant_of(pin).is_none() {
            warn!("Occupancy check on non-infrared pin {}", pin);
            return Err(Error::InvalidPin(pin));
        }
        let level = self.io.read(pin)?;
        Ok(level == PinState::High)
    }

    /// Occupancy of a quadrant by name.
    pub fn check_occupancy(&mut self, quadrant: Quadrant) -> Result<bool> {
        let pin = self.config.infrared_pins[quadrant.index()];
        self.check_quadrant_occupancy(pin)
    }

    /// True as soon as one quadrant reports a person.
    pub fn any_quadrant_occupied(&mut self) -> Result<bool> {
        for quadrant in Quadrant::ALL {
            if self.check_occupancy(quadrant)? {
                debug!("{:?} occupied", quadrant);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Quadrant watched by `pin`, if it is an infrared input.
    pub fn quadrant_of(&self, pin: PinId) -> Option<Quadrant> {
        self.config
            .infrared_pins
            .iter()
            .position(|p| *p == pin)
            .map(|i| Quadrant::ALL[i])
    }

    // ── Blinds ────────────────────────────────────────────────

    /// Open or close the blinds according to the weekday schedule.
    ///
    /// Weekends produce no output write at all.
    pub fn manage_blinds_based_on_time(&mut self) -> Result<()> {
        let now = self.clock.read_datetime()?;
        match rules::blind_command(now, &self.config.blinds) {
            Some(cmd) => {
                debug!("Blinds at {}: {:?}", now, cmd);
                self.io.write(self.config.blind_pin, cmd.level())?;
            }
            None => debug!("Blinds at {}: weekend, untouched", now),
        }
        Ok(())
    }

    // ── Light ─────────────────────────────────────────────────

    /// Drive the light from ambient lux and occupancy.
    ///
    /// Exactly one write to the light output per successful call.  Below
    /// the lux threshold the light goes on without sampling occupancy.
    /// A non-finite or negative reading fails with
    /// [`SensorError::LuxReadFailed`] before any other I/O.
    pub fn manage_light_level(&mut self) -> Result<()> {
        let lux = self.lux.lux()?;
        if !rules::lux_is_valid(lux) {
            warn!("Discarding lux reading {}", lux);
            return Err(SensorError::LuxReadFailed.into());
        }
        let threshold = self.config.lux_threshold;

        let occupied = if rules::needs_occupancy(lux, threshold) {
            self.any_quadrant_occupied()?
        } else {
            false
        };
        let level = rules::light_command(lux, threshold, occupied);
        debug!("Light: lux={:.1} occupied={} -> {:?}", lux, occupied, level);

        self.io.write(self.config.light_pin, level)?;

        let on = level == PinState::High;
        if on != self.light_on {
            info!("Light turned {}", if on { "on" } else { "off" });
        }
        self.light_on = on;
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    /// Whether the light was last commanded on.
    pub fn is_light_on(&self) -> bool {
        self.light_on
    }

    pub fn config(&self) -> &OfficeConfig {
        &self.config
    }

    /// Release the collaborators.
    pub fn into_parts(self) -> (Io, Clock, Lux) {
        (self.io, self.clock, self.lux)
    }
}

impl<Io, Clock, Lux> OfficeController<Io, Clock, Lux> {
    /// Blind command for the given instant without touching the servo.
    pub fn preview_blinds(&self, now: chrono::NaiveDateTime) -> Option<BlindCommand> {
        rules::blind_command(now, &self.config.blinds)
    }
}
