//! GPIO bus adapter over `embedded-hal` pins.
//!
//! Implements [`DigitalIo`] by mapping each [`PinId`] to a concrete HAL
//! pin.  Any board crate providing `embedded_hal::digital::{InputPin,
//! OutputPin}` plugs in here; the rules never see the HAL types.

use core::fmt;

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use log::warn;

use crate::app::ports::DigitalIo;
use crate::config::OfficeConfig;
use crate::error::{ActuatorError, SensorError};
use crate::pins::PinId;

/// Input lines the bus can hold.
pub const MAX_INPUTS: usize = 8;
/// Output lines the bus can hold.
pub const MAX_OUTPUTS: usize = 4;

/// Errors while wiring HAL pins into a [`HalGpio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioMapError {
    /// The pin is already mapped (as input or output).
    AlreadyMapped(PinId),
    /// No free slot left for this direction.
    Full,
}

impl fmt::Display for GpioMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyMapped(pin) => write!(f, "{} already mapped", pin),
            Self::Full => write!(f, "no free GPIO slot"),
        }
    }
}

/// Pin-addressed bus built from HAL input and output pins.
pub struct HalGpio<I, O> {
    inputs: heapless::Vec<(PinId, I), MAX_INPUTS>,
    outputs: heapless::Vec<(PinId, O), MAX_OUTPUTS>,
}

impl<I: InputPin, O: OutputPin> Default for HalGpio<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: InputPin, O: OutputPin> HalGpio<I, O> {
    pub fn new() -> Self {
        Self {
            inputs: heapless::Vec::new(),
            outputs: heapless::Vec::new(),
        }
    }

    /// Wire the four infrared inputs and both outputs named by `config`.
    pub fn from_config(
        config: &OfficeConfig,
        infrared: [I; 4],
        light: O,
        blind: O,
    ) -> Result<Self, GpioMapError> {
        let mut bus = Self::new();
        for (pin, input) in config.infrared_pins.into_iter().zip(infrared) {
            bus.add_input(pin, input)?;
        }
        bus.add_output(config.light_pin, light)?;
        bus.add_output(config.blind_pin, blind)?;
        Ok(bus)
    }

    pub fn add_input(&mut self, pin: PinId, input: I) -> Result<(), GpioMapError> {
        if self.is_mapped(pin) {
            return Err(GpioMapError::AlreadyMapped(pin));
        }
        self.inputs.push((pin, input)).map_err(|_| GpioMapError::Full)
    }

    pub fn add_output(&mut self, pin: PinId, output: O) -> Result<(), GpioMapError> {
        if self.is_mapped(pin) {
            return Err(GpioMapError::AlreadyMapped(pin));
        }
        self.outputs.push((pin, output)).map_err(|_| GpioMapError::Full)
    }

    pub fn is_mapped(&self, pin: PinId) -> bool {
        self.inputs.iter().any(|(p, _)| *p == pin) || self.outputs.iter().any(|(p, _)| *p == pin)
    }

    /// Hand back the HAL output pin mapped to `pin`.
    pub fn output_mut(&mut self, pin: PinId) -> Option<&mut O> {
        self.outputs
            .iter_mut()
            .find(|(p, _)| *p == pin)
            .map(|(_, o)| o)
    }
}

impl<I: InputPin, O: OutputPin> DigitalIo for HalGpio<I, O> {
    fn read(&mut self, pin: PinId) -> Result<PinState, SensorError> {
        let (_, input) = self
            .inputs
            .iter_mut()
            .find(|(p, _)| *p == pin)
            .ok_or(SensorError::UnknownPin(pin))?;
        match input.is_high() {
            Ok(high) => Ok(PinState::from(high)),
            Err(e) => {
                warn!("GPIO read on {} failed: {:?}", pin, e);
                Err(SensorError::GpioReadFailed)
            }
        }
    }

    fn write(&mut self, pin: PinId, level: PinState) -> Result<(), ActuatorError> {
        let output = self.output_mut(pin).ok_or(ActuatorError::UnknownPin(pin))?;
        output.set_state(level).map_err(|e| {
            warn!("GPIO write on {} failed: {:?}", pin, e);
            ActuatorError::GpioWriteFailed
        })
    }
}
