//! Light management from lux and occupancy (single-shot scenarios).

use embedded_hal::digital::PinState;
use smartoffice::config::OfficeConfig;
use smartoffice::error::{ActuatorError, SensorError};
use smartoffice::pins;
use smartoffice::{Error, OfficeController};

use super::mock_hw::{MockBus, MockClock, MockLux};

#[test]
fn dim_room_turns_light_on() {
    let mut bus = MockBus::new();
    let mut clock = MockClock::january(17, 8, 0);
    let mut lux = MockLux(499.0);
    let mut office =
        OfficeController::new(OfficeConfig::default(), &mut bus, &mut clock, &mut lux).unwrap();

    office.manage_light_level().unwrap();
    assert!(office.is_light_on());
    drop(office);

    assert_eq!(bus.writes_to(pins::LIGHT_PIN), vec![PinState::High]);
    assert_eq!(bus.writes(), 1);
}

#[test]
fn bright_empty_room_keeps_light_off() {
    let mut bus = MockBus::new();
    let mut clock = MockClock::january(17, 8, 0);
    let mut lux = MockLux(501.0);
    let mut office =
        OfficeController::new(OfficeConfig::default(), &mut bus, &mut clock, &mut lux).unwrap();

    office.manage_light_level().unwrap();
    assert!(!office.is_light_on());
    drop(office);

    assert_eq!(bus.writes_to(pins::LIGHT_PIN), vec![PinState::Low]);
    assert_eq!(bus.writes(), 1);
}

#[test]
fn first_worker_steps_in() {
    let mut bus = MockBus::with_high(pins::INFRARED_PIN3);
    let mut clock = MockClock::january(17, 8, 0);
    let mut lux = MockLux(501.0);
    let mut office =
        OfficeController::new(OfficeConfig::default(), &mut bus, &mut clock, &mut lux).unwrap();

    office.manage_light_level().unwrap();
    assert!(office.is_light_on());
    drop(office);

    assert_eq!(bus.writes_to(pins::LIGHT_PIN), vec![PinState::High]);
    assert_eq!(bus.writes(), 1);
}

#[test]
fn lux_failure_writes_nothing() {
    struct BrokenLux;
    impl smartoffice::app::ports::LightSensorPort for BrokenLux {
        fn lux(&mut self) -> Result<f32, SensorError> {
            Err(SensorError::LuxReadFailed)
        }
    }

    let mut bus = MockBus::new();
    let mut clock = MockClock::january(17, 8, 0);
    let mut office =
        OfficeController::new(OfficeConfig::default(), &mut bus, &mut clock, BrokenLux).unwrap();

    assert_eq!(
        office.manage_light_level(),
        Err(Error::Sensor(SensorError::LuxReadFailed))
    );
    drop(office);
    assert!(bus.calls.is_empty());
}

#[test]
fn occupancy_failure_writes_nothing() {
    let mut bus = MockBus::new();
    bus.fail_reads = true;
    let mut clock = MockClock::january(17, 8, 0);
    let mut lux = MockLux(900.0);
    let mut office =
        OfficeController::new(OfficeConfig::default(), &mut bus, &mut clock, &mut lux).unwrap();

    assert_eq!(
        office.manage_light_level(),
        Err(Error::Sensor(SensorError::GpioReadFailed))
    );
    drop(office);
    assert_eq!(bus.writes(), 0);
}

#[test]
fn failed_write_keeps_previous_state() {
    let mut bus = MockBus::new();
    bus.fail_writes = true;
    let mut clock = MockClock::january(17, 8, 0);
    let mut lux = MockLux(10.0);
    let mut office =
        OfficeController::new(OfficeConfig::default(), &mut bus, &mut clock, &mut lux).unwrap();

    assert_eq!(
        office.manage_light_level(),
        Err(Error::Actuator(ActuatorError::GpioWriteFailed))
    );
    assert!(!office.is_light_on());
}

#[test]
fn custom_threshold_is_used() {
    let mut config = OfficeConfig::default();
    config.lux_threshold = 200.0;

    let mut bus = MockBus::new();
    let mut clock = MockClock::january(17, 8, 0);
    let mut lux = MockLux(300.0);
    let mut office = OfficeController::new(config, &mut bus, &mut clock, &mut lux).unwrap();

    office.manage_light_level().unwrap();
    drop(office);
    assert_eq!(bus.writes_to(pins::LIGHT_PIN), vec![PinState::Low]);
}
