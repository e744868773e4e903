//! Blind positioning by weekday and time of day.

use embedded_hal::digital::PinState;
use smartoffice::config::OfficeConfig;
use smartoffice::pins;
use smartoffice::OfficeController;

use super::mock_hw::{MockBus, MockClock, MockLux};

fn run_blinds(clock: &mut MockClock) -> MockBus {
    let mut bus = MockBus::new();
    let mut lux = MockLux(0.0);
    let mut office =
        OfficeController::new(OfficeConfig::default(), &mut bus, &mut *clock, &mut lux).unwrap();
    office.manage_blinds_based_on_time().unwrap();
    drop(office);
    bus
}

#[test]
fn wednesday_morning_opens_blinds() {
    let mut clock = MockClock::january(17, 8, 0);
    let bus = run_blinds(&mut clock);
    assert_eq!(bus.writes_to(pins::SERVO_PIN), vec![PinState::High]);
    assert_eq!(bus.writes(), 1);
    assert_eq!(clock.reads, 1);
}

#[test]
fn wednesday_evening_closes_blinds() {
    let mut clock = MockClock::january(17, 20, 0);
    let bus = run_blinds(&mut clock);
    assert_eq!(bus.writes_to(pins::SERVO_PIN), vec![PinState::Low]);
    assert_eq!(bus.writes(), 1);
}

#[test]
fn saturday_leaves_blinds_untouched() {
    let mut clock = MockClock::january(20, 8, 0);
    let bus = run_blinds(&mut clock);
    assert!(bus.calls.is_empty());
}

#[test]
fn sunday_evening_leaves_blinds_untouched() {
    let mut clock = MockClock::january(21, 20, 0);
    let bus = run_blinds(&mut clock);
    assert!(bus.calls.is_empty());
}

#[test]
fn before_opening_time_keeps_blinds_closed() {
    let mut clock = MockClock::january(17, 6, 45);
    let bus = run_blinds(&mut clock);
    assert_eq!(bus.writes_to(pins::SERVO_PIN), vec![PinState::Low]);
}

#[test]
fn blinds_never_touch_the_light() {
    let mut clock = MockClock::january(19, 12, 0);
    let bus = run_blinds(&mut clock);
    assert!(bus.writes_to(pins::LIGHT_PIN).is_empty());
    assert_eq!(bus.reads(), 0);
}

#[test]
fn write_failure_propagates() {
    let mut bus = MockBus::new();
    bus.fail_writes = true;
    let mut clock = MockClock::january(17, 8, 0);
    let mut lux = MockLux(0.0);
    let mut office =
        OfficeController::new(OfficeConfig::default(), &mut bus, &mut clock, &mut lux).unwrap();

    assert_eq!(
        office.manage_blinds_based_on_time(),
        Err(smartoffice::Error::Actuator(
            smartoffice::error::ActuatorError::GpioWriteFailed
        ))
    );
}
