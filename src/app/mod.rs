//! Application core — pure domain logic, zero I/O.
//!
//! The rules for occupancy, blinds and lighting live here.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod controller;
pub mod ports;
pub mod rules;
