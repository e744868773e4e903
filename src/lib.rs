//! SmartOffice controller library.
//!
//! Rule engine for office occupancy sensors, window blinds and the
//! indicator light, built around port traits so the same rules run
//! against real GPIO, an RTC and a lux sensor or against in-memory fakes.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                    │
//! │   HalGpio (DigitalIo)  SystemClock (ClockPort)           │
//! │   SimulatedOffice (all ports)                            │
//! │                                                          │
//! │   ─────────────── Port Trait Boundary ───────────────    │
//! │                                                          │
//! │   ┌──────────────────────────────────────────────────┐   │
//! │   │     OfficeController · rules (pure logic)        │   │
//! │   └──────────────────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod pins;

pub use app::controller::{OfficeController, Quadrant};
pub use error::{Error, Result};
