//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter | Implements                            | Connects to              |
//! |---------|---------------------------------------|--------------------------|
//! | `gpio`  | DigitalIo                             | embedded-hal pins        |
//! | `clock` | ClockPort                             | host local time (chrono) |
//! | `sim`   | DigitalIo, ClockPort, LightSensorPort | in-memory room           |

pub mod clock;
pub mod gpio;
pub mod sim;
