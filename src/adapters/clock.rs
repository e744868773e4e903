//! Host wall-clock adapter.
//!
//! Implements [`ClockPort`] with the operating system's local time.  On
//! the office board the RTC chip driver implements the same port.

use chrono::{Local, NaiveDateTime};

use crate::app::ports::ClockPort;
use crate::error::SensorError;

/// Local time from the host clock.  Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn read_datetime(&mut self) -> Result<NaiveDateTime, SensorError> {
        Ok(Local::now().naive_local())
    }
}
