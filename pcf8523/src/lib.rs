//! Driver for the NXP PCF8523 real time clock
//!
//! This is an [`embedded-hal`] driver for the PCF8523, a battery backed real time clock
//! with an alarm, two countdown timers and a programmable clock output. The driver works
//! on any bus implementing [`embedded_hal::i2c::I2c`] and, through the `_async` methods,
//! [`embedded_hal_async::i2c::I2c`].
//!
//! Dates are handled by the [`pcf8523-datetime`](pcf8523_datetime) crate, re-exported
//! here as [`datetime`]. A [`SoftwareClock`](software::SoftwareClock) offers the same
//! [`Clock`] interface on top of a millisecond counter for boards without an RTC.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal

#![deny(missing_docs)]
#![no_std]

pub extern crate pcf8523_datetime as datetime;

mod alarm;
pub mod bcd;
mod clock;
mod error;
pub mod registers;
pub mod rtc;
pub mod software;

pub use alarm::Alarm;
pub use clock::Clock;
pub use datetime::{DateTime, DayOfWeek, Duration, Error as DateTimeError};
pub use error::Error;
pub use rtc::{Pcf8523, DEFAULT_ADDRESS};
