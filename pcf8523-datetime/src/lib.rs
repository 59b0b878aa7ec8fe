//! Calendar arithmetic for real time clocks
//!
//! This library converts between a civil date/time and linear second counters
//! (seconds since 2000-01-01 and seconds since the Unix epoch) without allocating.
//! It is shared by the PCF8523 driver but has no dependency on any bus or PAC.
//!
//! The conversions are only valid for the years 2000 to 2099. Time zones, daylight
//! saving time and leap seconds are not handled.
//!
//! With the **chrono** feature enabled, [`DateTime`] and [`DayOfWeek`] can be converted
//! to and from `chrono::NaiveDateTime` and `chrono::Weekday`.

#![deny(missing_docs)]
#![no_std]

pub mod calendar;
mod datetime;
#[cfg(feature = "chrono")]
pub mod datetime_chrono;
mod duration;
mod parse;

pub use datetime::{DateTime, DayOfWeek, Error};
pub use duration::Duration;
pub use parse::ParseError;
