//! PCF8523 real time clock
//!
//! A [`Pcf8523`] owns the I2C bus handed to [`Pcf8523::new`] and keeps no other state:
//! every read is a fresh snapshot of the device registers and every write is committed
//! immediately. Methods with an `_async` suffix issue the same transactions on an
//! [`embedded_hal_async::i2c::I2c`] bus.
//!
//! ## Usage
//! ```no_run
//! # fn example<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<(), pcf8523::Error<I2C::Error>> {
//! use pcf8523::{Alarm, DateTime, Pcf8523};
//!
//! let mut rtc = Pcf8523::new(i2c);
//! if !rtc.is_running()? {
//!     rtc.set_time(&DateTime::new(2014, 8, 14, 1, 49, 0))?;
//! }
//! let now = rtc.read_time()?;
//!
//! // Wake up on the 5th at 05:45.
//! rtc.set_alarm(Alarm::with_day(5, 5, 45))?;
//! rtc.set_alarm_interrupt(true)?;
//! # let _ = now;
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! - **Day of week**: [`Pcf8523::set_time`] always writes 0 to the weekday register.
//!   Use [`DateTime::day_of_week`] instead of the device weekday.
//! - **Interrupt flags**: [`Pcf8523::clear_interrupt_flags`] writes 0 to the whole
//!   control 2 register, which also clears the timer interrupt enables.

use crate::bcd::{bcd_to_bin, bin_to_bcd};
use crate::registers::{ClockOutControl, Control2, FLAG_BIT, REGISTER_COUNT, TIMER_A_COUNTDOWN};
use crate::{DateTime, Error};

mod blocking;
mod non_blocking;

/// 7-bit I2C address of the PCF8523.
pub const DEFAULT_ADDRESS: u8 = 0x68;

/// A PCF8523 on an I2C bus
pub struct Pcf8523<I2C> {
    i2c: I2C,
}

impl<I2C> Pcf8523<I2C> {
    /// Create a driver for the PCF8523 on the given bus.
    ///
    /// This does not talk to the device.
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Release the underlying bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

pub(crate) fn check_burst<E>(reg: u8, len: usize) -> Result<(), Error<E>> {
    if usize::from(reg) >= REGISTER_COUNT || usize::from(reg) + len > REGISTER_COUNT {
        Err(Error::BurstOutOfRange)
    } else {
        Ok(())
    }
}

/// Register values for `SECONDS..=YEARS`.
pub(crate) fn datetime_to_registers(dt: &DateTime) -> [u8; 7] {
    [
        bin_to_bcd(dt.second()),
        bin_to_bcd(dt.minute()),
        bin_to_bcd(dt.hour()),
        bin_to_bcd(dt.day()),
        bin_to_bcd(0),
        bin_to_bcd(dt.month()),
        bin_to_bcd(dt.year_offset()),
    ]
}

/// Decode `SECONDS..=YEARS`. The oscillator stop flag and the weekday are dropped.
pub(crate) fn datetime_from_registers(regs: &[u8; 7]) -> DateTime {
    let second = bcd_to_bin(regs[0] & !FLAG_BIT);
    let minute = bcd_to_bin(regs[1]);
    let hour = bcd_to_bin(regs[2]);
    let day = bcd_to_bin(regs[3]);
    let month = bcd_to_bin(regs[5]);
    let year = u16::from(bcd_to_bin(regs[6])) + 2000;
    DateTime::new(year, month, day, hour, minute, second)
}

/// Countdown mode for timer A with CLKOUT disabled.
pub(crate) fn countdown_a_clock_out(mut c: ClockOutControl) -> ClockOutControl {
    c.set_timer_a_pulsed(true);
    c.set_clkout_frequency(0b111);
    c.set_timer_a_control(TIMER_A_COUNTDOWN);
    c
}

/// Countdown mode for timer B with CLKOUT disabled.
pub(crate) fn countdown_b_clock_out(mut c: ClockOutControl) -> ClockOutControl {
    c.set_timer_b_pulsed(true);
    c.set_clkout_frequency(0b111);
    c.set_timer_b_enable(true);
    c
}

pub(crate) fn countdown_a_interrupt(mut c: Control2) -> Control2 {
    c.set_countdown_a_flag(true);
    c.set_countdown_a_interrupt(true);
    c
}

pub(crate) fn countdown_b_interrupt(mut c: Control2) -> Control2 {
    c.set_countdown_b_flag(true);
    c.set_countdown_b_interrupt(true);
    c
}
