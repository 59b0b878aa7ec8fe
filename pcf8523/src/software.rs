//! Software clock
//!
//! A [`SoftwareClock`] keeps time with a free-running millisecond counter instead of an
//! RTC. It stores the offset between the counter and the Unix time given to
//! [`SoftwareClock::adjust`], so it does not survive a restart.
//!
//! A 32 bit millisecond counter rolls over after about 49.7 days; the clock is wrong
//! from that point on until it is adjusted again.
//!
//! The offset is owned by the clock object. If it is read from an interrupt handler
//! while being adjusted elsewhere, wrap the clock in a `critical_section::Mutex`.

use core::convert::Infallible;

use fugit::TimerInstantU32;

use crate::{Clock, DateTime};

/// A free-running millisecond counter.
pub trait MillisSource {
    /// The current value of the counter.
    fn now(&self) -> TimerInstantU32<1_000>;
}

/// Wall clock derived from a [`MillisSource`].
pub struct SoftwareClock<T> {
    source: T,
    offset: i64,
}

impl<T: MillisSource> SoftwareClock<T> {
    /// Create a new software clock starting at `dt`.
    pub fn new(source: T, dt: &DateTime) -> Self {
        let mut clock = Self { source, offset: 0 };
        clock.adjust(dt);
        clock
    }

    /// Set the clock to `dt`.
    pub fn adjust(&mut self, dt: &DateTime) {
        self.offset = i64::from(dt.unix_time()) - i64::from(self.uptime_secs());
    }

    /// Return the current date and time.
    pub fn now(&self) -> DateTime {
        DateTime::from_unix_time((self.offset + i64::from(self.uptime_secs())) as u32)
    }

    /// Unix time minus the counter value in seconds.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Release the millisecond source.
    pub fn release(self) -> T {
        self.source
    }

    fn uptime_secs(&self) -> u32 {
        self.source.now().duration_since_epoch().to_secs()
    }
}

impl<T: MillisSource> Clock for SoftwareClock<T> {
    type Error = Infallible;

    fn now(&mut self) -> Result<DateTime, Infallible> {
        Ok(SoftwareClock::now(self))
    }

    fn adjust(&mut self, dt: &DateTime) -> Result<(), Infallible> {
        SoftwareClock::adjust(self, dt);
        Ok(())
    }
}
