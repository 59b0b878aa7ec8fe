use core::ops::{Add, Neg, Sub};

/// A signed interval with a resolution of one second.
///
/// The components returned by [`days`](Self::days), [`hours`](Self::hours),
/// [`minutes`](Self::minutes) and [`seconds`](Self::seconds) are computed with
/// truncating division, so they carry the sign of the whole interval: -90 seconds is
/// -1 minute and -30 seconds.
///
/// Arithmetic wraps on overflow; the representable range is about 68 years either way.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duration {
    seconds: i32,
}

impl Duration {
    /// An empty interval.
    pub const ZERO: Duration = Duration { seconds: 0 };

    /// Create an interval of `seconds` seconds.
    pub const fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }

    /// Create an interval from its components.
    pub const fn new(days: i16, hours: i8, minutes: i8, seconds: i8) -> Self {
        let total = (days as i32)
            .wrapping_mul(86_400)
            .wrapping_add((hours as i32) * 3_600)
            .wrapping_add((minutes as i32) * 60)
            .wrapping_add(seconds as i32);
        Self { seconds: total }
    }

    /// Whole days in this interval.
    pub const fn days(&self) -> i16 {
        (self.seconds / 86_400) as i16
    }

    /// Hours of the last partial day, -23..=23.
    pub const fn hours(&self) -> i8 {
        (self.seconds / 3_600 % 24) as i8
    }

    /// Minutes of the last partial hour, -59..=59.
    pub const fn minutes(&self) -> i8 {
        (self.seconds / 60 % 60) as i8
    }

    /// Seconds of the last partial minute, -59..=59.
    pub const fn seconds(&self) -> i8 {
        (self.seconds % 60) as i8
    }

    /// The whole interval in seconds.
    pub const fn total_seconds(&self) -> i32 {
        self.seconds
    }
}

impl From<i32> for Duration {
    fn from(seconds: i32) -> Self {
        Self::from_seconds(seconds)
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration::from_seconds(self.seconds.wrapping_add(rhs.seconds))
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        Duration::from_seconds(self.seconds.wrapping_sub(rhs.seconds))
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration::from_seconds(self.seconds.wrapping_neg())
    }
}
