use core::ops::{Add, Sub};

use crate::calendar::{
    days_in_month, days_since_2000, is_leap_year, seconds_from_days, DAYS_IN_MONTH,
    SECONDS_FROM_1970_TO_2000,
};
use crate::Duration;

/// Errors regarding the [`DateTime`] and [`DayOfWeek`] types.
#[allow(clippy::enum_variant_names)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The [DateTime] contains an invalid year value. Must be between `2000..=2099`.
    InvalidYear,
    /// The [DateTime] contains an invalid month value. Must be between `1..=12`.
    InvalidMonth,
    /// The [DateTime] contains an invalid day value. Must be between `1` and the length of the month.
    InvalidDay,
    /// An invalid day of week was given. Must be between `0..=6` where 0 is Sunday.
    InvalidDayOfWeek(
        /// The value of the DayOfWeek that was given.
        u8,
    ),
    /// The [DateTime] contains an invalid hour value. Must be between `0..=23`.
    InvalidHour,
    /// The [DateTime] contains an invalid minute value. Must be between `0..=59`.
    InvalidMinute,
    /// The [DateTime] contains an invalid second value. Must be between `0..=59`.
    InvalidSecond,
}

/// A day of the week
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum DayOfWeek {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl TryFrom<u8> for DayOfWeek {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Error> {
        Ok(match v {
            0 => DayOfWeek::Sunday,
            1 => DayOfWeek::Monday,
            2 => DayOfWeek::Tuesday,
            3 => DayOfWeek::Wednesday,
            4 => DayOfWeek::Thursday,
            5 => DayOfWeek::Friday,
            6 => DayOfWeek::Saturday,
            x => return Err(Error::InvalidDayOfWeek(x)),
        })
    }
}

/// A civil date and time between 2000-01-01 00:00:00 and 2099-12-31 23:59:59.
///
/// This is a plain value: arithmetic with [`Duration`] always produces a new
/// `DateTime`. Values compare in chronological order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    year_offset: u8,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl Default for DateTime {
    fn default() -> Self {
        Self::from_secs_since_2000(0)
    }
}

impl DateTime {
    /// Create a new `DateTime` without checking the fields.
    ///
    /// `year` may be a full year (2000..=2099) or an offset from 2000. Use
    /// [`DateTime::try_new`] if the fields come from an untrusted source.
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        let year_offset = if year >= 2000 { year - 2000 } else { year };
        Self {
            year_offset: year_offset as u8,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Create a new `DateTime`, checking every field.
    ///
    /// # Errors
    ///
    /// Returns the [`Error`] for the first field that is out of range.
    pub fn try_new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, Error> {
        if !(2000..=2099).contains(&year) {
            return Err(Error::InvalidYear);
        }
        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate()?;
        Ok(dt)
    }

    /// Decode a number of seconds since 2000-01-01 00:00:00.
    pub fn from_secs_since_2000(t: u32) -> Self {
        let second = (t % 60) as u8;
        let t = t / 60;
        let minute = (t % 60) as u8;
        let t = t / 60;
        let hour = (t % 24) as u8;
        let mut days = t / 24;

        let mut year_offset: u8 = 0;
        let mut leap;
        loop {
            leap = is_leap_year(u16::from(year_offset));
            let year_len = 365 + u32::from(leap);
            if days < year_len {
                break;
            }
            days -= year_len;
            year_offset += 1;
        }

        let mut month: u8 = 1;
        for &len in DAYS_IN_MONTH.iter() {
            let len = u32::from(len) + u32::from(leap && month == 2);
            if days < len {
                break;
            }
            days -= len;
            month += 1;
        }

        Self {
            year_offset,
            month,
            day: days as u8 + 1,
            hour,
            minute,
            second,
        }
    }

    /// Decode a Unix timestamp (seconds since 1970-01-01 00:00:00).
    ///
    /// Timestamps before 2000 are not representable and give a meaningless value.
    pub fn from_unix_time(t: u32) -> Self {
        Self::from_secs_since_2000(t.wrapping_sub(SECONDS_FROM_1970_TO_2000))
    }

    /// Check that all fields describe a real date and time in 2000..=2099.
    ///
    /// # Errors
    ///
    /// Returns the [`Error`] for the first field that is out of range.
    pub fn validate(&self) -> Result<(), Error> {
        if self.year_offset > 99 {
            Err(Error::InvalidYear)
        } else if self.month < 1 || self.month > 12 {
            Err(Error::InvalidMonth)
        } else if self.day < 1 || self.day > days_in_month(self.year_offset.into(), self.month) {
            Err(Error::InvalidDay)
        } else if self.hour > 23 {
            Err(Error::InvalidHour)
        } else if self.minute > 59 {
            Err(Error::InvalidMinute)
        } else if self.second > 59 {
            Err(Error::InvalidSecond)
        } else {
            Ok(())
        }
    }

    /// The full year, 2000..=2099.
    pub const fn year(&self) -> u16 {
        2000 + self.year_offset as u16
    }

    /// Years since 2000, 0..=99.
    pub const fn year_offset(&self) -> u8 {
        self.year_offset
    }

    /// 1..=12, 1 is January
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// 1..=31 depending on month
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// 0..=23
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// 0..=59
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// 0..=59
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// The day of the week. 2000-01-01 was a Saturday.
    pub fn day_of_week(&self) -> DayOfWeek {
        let days = days_since_2000(self.year_offset.into(), self.month, self.day);
        match (days.wrapping_add(6)) % 7 {
            0 => DayOfWeek::Sunday,
            1 => DayOfWeek::Monday,
            2 => DayOfWeek::Tuesday,
            3 => DayOfWeek::Wednesday,
            4 => DayOfWeek::Thursday,
            5 => DayOfWeek::Friday,
            _ => DayOfWeek::Saturday,
        }
    }

    /// Seconds since 2000-01-01 00:00:00.
    pub fn secs_since_2000(&self) -> u32 {
        let days = days_since_2000(self.year_offset.into(), self.month, self.day);
        seconds_from_days(days, self.hour, self.minute, self.second)
    }

    /// Seconds since 1970-01-01 00:00:00.
    pub fn unix_time(&self) -> u32 {
        self.secs_since_2000()
            .wrapping_add(SECONDS_FROM_1970_TO_2000)
    }
}

impl Add<Duration> for DateTime {
    type Output = DateTime;

    fn add(self, span: Duration) -> DateTime {
        DateTime::from_unix_time(self.unix_time().wrapping_add_signed(span.total_seconds()))
    }
}

impl Sub<Duration> for DateTime {
    type Output = DateTime;

    fn sub(self, span: Duration) -> DateTime {
        self + -span
    }
}

impl Sub for DateTime {
    type Output = Duration;

    fn sub(self, rhs: DateTime) -> Duration {
        Duration::from_seconds(self.unix_time().wrapping_sub(rhs.unix_time()) as i32)
    }
}
