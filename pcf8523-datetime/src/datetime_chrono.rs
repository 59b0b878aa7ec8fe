//! Conversions between [`chrono`] types and the types of this crate

use crate::{DateTime, DayOfWeek, Error};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// The given [`DateTime`] does not describe a valid `chrono::NaiveDateTime`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutOfRangeError {
    /// Year, month or day are invalid.
    YearMonthDay,
    /// Hour, minute or second are invalid.
    HourMinuteSecond,
}

impl From<Weekday> for DayOfWeek {
    fn from(wd: Weekday) -> DayOfWeek {
        use DayOfWeek::*;
        match wd {
            Weekday::Mon => Monday,
            Weekday::Tue => Tuesday,
            Weekday::Wed => Wednesday,
            Weekday::Thu => Thursday,
            Weekday::Fri => Friday,
            Weekday::Sat => Saturday,
            Weekday::Sun => Sunday,
        }
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(dow: DayOfWeek) -> Weekday {
        use DayOfWeek::*;
        match dow {
            Monday => Weekday::Mon,
            Tuesday => Weekday::Tue,
            Wednesday => Weekday::Wed,
            Thursday => Weekday::Thu,
            Friday => Weekday::Fri,
            Saturday => Weekday::Sat,
            Sunday => Weekday::Sun,
        }
    }
}

impl TryFrom<NaiveDateTime> for DateTime {
    type Error = Error;

    /// Sub-second precision and leap seconds are dropped.
    fn try_from(dt: NaiveDateTime) -> Result<Self, Error> {
        let year = u16::try_from(dt.year()).map_err(|_| Error::InvalidYear)?;
        DateTime::try_new(
            year,
            dt.month() as u8,
            dt.day() as u8,
            dt.hour() as u8,
            dt.minute() as u8,
            dt.second().min(59) as u8,
        )
    }
}

impl TryFrom<DateTime> for NaiveDateTime {
    type Error = OutOfRangeError;

    fn try_from(dt: DateTime) -> Result<NaiveDateTime, OutOfRangeError> {
        chrono::NaiveDate::from_ymd_opt(dt.year().into(), dt.month().into(), dt.day().into())
            .ok_or(OutOfRangeError::YearMonthDay)?
            .and_hms_opt(dt.hour().into(), dt.minute().into(), dt.second().into())
            .ok_or(OutOfRangeError::HourMinuteSecond)
    }
}
