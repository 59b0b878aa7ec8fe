use crate::bcd::{bcd_to_bin, bin_to_bcd};
use crate::registers::FLAG_BIT;

/// Alarm time written to the minute, hour and day alarm registers.
///
/// A `day` of 0 disables day matching, so the alarm fires every day at `hour:minute`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alarm {
    /// 0..=59
    pub minute: u8,
    /// 0..=23
    pub hour: u8,
    /// 1..=31, or 0 to ignore the day
    pub day: u8,
}

impl Alarm {
    /// An alarm that fires every day at `hour:minute`.
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self {
            minute,
            hour,
            day: 0,
        }
    }

    /// An alarm that fires at `hour:minute` on the given day of the month.
    pub const fn with_day(day: u8, hour: u8, minute: u8) -> Self {
        Self { minute, hour, day }
    }

    /// The day to match, if day matching is enabled.
    pub const fn day(&self) -> Option<u8> {
        match self.day {
            0 => None,
            d => Some(d),
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.minute <= 59 && self.hour <= 23 && self.day <= 31
    }

    /// Register values for `MINUTE_ALARM..=WEEKDAY_ALARM`. The weekday alarm is always 0.
    pub(crate) fn to_registers(self) -> [u8; 4] {
        [
            bin_to_bcd(self.minute),
            bin_to_bcd(self.hour),
            bin_to_bcd(self.day),
            0,
        ]
    }

    /// Decode `MINUTE_ALARM..=DAY_ALARM`, ignoring the AEN bits.
    pub(crate) fn from_registers(regs: [u8; 3]) -> Self {
        Self {
            minute: bcd_to_bin(regs[0] & !FLAG_BIT),
            hour: bcd_to_bin(regs[1] & !FLAG_BIT),
            day: bcd_to_bin(regs[2] & !FLAG_BIT),
        }
    }
}
