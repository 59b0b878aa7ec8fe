//! Day counting for the 2000..=2099 century
//!
//! All functions in here are unchecked: callers must pass well-formed fields. A
//! malformed field gives a meaningless result, but never panics.

/// Seconds in one day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Seconds between 1970-01-01 00:00:00 and 2000-01-01 00:00:00.
pub const SECONDS_FROM_1970_TO_2000: u32 = 946_684_800;

/// Number of days in each month of a common year, January first.
pub const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year_offset` (years since 2000) is a leap year.
///
/// There is no century exception: 2100 is outside the supported range.
pub const fn is_leap_year(year_offset: u16) -> bool {
    year_offset % 4 == 0
}

/// Number of days in `month` (1..=12) of the given year, or 0 for an invalid month.
pub const fn days_in_month(year_offset: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year_offset) => 29,
        1..=12 => DAYS_IN_MONTH[month as usize - 1],
        _ => 0,
    }
}

/// Number of days elapsed between 2000-01-01 and the given date.
///
/// `year` may either be a full year (2000..=2099) or an offset from 2000.
pub fn days_since_2000(year: u16, month: u8, day: u8) -> u16 {
    let y = if year >= 2000 { year - 2000 } else { year };

    let mut days = u16::from(day);
    for &len in DAYS_IN_MONTH.iter().take(usize::from(month.saturating_sub(1))) {
        days = days.wrapping_add(u16::from(len));
    }
    if month > 2 && is_leap_year(y) {
        days = days.wrapping_add(1);
    }

    days.wrapping_add(y.wrapping_mul(365))
        .wrapping_add(y.wrapping_add(3) / 4)
        .wrapping_sub(1)
}

/// Combines a day count with a time of day into a number of seconds.
pub fn seconds_from_days(days: u16, hour: u8, minute: u8, second: u8) -> u32 {
    let hours = u32::from(days)
        .wrapping_mul(24)
        .wrapping_add(u32::from(hour));
    let minutes = hours.wrapping_mul(60).wrapping_add(u32::from(minute));
    minutes.wrapping_mul(60).wrapping_add(u32::from(second))
}
