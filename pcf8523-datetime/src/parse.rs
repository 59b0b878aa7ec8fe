//! Parsing of build timestamps
//!
//! C compilers, and build scripts imitating them, describe the build time with two
//! fixed-width strings: `"Dec 26 2009"` and `"12:34:56"`. The day of month is padded
//! with a space rather than a zero (`"Jan  5 2024"`).

use crate::{DateTime, Error};

/// Errors returned by [`DateTime::from_build_strings`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// The date is not 11 bytes long or the time is not 8 bytes long.
    InvalidLength,
    /// A space or colon is missing at a fixed position.
    InvalidSeparator,
    /// A numeric field contains something other than a decimal digit.
    InvalidDigit,
    /// The month is not one of `Jan`, `Feb`, ..., `Dec`.
    InvalidMonth,
    /// The string was well formed but does not describe a valid date and time.
    OutOfRange(Error),
}

impl From<Error> for ParseError {
    fn from(e: Error) -> Self {
        ParseError::OutOfRange(e)
    }
}

const MONTHS: [&[u8; 3]; 12] = [
    b"Jan", b"Feb", b"Mar", b"Apr", b"May", b"Jun", b"Jul", b"Aug", b"Sep", b"Oct", b"Nov", b"Dec",
];

fn digit(c: u8) -> Result<u8, ParseError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        _ => Err(ParseError::InvalidDigit),
    }
}

/// Two decimal digits.
fn two_digits(s: &[u8]) -> Result<u8, ParseError> {
    Ok(10 * digit(s[0])? + digit(s[1])?)
}

/// Day of month: two digits, the tens position may be a space.
fn day_of_month(s: &[u8]) -> Result<u8, ParseError> {
    let tens = match s[0] {
        b' ' => 0,
        c => digit(c)?,
    };
    Ok(10 * tens + digit(s[1])?)
}

fn month(s: &[u8]) -> Result<u8, ParseError> {
    MONTHS
        .iter()
        .position(|name| name[..] == *s)
        .map(|i| i as u8 + 1)
        .ok_or(ParseError::InvalidMonth)
}

impl DateTime {
    /// Parse a build timestamp such as `("Dec 26 2009", "12:34:56")`.
    ///
    /// # Errors
    ///
    /// Malformed strings are rejected with a [`ParseError`]; years outside 2000..=2099 and
    /// impossible dates give [`ParseError::OutOfRange`].
    pub fn from_build_strings(date: &str, time: &str) -> Result<Self, ParseError> {
        let date = date.as_bytes();
        let time = time.as_bytes();
        if date.len() != 11 || time.len() != 8 {
            return Err(ParseError::InvalidLength);
        }
        if date[3] != b' ' || date[6] != b' ' || time[2] != b':' || time[5] != b':' {
            return Err(ParseError::InvalidSeparator);
        }

        let month = month(&date[0..3])?;
        let day = day_of_month(&date[4..6])?;
        let century = two_digits(&date[7..9])?;
        let year = two_digits(&date[9..11])?;
        if century != 20 {
            return Err(ParseError::OutOfRange(Error::InvalidYear));
        }

        let hour = two_digits(&time[0..2])?;
        let minute = two_digits(&time[3..5])?;
        let second = two_digits(&time[6..8])?;

        Ok(DateTime::try_new(
            2000 + u16::from(year),
            month,
            day,
            hour,
            minute,
            second,
        )?)
    }
}
