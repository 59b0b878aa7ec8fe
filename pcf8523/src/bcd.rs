//! Binary-coded decimal conversion for the time and alarm registers

/// Decode a two-digit BCD value, e.g. `0x45` -> `45`.
///
/// Flag bits above the tens digit must be masked off by the caller.
pub const fn bcd_to_bin(value: u8) -> u8 {
    value - 6 * (value >> 4)
}

/// Encode `0..=99` as two BCD digits, e.g. `45` -> `0x45`.
pub const fn bin_to_bcd(value: u8) -> u8 {
    value + 6 * (value / 10)
}
