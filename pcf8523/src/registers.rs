//! PCF8523 register map
//!
//! See section 8 of the [PCF8523 datasheet](https://www.nxp.com/docs/en/data-sheet/PCF8523.pdf)
//! for the meaning of each bit.

/// Control 1: oscillator, reset and interrupt enables.
pub const CONTROL_1: u8 = 0x00;
/// Control 2: interrupt flags and timer interrupt enables.
pub const CONTROL_2: u8 = 0x01;
/// Control 3: battery switch-over and low battery detection.
pub const CONTROL_3: u8 = 0x02;
/// Seconds, with the oscillator stop flag in bit 7.
pub const SECONDS: u8 = 0x03;
/// Minutes.
pub const MINUTES: u8 = 0x04;
/// Hours.
pub const HOURS: u8 = 0x05;
/// Day of month.
pub const DAYS: u8 = 0x06;
/// Day of week.
pub const WEEKDAYS: u8 = 0x07;
/// Month.
pub const MONTHS: u8 = 0x08;
/// Years since 2000.
pub const YEARS: u8 = 0x09;
/// Minute alarm.
pub const MINUTE_ALARM: u8 = 0x0A;
/// Hour alarm.
pub const HOUR_ALARM: u8 = 0x0B;
/// Day alarm.
pub const DAY_ALARM: u8 = 0x0C;
/// Weekday alarm.
pub const WEEKDAY_ALARM: u8 = 0x0D;
/// Aging offset.
pub const OFFSET: u8 = 0x0E;
/// Clock output and timer control.
pub const TMR_CLKOUT_CTRL: u8 = 0x0F;
/// Timer A source clock.
pub const TMR_A_FREQ_CTRL: u8 = 0x10;
/// Timer A value.
pub const TMR_A_REG: u8 = 0x11;
/// Timer B source clock.
pub const TMR_B_FREQ_CTRL: u8 = 0x12;
/// Timer B value.
pub const TMR_B_REG: u8 = 0x13;

/// Number of registers, 0x00..=0x13.
pub const REGISTER_COUNT: usize = 0x14;

/// Value written to [`CONTROL_1`] to trigger a software reset.
pub const SOFT_RESET: u8 = 0x58;

/// Bit 7 of the time and alarm registers. Oscillator stopped in [`SECONDS`], alarm
/// disabled (AEN) in the alarm registers.
pub const FLAG_BIT: u8 = 0x80;

/// COF bits of [`TMR_CLKOUT_CTRL`] with CLKOUT disabled.
pub const CLKOUT_DISABLED: u8 = (1 << 3) | (1 << 4) | (1 << 5);

/// Timer source clock frequency, the value of [`TMR_A_FREQ_CTRL`] / [`TMR_B_FREQ_CTRL`].
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerFrequency {
    /// 4.096 kHz
    Hz4096 = 0,
    /// 64 Hz
    Hz64 = 1,
    /// 1 Hz
    Hz1 = 2,
    /// 1/60 Hz
    PerMinute = 3,
    /// 1/3600 Hz
    PerHour = 4,
}

bitfield::bitfield! {
    /// Bit field mapping of the [`CONTROL_1`] register.
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[derive(Copy, Clone, Default, PartialEq, Eq)]
    pub struct Control1(u8);
    impl Debug;
    /// Internal oscillator capacitor selection, 0 = 7 pF, 1 = 12.5 pF.
    pub capacitor_select, set_capacitor_select: 7;
    /// Unused, must be 0.
    pub t, set_t: 6;
    /// The RTC clock is stopped.
    pub stop, set_stop: 5;
    /// Software reset bit; reads back 0.
    pub software_reset, set_software_reset: 4;
    /// 12 hour mode when set, 24 hour mode when clear.
    pub mode_12_hour, set_mode_12_hour: 3;
    /// Second interrupt enable.
    pub second_interrupt, set_second_interrupt: 2;
    /// Alarm interrupt enable.
    pub alarm_interrupt, set_alarm_interrupt: 1;
    /// Correction interrupt enable.
    pub correction_interrupt, set_correction_interrupt: 0;
}

bitfield::bitfield! {
    /// Bit field mapping of the [`CONTROL_2`] register: interrupt flags and timer interrupt
    /// enables.
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[derive(Copy, Clone, Default, PartialEq, Eq)]
    pub struct Control2(u8);
    impl Debug;
    /// Watchdog timer A interrupt flag.
    pub watchdog_a_flag, set_watchdog_a_flag: 7;
    /// Countdown timer A interrupt flag.
    pub countdown_a_flag, set_countdown_a_flag: 6;
    /// Countdown timer B interrupt flag.
    pub countdown_b_flag, set_countdown_b_flag: 5;
    /// Second interrupt flag.
    pub second_flag, set_second_flag: 4;
    /// Alarm interrupt flag.
    pub alarm_flag, set_alarm_flag: 3;
    /// Watchdog timer A interrupt enable.
    pub watchdog_a_interrupt, set_watchdog_a_interrupt: 2;
    /// Countdown timer A interrupt enable.
    pub countdown_a_interrupt, set_countdown_a_interrupt: 1;
    /// Countdown timer B interrupt enable.
    pub countdown_b_interrupt, set_countdown_b_interrupt: 0;
}

impl Control2 {
    /// Returns `true` if the second or the alarm flag is set.
    pub fn second_or_alarm(&self) -> bool {
        self.second_flag() || self.alarm_flag()
    }

    /// Returns `true` if any of the five interrupt flags is set.
    pub fn any_flag(&self) -> bool {
        self.0 & 0b1111_1000 != 0
    }
}

bitfield::bitfield! {
    /// Bit field mapping of the [`TMR_CLKOUT_CTRL`] register.
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[derive(Copy, Clone, Default, PartialEq, Eq)]
    pub struct ClockOutControl(u8);
    impl Debug;
    /// Timer A interrupt is a pulse when set, a permanent level when clear.
    pub timer_a_pulsed, set_timer_a_pulsed: 7;
    /// Timer B interrupt is a pulse when set, a permanent level when clear.
    pub timer_b_pulsed, set_timer_b_pulsed: 6;
    /// CLKOUT frequency selection, `0b111` disables the output.
    pub u8, clkout_frequency, set_clkout_frequency: 5, 3;
    /// Timer A control: 00 disabled, 01 countdown, 10 watchdog.
    pub u8, timer_a_control, set_timer_a_control: 2, 1;
    /// Timer B enable.
    pub timer_b_enable, set_timer_b_enable: 0;
}

/// Timer A control value selecting countdown mode.
pub const TIMER_A_COUNTDOWN: u8 = 0b01;
