use embedded_hal::i2c::I2c;

use super::{
    check_burst, countdown_a_clock_out, countdown_a_interrupt, countdown_b_clock_out,
    countdown_b_interrupt, datetime_from_registers, datetime_to_registers, Pcf8523,
    DEFAULT_ADDRESS,
};
use crate::registers::{
    ClockOutControl, Control1, Control2, TimerFrequency, CLKOUT_DISABLED, CONTROL_1, CONTROL_2,
    FLAG_BIT, MINUTE_ALARM, REGISTER_COUNT, SECONDS, SOFT_RESET, TMR_A_FREQ_CTRL, TMR_A_REG,
    TMR_B_FREQ_CTRL, TMR_B_REG, TMR_CLKOUT_CTRL,
};
use crate::{Alarm, Clock, DateTime, Error};

impl<I2C, E> Pcf8523<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Read a single register.
    pub fn read_register(&mut self, reg: u8) -> Result<u8, Error<E>> {
        let mut buf = [0];
        self.read_registers(reg, &mut buf)?;
        Ok(buf[0])
    }

    /// Burst-read `buf.len()` consecutive registers starting at `reg`.
    pub fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<E>> {
        check_burst(reg, buf.len())?;
        #[cfg(feature = "defmt")]
        defmt::trace!("pcf8523: read {=u8:#x} ({=usize} bytes)", reg, buf.len());
        self.i2c
            .write_read(DEFAULT_ADDRESS, &[reg], buf)
            .map_err(Error::I2c)
    }

    /// Write a single register.
    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<E>> {
        self.write_registers(reg, &[value])
    }

    /// Burst-write `data` to consecutive registers starting at `reg`, in one transaction.
    pub fn write_registers(&mut self, reg: u8, data: &[u8]) -> Result<(), Error<E>> {
        check_burst(reg, data.len())?;
        #[cfg(feature = "defmt")]
        defmt::trace!("pcf8523: write {=u8:#x} {=[u8]:#x}", reg, data);
        let mut frame = [0u8; REGISTER_COUNT + 1];
        frame[0] = reg;
        frame[1..=data.len()].copy_from_slice(data);
        self.i2c
            .write(DEFAULT_ADDRESS, &frame[..=data.len()])
            .map_err(Error::I2c)
    }

    /// Read a register, pass it through `f` and write the result back.
    pub fn modify_register<F>(&mut self, reg: u8, f: F) -> Result<(), Error<E>>
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read_register(reg)?;
        self.write_register(reg, f(value))
    }

    /// Checks to see if the oscillator is running, i.e. the STOP bit is clear.
    pub fn is_running(&mut self) -> Result<bool, Error<E>> {
        let control = Control1(self.read_register(CONTROL_1)?);
        Ok(!control.stop())
    }

    /// Returns `true` if the oscillator has stopped since the time was last set, meaning
    /// the time can no longer be trusted.
    pub fn oscillator_stopped(&mut self) -> Result<bool, Error<E>> {
        Ok(self.read_register(SECONDS)? & FLAG_BIT != 0)
    }

    /// Set the date and time. This also clears the oscillator stop flag.
    ///
    /// # Errors
    ///
    /// Will return `Error::InvalidDateTime` if the datetime is not a valid range.
    pub fn set_time(&mut self, dt: &DateTime) -> Result<(), Error<E>> {
        dt.validate().map_err(Error::InvalidDateTime)?;
        self.write_registers(SECONDS, &datetime_to_registers(dt))
    }

    /// Return the current date and time.
    pub fn read_time(&mut self) -> Result<DateTime, Error<E>> {
        let mut regs = [0u8; 7];
        self.read_registers(SECONDS, &mut regs)?;
        Ok(datetime_from_registers(&regs))
    }

    /// Program the alarm. The weekday alarm is written as 0.
    ///
    /// # Errors
    ///
    /// Will return `Error::InvalidAlarm` if a field is out of range.
    pub fn set_alarm(&mut self, alarm: Alarm) -> Result<(), Error<E>> {
        if !alarm.is_valid() {
            return Err(Error::InvalidAlarm);
        }
        self.write_registers(MINUTE_ALARM, &alarm.to_registers())
    }

    /// Read back the minute, hour and day alarm.
    pub fn read_alarm(&mut self) -> Result<Alarm, Error<E>> {
        let mut regs = [0u8; 3];
        self.read_registers(MINUTE_ALARM, &mut regs)?;
        Ok(Alarm::from_registers(regs))
    }

    /// Disable all four alarm fields.
    pub fn disable_alarm(&mut self) -> Result<(), Error<E>> {
        self.write_registers(MINUTE_ALARM, &[FLAG_BIT; 4])
    }

    /// Enable or disable the alarm interrupt.
    pub fn set_alarm_interrupt(&mut self, enabled: bool) -> Result<(), Error<E>> {
        self.modify_register(CONTROL_1, |v| {
            let mut c = Control1(v);
            c.set_alarm_interrupt(enabled);
            c.0
        })
    }

    /// Enable or disable the once-per-second interrupt.
    pub fn set_second_interrupt(&mut self, enabled: bool) -> Result<(), Error<E>> {
        self.modify_register(CONTROL_1, |v| {
            let mut c = Control1(v);
            c.set_second_interrupt(enabled);
            c.0
        })
    }

    /// Read the interrupt flags and timer interrupt enables.
    pub fn interrupt_flags(&mut self) -> Result<Control2, Error<E>> {
        Ok(Control2(self.read_register(CONTROL_2)?))
    }

    /// Clear the interrupt flags. Returns `true` if the second or the alarm flag was set.
    ///
    /// The whole control 2 register is zeroed, including the timer interrupt enables.
    pub fn clear_interrupt_flags(&mut self) -> Result<bool, Error<E>> {
        let flags = self.interrupt_flags()?;
        self.write_register(CONTROL_2, 0)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("pcf8523: cleared interrupt flags {}", flags);
        Ok(flags.second_or_alarm())
    }

    /// Stop the default 32.768 kHz CLKOUT signal.
    pub fn disable_clock_output(&mut self) -> Result<(), Error<E>> {
        self.modify_register(TMR_CLKOUT_CTRL, |v| v | CLKOUT_DISABLED)
    }

    /// Start timer A as a 1 Hz countdown of `value` seconds with its interrupt enabled.
    ///
    /// CLKOUT is disabled as the pin is shared with the interrupt output.
    pub fn start_countdown_timer_a(&mut self, value: u8) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("pcf8523: countdown timer A, {=u8} s", value);
        self.write_register(TMR_A_FREQ_CTRL, TimerFrequency::Hz1 as u8)?;
        self.write_register(TMR_A_REG, value)?;
        self.modify_register(TMR_CLKOUT_CTRL, |v| {
            countdown_a_clock_out(ClockOutControl(v)).0
        })?;
        self.modify_register(CONTROL_2, |v| countdown_a_interrupt(Control2(v)).0)
    }

    /// Disable timer A.
    pub fn stop_countdown_timer_a(&mut self) -> Result<(), Error<E>> {
        self.modify_register(TMR_CLKOUT_CTRL, |v| {
            let mut c = ClockOutControl(v);
            c.set_timer_a_control(0);
            c.0
        })
    }

    /// Start timer B as a 1 Hz countdown of `value` seconds with its interrupt enabled.
    pub fn start_countdown_timer_b(&mut self, value: u8) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("pcf8523: countdown timer B, {=u8} s", value);
        self.write_register(TMR_B_FREQ_CTRL, TimerFrequency::Hz1 as u8)?;
        self.write_register(TMR_B_REG, value)?;
        self.modify_register(TMR_CLKOUT_CTRL, |v| {
            countdown_b_clock_out(ClockOutControl(v)).0
        })?;
        self.modify_register(CONTROL_2, |v| countdown_b_interrupt(Control2(v)).0)
    }

    /// Trigger a software reset of the device.
    pub fn soft_reset(&mut self) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("pcf8523: software reset");
        self.write_register(CONTROL_1, SOFT_RESET)
    }
}

impl<I2C, E> Clock for Pcf8523<I2C>
where
    I2C: I2c<Error = E>,
{
    type Error = Error<E>;

    fn now(&mut self) -> Result<DateTime, Self::Error> {
        self.read_time()
    }

    fn adjust(&mut self, dt: &DateTime) -> Result<(), Self::Error> {
        self.set_time(dt)
    }
}
