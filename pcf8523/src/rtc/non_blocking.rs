use embedded_hal_async::i2c::I2c;

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
use crate::{Alarm, DateTime, Error};

impl<I2C, E> Pcf8523<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Read a single register.
    pub async fn read_register_async(&mut self, reg: u8) -> Result<u8, Error<E>> {
        let mut buf = [0];
        self.read_registers_async(reg, &mut buf).await?;
        Ok(buf[0])
    }

    /// Burst-read `buf.len()` consecutive registers starting at `reg`.
    pub async fn read_registers_async(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<E>> {
        check_burst(reg, buf.len())?;
        #[cfg(feature = "defmt")]
        defmt::trace!("pcf8523: read {=u8:#x} ({=usize} bytes)", reg, buf.len());
        self.i2c
            .write_read(DEFAULT_ADDRESS, &[reg], buf)
            .await
            .map_err(Error::I2c)
    }

    /// Write a single register.
    pub async fn write_register_async(&mut self, reg: u8, value: u8) -> Result<(), Error<E>> {
        self.write_registers_async(reg, &[value]).await
    }

    /// Burst-write `data` to consecutive registers starting at `reg`, in one transaction.
    pub async fn write_registers_async(&mut self, reg: u8, data: &[u8]) -> Result<(), Error<E>> {
        check_burst(reg, data.len())?;
        #[cfg(feature = "defmt")]
        defmt::trace!("pcf8523: write {=u8:#x} {=[u8]:#x}", reg, data);
        let mut frame = [0u8; REGISTER_COUNT + 1];
        frame[0] = reg;
        frame[1..=data.len()].copy_from_slice(data);
        self.i2c
            .write(DEFAULT_ADDRESS, &frame[..=data.len()])
            .await
            .map_err(Error::I2c)
    }

    /// Read a register, pass it through `f` and write the result back.
    pub async fn modify_register_async<F>(&mut self, reg: u8, f: F) -> Result<(), Error<E>>
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read_register_async(reg).await?;
        self.write_register_async(reg, f(value)).await
    }

    /// Checks to see if the oscillator is running, i.e. the STOP bit is clear.
    pub async fn is_running_async(&mut self) -> Result<bool, Error<E>> {
        let control = Control1(self.read_register_async(CONTROL_1).await?);
        Ok(!control.stop())
    }

    /// See [`Pcf8523::oscillator_stopped`].
    pub async fn oscillator_stopped_async(&mut self) -> Result<bool, Error<E>> {
        Ok(self.read_register_async(SECONDS).await? & FLAG_BIT != 0)
    }

    /// See [`Pcf8523::set_time`].
    pub async fn set_time_async(&mut self, dt: &DateTime) -> Result<(), Error<E>> {
        dt.validate().map_err(Error::InvalidDateTime)?;
        self.write_registers_async(SECONDS, &datetime_to_registers(dt))
            .await
    }

    /// Return the current date and time.
    pub async fn read_time_async(&mut self) -> Result<DateTime, Error<E>> {
        let mut regs = [0u8; 7];
        self.read_registers_async(SECONDS, &mut regs).await?;
        Ok(datetime_from_registers(&regs))
    }

    /// See [`Pcf8523::set_alarm`].
    pub async fn set_alarm_async(&mut self, alarm: Alarm) -> Result<(), Error<E>> {
        if !alarm.is_valid() {
            return Err(Error::InvalidAlarm);
        }
        self.write_registers_async(MINUTE_ALARM, &alarm.to_registers())
            .await
    }

    /// Read back the minute, hour and day alarm.
    pub async fn read_alarm_async(&mut self) -> Result<Alarm, Error<E>> {
        let mut regs = [0u8; 3];
        self.read_registers_async(MINUTE_ALARM, &mut regs).await?;
        Ok(Alarm::from_registers(regs))
    }

    /// Disable all four alarm fields.
    pub async fn disable_alarm_async(&mut self) -> Result<(), Error<E>> {
        self.write_registers_async(MINUTE_ALARM, &[FLAG_BIT; 4])
            .await
    }

    /// Enable or disable the alarm interrupt.
    pub async fn set_alarm_interrupt_async(&mut self, enabled: bool) -> Result<(), Error<E>> {
        self.modify_register_async(CONTROL_1, |v| {
            let mut c = Control1(v);
            c.set_alarm_interrupt(enabled);
            c.0
        })
        .await
    }

    /// Enable or disable the once-per-second interrupt.
    pub async fn set_second_interrupt_async(&mut self, enabled: bool) -> Result<(), Error<E>> {
        self.modify_register_async(CONTROL_1, |v| {
            let mut c = Control1(v);
            c.set_second_interrupt(enabled);
            c.0
        })
        .await
    }

    /// Read the interrupt flags and timer interrupt enables.
    pub async fn interrupt_flags_async(&mut self) -> Result<Control2, Error<E>> {
        Ok(Control2(self.read_register_async(CONTROL_2).await?))
    }

    /// See [`Pcf8523::clear_interrupt_flags`].
    pub async fn clear_interrupt_flags_async(&mut self) -> Result<bool, Error<E>> {
        let flags = self.interrupt_flags_async().await?;
        self.write_register_async(CONTROL_2, 0).await?;
        #[cfg(feature = "defmt")]
        defmt::debug!("pcf8523: cleared interrupt flags {}", flags);
        Ok(flags.second_or_alarm())
    }

    /// Stop the default 32.768 kHz CLKOUT signal.
    pub async fn disable_clock_output_async(&mut self) -> Result<(), Error<E>> {
        self.modify_register_async(TMR_CLKOUT_CTRL, |v| v | CLKOUT_DISABLED)
            .await
    }

    /// See [`Pcf8523::start_countdown_timer_a`].
    pub async fn start_countdown_timer_a_async(&mut self, value: u8) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("pcf8523: countdown timer A, {=u8} s", value);
        self.write_register_async(TMR_A_FREQ_CTRL, TimerFrequency::Hz1 as u8)
            .await?;
        self.write_register_async(TMR_A_REG, value).await?;
        self.modify_register_async(TMR_CLKOUT_CTRL, |v| {
            countdown_a_clock_out(ClockOutControl(v)).0
        })
        .await?;
        self.modify_register_async(CONTROL_2, |v| countdown_a_interrupt(Control2(v)).0)
            .await
    }

    /// Disable timer A.
    pub async fn stop_countdown_timer_a_async(&mut self) -> Result<(), Error<E>> {
        self.modify_register_async(TMR_CLKOUT_CTRL, |v| {
            let mut c = ClockOutControl(v);
            c.set_timer_a_control(0);
            c.0
        })
        .await
    }

    /// See [`Pcf8523::start_countdown_timer_b`].
    pub async fn start_countdown_timer_b_async(&mut self, value: u8) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("pcf8523: countdown timer B, {=u8} s", value);
        self.write_register_async(TMR_B_FREQ_CTRL, TimerFrequency::Hz1 as u8)
            .await?;
        self.write_register_async(TMR_B_REG, value).await?;
        self.modify_register_async(TMR_CLKOUT_CTRL, |v| {
            countdown_b_clock_out(ClockOutControl(v)).0
        })
        .await?;
        self.modify_register_async(CONTROL_2, |v| countdown_b_interrupt(Control2(v)).0)
            .await
    }

    /// Trigger a software reset of the device.
    pub async fn soft_reset_async(&mut self) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("pcf8523: software reset");
        self.write_register_async(CONTROL_1, SOFT_RESET).await
    }
}
