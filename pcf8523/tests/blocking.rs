//! Bus level tests of the blocking driver against a mocked I2C bus.

use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use pcf8523::registers::{Control2, CONTROL_1, CONTROL_2, MINUTE_ALARM, SECONDS, TMR_CLKOUT_CTRL};
use pcf8523::{Alarm, Clock, DateTime, DateTimeError, Error, Pcf8523, DEFAULT_ADDRESS};

const ADDR: u8 = DEFAULT_ADDRESS;

fn with_rtc(expectations: &[I2cTransaction], f: impl FnOnce(&mut Pcf8523<I2cMock>)) {
    let mut rtc = Pcf8523::new(I2cMock::new(expectations));
    f(&mut rtc);
    rtc.release().done();
}

#[test]
fn address_is_0x68() {
    assert_eq!(DEFAULT_ADDRESS, 0x68);
}

#[test]
fn set_time_writes_seven_bcd_registers() {
    let expectations = [I2cTransaction::write(
        ADDR,
        vec![SECONDS, 0x56, 0x34, 0x12, 0x26, 0x00, 0x12, 0x09],
    )];
    with_rtc(&expectations, |rtc| {
        rtc.set_time(&DateTime::new(2009, 12, 26, 12, 34, 56)).unwrap();
    });
}

#[test]
fn read_time_masks_the_oscillator_flag() {
    let expectations = [I2cTransaction::write_read(
        ADDR,
        vec![SECONDS],
        vec![0x80 | 0x49, 0x59, 0x23, 0x31, 0x03, 0x12, 0x99],
    )];
    with_rtc(&expectations, |rtc| {
        assert_eq!(
            rtc.read_time().unwrap(),
            DateTime::new(2099, 12, 31, 23, 59, 49)
        );
    });
}

#[test]
fn time_round_trip() {
    let dt = DateTime::new(2014, 8, 14, 1, 49, 0);
    let expectations = [
        I2cTransaction::write(ADDR, vec![SECONDS, 0x00, 0x49, 0x01, 0x14, 0x00, 0x08, 0x14]),
        I2cTransaction::write_read(
            ADDR,
            vec![SECONDS],
            vec![0x00, 0x49, 0x01, 0x14, 0x00, 0x08, 0x14],
        ),
    ];
    with_rtc(&expectations, |rtc| {
        rtc.set_time(&dt).unwrap();
        assert_eq!(rtc.read_time().unwrap(), dt);
    });
}

#[test]
fn invalid_time_is_not_written() {
    with_rtc(&[], |rtc| {
        assert_eq!(
            rtc.set_time(&DateTime::new(2023, 2, 29, 0, 0, 0)),
            Err(Error::InvalidDateTime(DateTimeError::InvalidDay))
        );
        assert_eq!(
            rtc.set_time(&DateTime::new(2024, 1, 1, 24, 0, 0)),
            Err(Error::InvalidDateTime(DateTimeError::InvalidHour))
        );
    });
}

#[test]
fn is_running_checks_the_stop_bit() {
    let expectations = [
        I2cTransaction::write_read(ADDR, vec![CONTROL_1], vec![0x00]),
        I2cTransaction::write_read(ADDR, vec![CONTROL_1], vec![0x20]),
        I2cTransaction::write_read(ADDR, vec![CONTROL_1], vec![0xDF]),
    ];
    with_rtc(&expectations, |rtc| {
        assert!(rtc.is_running().unwrap());
        assert!(!rtc.is_running().unwrap());
        assert!(rtc.is_running().unwrap());
    });
}

#[test]
fn oscillator_stop_flag() {
    let expectations = [
        I2cTransaction::write_read(ADDR, vec![SECONDS], vec![0x80 | 0x12]),
        I2cTransaction::write_read(ADDR, vec![SECONDS], vec![0x12]),
    ];
    with_rtc(&expectations, |rtc| {
        assert!(rtc.oscillator_stopped().unwrap());
        assert!(!rtc.oscillator_stopped().unwrap());
    });
}

#[test]
fn alarm_round_trip() {
    let expectations = [
        I2cTransaction::write(ADDR, vec![MINUTE_ALARM, 0x45, 0x05, 0x05, 0x00]),
        I2cTransaction::write_read(ADDR, vec![MINUTE_ALARM], vec![0x45, 0x05, 0x85]),
    ];
    with_rtc(&expectations, |rtc| {
        rtc.set_alarm(Alarm::with_day(5, 5, 45)).unwrap();
        let alarm = rtc.read_alarm().unwrap();
        assert_eq!(alarm, Alarm::with_day(5, 5, 45));
        assert_eq!((alarm.minute, alarm.hour, alarm.day), (45, 5, 5));
    });
}

#[test]
fn daily_alarm_disables_day_matching() {
    let expectations = [I2cTransaction::write(
        ADDR,
        vec![MINUTE_ALARM, 0x30, 0x07, 0x00, 0x00],
    )];
    with_rtc(&expectations, |rtc| {
        rtc.set_alarm(Alarm::new(7, 30)).unwrap();
    });
}

#[test]
fn invalid_alarm_is_not_written() {
    with_rtc(&[], |rtc| {
        assert_eq!(rtc.set_alarm(Alarm::new(24, 0)), Err(Error::InvalidAlarm));
        assert_eq!(rtc.set_alarm(Alarm::new(0, 60)), Err(Error::InvalidAlarm));
        assert_eq!(
            rtc.set_alarm(Alarm::with_day(32, 0, 0)),
            Err(Error::InvalidAlarm)
        );
    });
}

#[test]
fn disable_alarm_sets_every_aen_bit() {
    let expectations = [I2cTransaction::write(
        ADDR,
        vec![MINUTE_ALARM, 0x80, 0x80, 0x80, 0x80],
    )];
    with_rtc(&expectations, |rtc| {
        rtc.disable_alarm().unwrap();
    });
}

#[test]
fn clear_interrupt_flags_reports_second_and_alarm() {
    let expectations = [
        I2cTransaction::write_read(ADDR, vec![CONTROL_2], vec![0x10]),
        I2cTransaction::write(ADDR, vec![CONTROL_2, 0x00]),
        I2cTransaction::write_read(ADDR, vec![CONTROL_2], vec![0x08 | 0x02]),
        I2cTransaction::write(ADDR, vec![CONTROL_2, 0x00]),
        I2cTransaction::write_read(ADDR, vec![CONTROL_2], vec![0x40 | 0x07]),
        I2cTransaction::write(ADDR, vec![CONTROL_2, 0x00]),
        I2cTransaction::write_read(ADDR, vec![CONTROL_2], vec![0x00]),
        I2cTransaction::write(ADDR, vec![CONTROL_2, 0x00]),
    ];
    with_rtc(&expectations, |rtc| {
        assert!(rtc.clear_interrupt_flags().unwrap());
        assert!(rtc.clear_interrupt_flags().unwrap());
        // Timer A flag and the enable bits do not count.
        assert!(!rtc.clear_interrupt_flags().unwrap());
        assert!(!rtc.clear_interrupt_flags().unwrap());
    });
}

#[test]
fn interrupt_flags_snapshot() {
    let expectations = [I2cTransaction::write_read(ADDR, vec![CONTROL_2], vec![0x28])];
    with_rtc(&expectations, |rtc| {
        let flags = rtc.interrupt_flags().unwrap();
        assert_eq!(flags, Control2(0x28));
        assert!(flags.countdown_b_flag());
        assert!(flags.alarm_flag());
        assert!(!flags.second_flag());
    });
}

#[test]
fn interrupt_enables_are_read_modify_write() {
    let expectations = [
        I2cTransaction::write_read(ADDR, vec![CONTROL_1], vec![0x80]),
        I2cTransaction::write(ADDR, vec![CONTROL_1, 0x82]),
        I2cTransaction::write_read(ADDR, vec![CONTROL_1], vec![0x86]),
        I2cTransaction::write(ADDR, vec![CONTROL_1, 0x82]),
    ];
    with_rtc(&expectations, |rtc| {
        rtc.set_alarm_interrupt(true).unwrap();
        rtc.set_second_interrupt(false).unwrap();
    });
}

#[test]
fn disable_clock_output_keeps_other_bits() {
    let expectations = [
        I2cTransaction::write_read(ADDR, vec![TMR_CLKOUT_CTRL], vec![0x02]),
        I2cTransaction::write(ADDR, vec![TMR_CLKOUT_CTRL, 0x3A]),
    ];
    with_rtc(&expectations, |rtc| {
        rtc.disable_clock_output().unwrap();
    });
}

#[test]
fn countdown_timer_a_sequence() {
    let expectations = [
        I2cTransaction::write(ADDR, vec![0x10, 0x02]),
        I2cTransaction::write(ADDR, vec![0x11, 30]),
        I2cTransaction::write_read(ADDR, vec![0x0F], vec![0x04]),
        I2cTransaction::write(ADDR, vec![0x0F, 0xBA]),
        I2cTransaction::write_read(ADDR, vec![0x01], vec![0x08]),
        I2cTransaction::write(ADDR, vec![0x01, 0x4A]),
    ];
    with_rtc(&expectations, |rtc| {
        rtc.start_countdown_timer_a(30).unwrap();
    });
}

#[test]
fn countdown_timer_b_sequence() {
    let expectations = [
        I2cTransaction::write(ADDR, vec![0x12, 0x02]),
        I2cTransaction::write(ADDR, vec![0x13, 10]),
        I2cTransaction::write_read(ADDR, vec![0x0F], vec![0x00]),
        I2cTransaction::write(ADDR, vec![0x0F, 0x79]),
        I2cTransaction::write_read(ADDR, vec![0x01], vec![0x00]),
        I2cTransaction::write(ADDR, vec![0x01, 0x21]),
    ];
    with_rtc(&expectations, |rtc| {
        rtc.start_countdown_timer_b(10).unwrap();
    });
}

#[test]
fn stop_countdown_timer_a_clears_tac() {
    let expectations = [
        I2cTransaction::write_read(ADDR, vec![0x0F], vec![0xBA]),
        I2cTransaction::write(ADDR, vec![0x0F, 0xB8]),
    ];
    with_rtc(&expectations, |rtc| {
        rtc.stop_countdown_timer_a().unwrap();
    });
}

#[test]
fn soft_reset_writes_the_reset_pattern() {
    let expectations = [I2cTransaction::write(ADDR, vec![CONTROL_1, 0x58])];
    with_rtc(&expectations, |rtc| {
        rtc.soft_reset().unwrap();
    });
}

#[test]
fn generic_register_access() {
    let expectations = [
        I2cTransaction::write_read(ADDR, vec![0x0E], vec![0x05]),
        I2cTransaction::write_read(ADDR, vec![0x10], vec![0x02, 0x1E, 0x07, 0x00]),
        I2cTransaction::write(ADDR, vec![0x0E, 0x06]),
        I2cTransaction::write(ADDR, vec![0x12, 0x02, 0x3C]),
    ];
    with_rtc(&expectations, |rtc| {
        assert_eq!(rtc.read_register(0x0E).unwrap(), 0x05);
        let mut buf = [0u8; 4];
        rtc.read_registers(0x10, &mut buf).unwrap();
        assert_eq!(buf, [0x02, 0x1E, 0x07, 0x00]);
        rtc.write_register(0x0E, 0x06).unwrap();
        rtc.write_registers(0x12, &[0x02, 0x3C]).unwrap();
    });
}

#[test]
fn bursts_past_the_register_map_are_rejected() {
    with_rtc(&[], |rtc| {
        let mut buf = [0u8; 2];
        assert_eq!(
            rtc.read_registers(0x13, &mut buf),
            Err(Error::BurstOutOfRange)
        );
        assert_eq!(
            rtc.write_registers(0x00, &[0u8; 21]),
            Err(Error::BurstOutOfRange)
        );
        assert_eq!(rtc.read_register(0x14), Err(Error::BurstOutOfRange));
    });
}

#[test]
fn bus_errors_are_propagated() {
    let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address);
    let expectations = [
        I2cTransaction::write_read(ADDR, vec![SECONDS], vec![0; 7]).with_error(nack),
        I2cTransaction::write(ADDR, vec![CONTROL_1, 0x58]).with_error(nack),
    ];
    with_rtc(&expectations, |rtc| {
        assert_eq!(rtc.read_time(), Err(Error::I2c(nack)));
        assert_eq!(rtc.soft_reset(), Err(Error::I2c(nack)));
    });
}

#[test]
fn clock_trait() {
    let dt = DateTime::new(2024, 2, 29, 6, 7, 8);
    let expectations = [
        I2cTransaction::write(ADDR, vec![SECONDS, 0x08, 0x07, 0x06, 0x29, 0x00, 0x02, 0x24]),
        I2cTransaction::write_read(
            ADDR,
            vec![SECONDS],
            vec![0x09, 0x07, 0x06, 0x29, 0x00, 0x02, 0x24],
        ),
    ];
    with_rtc(&expectations, |rtc| {
        Clock::adjust(rtc, &dt).unwrap();
        let now = Clock::now(rtc).unwrap();
        assert_eq!(now - dt, pcf8523::Duration::from_seconds(1));
    });
}
