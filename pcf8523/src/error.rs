use crate::DateTimeError;

/// Errors that can occur on methods on [`Pcf8523`](crate::Pcf8523)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The I2C transport failed. The error is passed through unchanged.
    I2c(E),

    /// An invalid DateTime was given.
    InvalidDateTime(DateTimeError),

    /// An alarm field is out of range.
    InvalidAlarm,

    /// The register burst would run past the last register (0x13).
    BurstOutOfRange,
}

impl<E: embedded_hal::i2c::Error> embedded_hal::i2c::Error for Error<E> {
    fn kind(&self) -> embedded_hal::i2c::ErrorKind {
        match self {
            Error::I2c(e) => e.kind(),
            _ => embedded_hal::i2c::ErrorKind::Other,
        }
    }
}
