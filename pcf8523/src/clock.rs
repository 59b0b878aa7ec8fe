use crate::DateTime;

/// A source of wall clock time that can be set.
///
/// Implemented by [`Pcf8523`](crate::Pcf8523) on a blocking bus and by
/// [`SoftwareClock`](crate::software::SoftwareClock), so application code can fall back to
/// the software clock when no RTC is fitted.
pub trait Clock {
    /// Error returned when the clock cannot be read or set.
    type Error;

    /// Return the current date and time.
    fn now(&mut self) -> Result<DateTime, Self::Error>;

    /// Set the current date and time.
    fn adjust(&mut self, dt: &DateTime) -> Result<(), Self::Error>;
}
