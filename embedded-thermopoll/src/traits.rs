use crate::{PollResult, Reading};

/// Trait describing the sensor operations used by the acquisition loop.
///
/// An implementor owns (or borrows) the shared bus and addresses individual devices
/// by their 7-bit bus address.
pub trait Thermometer {
    /// Error type of the underlying driver.
    type BusError;

    /// Probe `address` with an address-only transaction.
    ///
    /// Returns `true` if the device acknowledged. The answer is only valid for this
    /// moment; devices may be attached or removed at any time.
    fn is_present(&mut self, address: u8) -> bool;

    /// Force the device at `address` into its continuous, full-resolution mode.
    ///
    /// # Returns
    /// `Ok(())` only if the mode was read back from the device after writing it.
    /// [`PollError::Unverified`](crate::PollError::Unverified) if the write was accepted but
    /// did not latch, and [`PollError::Other`](crate::PollError::Other) on bus failures.
    fn configure(&mut self, address: u8) -> PollResult<(), Self::BusError>;

    /// Read the calibrated temperature of the device at `address`, in degrees Celsius.
    fn read_temperature(&mut self, address: u8) -> PollResult<f32, Self::BusError>;
}

/// A consumer of the readings gathered in one acquisition tick.
///
/// Publication targets (a diagnostic text stream, a wireless notification characteristic)
/// implement this trait and are handed to the [`Acquisition`](crate::Acquisition) explicitly.
pub trait Publish {
    /// Error type of the sink.
    type Error;

    /// Publish the readings of one tick.
    ///
    /// Never called with an empty slice. The readings are ordered as the candidate list.
    fn publish(&mut self, readings: &[Reading]) -> Result<(), Self::Error>;
}

impl<P: Publish> Publish for &mut P {
    type Error = P::Error;

    fn publish(&mut self, readings: &[Reading]) -> Result<(), Self::Error> {
        (**self).publish(readings)
    }
}
