#![allow(async_fn_in_trait)]
use crate::PollResult;

/// Trait describing the sensor operations used by the acquisition loop, asynchronously.
///
/// See [`Thermometer`](crate::Thermometer) for the semantics of each operation.
pub trait ThermometerAsync {
    /// Error type of the underlying driver.
    type BusError;

    /// Probe `address` with an address-only transaction.
    async fn is_present(&mut self, address: u8) -> bool;

    /// Force the device at `address` into its continuous, full-resolution mode and verify it.
    async fn configure(&mut self, address: u8) -> PollResult<(), Self::BusError>;

    /// Read the calibrated temperature of the device at `address`, in degrees Celsius.
    async fn read_temperature(&mut self, address: u8) -> PollResult<f32, Self::BusError>;
}
