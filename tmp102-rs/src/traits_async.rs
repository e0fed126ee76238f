#![allow(async_fn_in_trait)]
use crate::{Tmp102BusAsync, Tmp102Result, traits::Addressing};
use embedded_hal_async::{
    delay::DelayNs,
    i2c::{I2c, SevenBitAddress},
};

/// Trait for reading and writing TMP102 registers asynchronously.
pub trait InteractAsync: Addressing {
    /// Read the register value from the device at `address` asynchronously.
    async fn async_read<I: I2c<SevenBitAddress>, D: DelayNs>(
        &mut self,
        dev: &mut Tmp102BusAsync<I, D>,
        address: u8,
    ) -> Tmp102Result<(), I::Error>;
    /// Write the register value to the device at `address` asynchronously.
    async fn async_write<I: I2c<SevenBitAddress>, D: DelayNs>(
        &self,
        dev: &mut Tmp102BusAsync<I, D>,
        address: u8,
    ) -> Tmp102Result<(), I::Error>;
}
