use crate::{Tmp102Bus, Tmp102Result};
use embedded_hal::{
    delay::DelayNs,
    i2c::{I2c, SevenBitAddress},
};

/// Register pointers of the TMP102.
pub trait Addressing {
    /// Pointer byte selecting the register.
    const POINTER: u8;
}

/// Trait for reading and writing TMP102 registers.
pub trait Interact: Addressing {
    /// Read the register value from the device at `address`.
    fn read<I: I2c<SevenBitAddress>, D: DelayNs>(
        &mut self,
        dev: &mut Tmp102Bus<I, D>,
        address: u8,
    ) -> Tmp102Result<(), I::Error>;
    /// Write the register value to the device at `address`.
    fn write<I: I2c<SevenBitAddress>, D: DelayNs>(
        &self,
        dev: &mut Tmp102Bus<I, D>,
        address: u8,
    ) -> Tmp102Result<(), I::Error>;
}
