use crate::{
    Configuration, RawTemperature, Tmp102BusAsync, Tmp102Error, Tmp102Result,
    traits::Addressing, traits_async::InteractAsync,
};
use embedded_hal_async::{
    delay::DelayNs,
    i2c::{I2c, SevenBitAddress},
};

impl InteractAsync for Configuration {
    async fn async_read<I: I2c<SevenBitAddress>, D: DelayNs>(
        &mut self,
        dev: &mut Tmp102BusAsync<I, D>,
        address: u8,
    ) -> Tmp102Result<(), I::Error> {
        *self = Configuration::from(dev.read16(address, Self::POINTER).await?);
        Ok(())
    }

    async fn async_write<I: I2c<SevenBitAddress>, D: DelayNs>(
        &self,
        dev: &mut Tmp102BusAsync<I, D>,
        address: u8,
    ) -> Tmp102Result<(), I::Error> {
        dev.write16(address, Self::POINTER, self.into_bits()).await
    }
}

impl InteractAsync for RawTemperature {
    async fn async_read<I: I2c<SevenBitAddress>, D: DelayNs>(
        &mut self,
        dev: &mut Tmp102BusAsync<I, D>,
        address: u8,
    ) -> Tmp102Result<(), I::Error> {
        self.0 = dev.read16(address, Self::POINTER).await?;
        Ok(())
    }

    async fn async_write<I: I2c<SevenBitAddress>, D: DelayNs>(
        &self,
        _dev: &mut Tmp102BusAsync<I, D>,
        _address: u8,
    ) -> Tmp102Result<(), I::Error> {
        Err(Tmp102Error::ReadOnly)
    }
}
