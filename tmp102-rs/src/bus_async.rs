use crate::{
    Configuration, ConversionRate, RawTemperature, Temperature, Tmp102Builder, Tmp102Error,
    Tmp102Result, traits_async::InteractAsync,
};
use embedded_hal_async::{
    delay::DelayNs,
    i2c::{I2c, SevenBitAddress},
};

/// All TMP102 devices on one I2C bus, driven asynchronously.
///
/// Takes ownership of an I2C bus (implementing [`I2c`](embedded_hal_async::i2c::I2c) trait)
/// and a timer object implementing the [`DelayNs`](embedded_hal_async::delay::DelayNs) trait.
pub struct Tmp102BusAsync<I, D> {
    pub(crate) i2c: I,
    pub(crate) delay: D,
    pub(crate) settle_ms: u32,
    pub(crate) rate: ConversionRate,
}

impl<I, D> Tmp102BusAsync<I, D> {
    /// Creates a new instance of [`Tmp102BusAsync`] with the default configuration.
    pub fn new(i2c: I, delay: D) -> Self {
        Tmp102Builder::default().build_async(i2c, delay)
    }

    /// Gives back the I2C bus and the timer.
    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }
}

impl<I: I2c<SevenBitAddress>, D: DelayNs> Tmp102BusAsync<I, D> {
    /// Read a 16-bit register, most significant byte first.
    pub async fn read16(&mut self, address: u8, register: u8) -> Tmp102Result<u16, I::Error> {
        let mut buf = [0; 2];
        self.i2c.write_read(address, &[register], &mut buf).await?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Write a 16-bit register, most significant byte first.
    pub async fn write16(
        &mut self,
        address: u8,
        register: u8,
        value: u16,
    ) -> Tmp102Result<(), I::Error> {
        let [msb, lsb] = value.to_be_bytes();
        self.i2c.write(address, &[register, msb, lsb]).await?;
        Ok(())
    }

    /// Probe for a device with an address-only write.
    pub async fn probe(&mut self, address: u8) -> bool {
        self.i2c.write(address, &[]).await.is_ok()
    }

    /// Read the configuration register of the device at `address`.
    pub async fn configuration(&mut self, address: u8) -> Tmp102Result<Configuration, I::Error> {
        let mut cfg = Configuration::new();
        cfg.async_read(self, address).await?;
        Ok(cfg)
    }

    /// Put the device at `address` into continuous 12-bit conversion.
    ///
    /// See [`Tmp102Bus::configure_mode`](crate::Tmp102Bus::configure_mode).
    pub async fn configure_mode(&mut self, address: u8) -> Tmp102Result<Configuration, I::Error> {
        let cfg = self.configuration(address).await?.forced(self.rate);
        cfg.async_write(self, address).await?;
        self.delay.delay_ms(self.settle_ms).await;
        let readback = self.configuration(address).await?;
        if readback.is_full_resolution() {
            Ok(readback)
        } else {
            Err(Tmp102Error::NotLatched(readback))
        }
    }

    /// Read the temperature of the device at `address`.
    pub async fn temperature(&mut self, address: u8) -> Tmp102Result<Temperature, I::Error> {
        let mut raw = RawTemperature::default();
        raw.async_read(self, address).await?;
        Ok(raw.temperature())
    }
}
