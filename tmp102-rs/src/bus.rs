use crate::{
    Configuration, ConversionRate, RawTemperature, SETTLE_TIME_MS, Temperature, Tmp102BusAsync,
    Tmp102Error, Tmp102Result, traits::Interact,
};
use embedded_hal::{
    delay::DelayNs,
    i2c::{I2c, SevenBitAddress},
};

/// All TMP102 devices on one I2C bus.
///
/// Takes ownership of an I2C bus (implementing [`I2c`](embedded_hal::i2c::I2c) trait)
/// and a timer object implementing the [`DelayNs`](embedded_hal::delay::DelayNs) trait.
/// The bus is driven by a single owner, so no locking is involved; devices are
/// selected per call by their 7-bit address.
pub struct Tmp102Bus<I, D> {
    pub(crate) i2c: I,
    pub(crate) delay: D,
    pub(crate) settle_ms: u32,
    pub(crate) rate: ConversionRate,
}

/// Builder for creating a [`Tmp102Bus`] or [`Tmp102BusAsync`] with custom configuration.
pub struct Tmp102Builder {
    pub(crate) settle_ms: u32,
    pub(crate) rate: ConversionRate,
}

impl Default for Tmp102Builder {
    fn default() -> Self {
        Tmp102Builder {
            settle_ms: SETTLE_TIME_MS,
            rate: ConversionRate::Hz1,
        }
    }
}

impl Tmp102Builder {
    /// Sets the time waited after writing the configuration register
    /// before it is read back, in milliseconds.
    pub fn with_settle_ms(mut self, settle_ms: u32) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    /// Sets the continuous conversion rate written during configuration.
    pub fn with_conversion_rate(mut self, rate: ConversionRate) -> Self {
        self.rate = rate;
        self
    }

    /// Builds a new [`Tmp102Bus`].
    pub fn build<I, D>(self, i2c: I, delay: D) -> Tmp102Bus<I, D> {
        Tmp102Bus {
            i2c,
            delay,
            settle_ms: self.settle_ms,
            rate: self.rate,
        }
    }

    /// Builds a new [`Tmp102BusAsync`].
    pub fn build_async<I, D>(self, i2c: I, delay: D) -> Tmp102BusAsync<I, D> {
        Tmp102BusAsync {
            i2c,
            delay,
            settle_ms: self.settle_ms,
            rate: self.rate,
        }
    }
}

impl<I, D> Tmp102Bus<I, D> {
    /// Creates a new instance of [`Tmp102Bus`] with the default configuration.
    pub fn new(i2c: I, delay: D) -> Self {
        Tmp102Builder::default().build(i2c, delay)
    }

    /// Gives back the I2C bus and the timer.
    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }
}

impl<I: I2c<SevenBitAddress>, D: DelayNs> Tmp102Bus<I, D> {
    /// Read a 16-bit register.
    ///
    /// The register pointer is written, then two bytes are read after a repeated
    /// start. The first byte is the most significant.
    pub fn read16(&mut self, address: u8, register: u8) -> Tmp102Result<u16, I::Error> {
        let mut buf = [0; 2];
        self.i2c.write_read(address, &[register], &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Write a 16-bit register, most significant byte first.
    pub fn write16(&mut self, address: u8, register: u8, value: u16) -> Tmp102Result<(), I::Error> {
        let [msb, lsb] = value.to_be_bytes();
        self.i2c.write(address, &[register, msb, lsb])?;
        Ok(())
    }

    /// Probe for a device with an address-only write.
    ///
    /// Returns `true` if the address was acknowledged.
    pub fn probe(&mut self, address: u8) -> bool {
        self.i2c.write(address, &[]).is_ok()
    }

    /// Read the configuration register of the device at `address`.
    pub fn configuration(&mut self, address: u8) -> Tmp102Result<Configuration, I::Error> {
        let mut cfg = Configuration::new();
        cfg.read(self, address)?;
        Ok(cfg)
    }

    /// Put the device at `address` into continuous 12-bit conversion.
    ///
    /// The configuration register is read, the resolution, shutdown and conversion
    /// rate fields are forced, and the result is written back. After the settling
    /// time the register is read again.
    ///
    /// # Returns
    /// The configuration read back from the device, if it reports 12-bit resolution.
    /// [`Tmp102Error::NotLatched`] otherwise. Nothing is written if the first read fails.
    pub fn configure_mode(&mut self, address: u8) -> Tmp102Result<Configuration, I::Error> {
        let cfg = self.configuration(address)?.forced(self.rate);
        cfg.write(self, address)?;
        self.delay.delay_ms(self.settle_ms);
        let readback = self.configuration(address)?;
        if readback.is_full_resolution() {
            Ok(readback)
        } else {
            Err(Tmp102Error::NotLatched(readback))
        }
    }

    /// Read the temperature of the device at `address`.
    pub fn temperature(&mut self, address: u8) -> Tmp102Result<Temperature, I::Error> {
        let mut raw = RawTemperature::default();
        raw.read(self, address)?;
        Ok(raw.temperature())
    }
}
