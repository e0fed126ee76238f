use crate::{Tmp102Bus, Tmp102Error, Tmp102Result, traits::Addressing, traits::Interact};
use bitfield_struct::bitfield;
use embedded_hal::{
    delay::DelayNs,
    i2c::{I2c, SevenBitAddress},
};
use fixed::types::I12F4;

/// Pointer of the read-only temperature register.
pub const TEMPERATURE_PTR: u8 = 0x00;
/// Pointer of the configuration register.
pub const CONFIG_PTR: u8 = 0x01;

/// Bits of the resolution field (R1:R0) in the configuration register.
pub const RES_MASK: u16 = 0x6000;
/// Shutdown bit (SD) of the configuration register.
pub const SHDN_MASK: u16 = 0x0100;
/// Bits of the conversion rate field (CR1:CR0) in the configuration register.
pub const RATE_MASK: u16 = 0x00c0;
/// Conversion rate field encoding for one conversion per second.
pub const RATE_1SPS: u16 = 0x0040;

/// Temperature in degrees Celsius, in the signed 12.4 fixed-point format
/// of the temperature register.
pub type Temperature = I12F4;

/// Converter resolution (R1:R0).
///
/// The TMP102 always converts at 12 bits; register-compatible parts
/// may accept other settings.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// 9 bits, 0.5 °C.
    Bits9 = 0b00,
    /// 10 bits, 0.25 °C.
    Bits10 = 0b01,
    /// 11 bits, 0.125 °C.
    Bits11 = 0b10,
    /// 12 bits, 0.0625 °C.
    Bits12 = 0b11,
}

impl Resolution {
    const fn into_bits(self) -> u16 {
        self as _
    }

    const fn from_bits(value: u16) -> Self {
        match value & 0b11 {
            0b00 => Self::Bits9,
            0b01 => Self::Bits10,
            0b10 => Self::Bits11,
            _ => Self::Bits12,
        }
    }
}

/// Continuous conversion rate (CR1:CR0).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionRate {
    /// One conversion every four seconds.
    QuarterHz = 0b00,
    /// One conversion per second.
    #[default]
    Hz1 = 0b01,
    /// Four conversions per second (power-on default).
    Hz4 = 0b10,
    /// Eight conversions per second.
    Hz8 = 0b11,
}

impl ConversionRate {
    const fn into_bits(self) -> u16 {
        self as _
    }

    const fn from_bits(value: u16) -> Self {
        match value & 0b11 {
            0b00 => Self::QuarterHz,
            0b01 => Self::Hz1,
            0b10 => Self::Hz4,
            _ => Self::Hz8,
        }
    }
}

#[bitfield(u16)]
#[derive(PartialEq, Eq)]
/// # Configuration register
///
/// The 16-bit configuration register, as read most-significant byte first.
/// It selects the converter resolution, the power state and the conversion
/// rate, and configures the thermostat comparator.
///
/// Each setter only touches its own bits; everything else read from the device
/// is written back unchanged. After power-on the register reads `0x60A0`.
pub struct Configuration {
    #[bits(4)]
    __: u8,
    /// The EM bit selects the 13-bit extended temperature format.
    pub extended_mode: bool,
    /// The AL bit reflects the comparator state. Read-only on the device.
    pub alert: bool,
    /// Rate of continuous conversions.
    #[bits(2)]
    pub conversion_rate: ConversionRate,
    /// When SD is set, the device finishes the current conversion and
    /// powers down. Cleared for continuous conversion.
    pub shutdown: bool,
    /// The TM bit selects interrupt mode instead of comparator mode.
    pub thermostat_mode: bool,
    /// The POL bit selects an active-high ALERT pin.
    pub polarity: bool,
    /// Consecutive faults required before ALERT is raised.
    #[bits(2)]
    pub fault_queue: u8,
    /// Converter resolution.
    #[bits(2)]
    pub resolution: Resolution,
    /// Writing OS while shut down starts a single conversion.
    pub one_shot: bool,
}

impl Configuration {
    /// This configuration with the fields forced for continuous 12-bit conversion
    /// at `rate`. All other fields are kept.
    pub const fn forced(self, rate: ConversionRate) -> Self {
        self.with_resolution(Resolution::Bits12)
            .with_shutdown(false)
            .with_conversion_rate(rate)
    }

    /// `true` if the resolution field holds the 12-bit encoding.
    pub const fn is_full_resolution(&self) -> bool {
        self.into_bits() & RES_MASK == RES_MASK
    }
}

/// Force `value` to 12-bit resolution, continuous conversion at one sample per second,
/// preserving every other bit.
pub const fn force12(value: u16) -> u16 {
    Configuration::from_bits(value)
        .forced(ConversionRate::Hz1)
        .into_bits()
}

/// Decode a raw temperature register word.
///
/// The upper 12 bits hold a two's-complement sample in units of 0.0625 °C;
/// the low 4 bits are padding.
pub const fn decode(word: u16) -> Temperature {
    let mut raw = (word as i16) >> 4;
    if raw & 0x0800 != 0 {
        raw |= !0x0fff;
    }
    Temperature::from_bits(raw)
}

/// Raw contents of the temperature register.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RawTemperature(pub u16);

impl RawTemperature {
    /// The decoded temperature.
    pub const fn temperature(&self) -> Temperature {
        decode(self.0)
    }

    /// The decoded temperature in degrees Celsius.
    pub fn celsius(&self) -> f32 {
        self.temperature().to_num()
    }
}

impl Addressing for Configuration {
    const POINTER: u8 = CONFIG_PTR;
}

impl Interact for Configuration {
    fn read<I: I2c<SevenBitAddress>, D: DelayNs>(
        &mut self,
        dev: &mut Tmp102Bus<I, D>,
        address: u8,
    ) -> Tmp102Result<(), I::Error> {
        *self = Configuration::from(dev.read16(address, Self::POINTER)?);
        Ok(())
    }

    fn write<I: I2c<SevenBitAddress>, D: DelayNs>(
        &self,
        dev: &mut Tmp102Bus<I, D>,
        address: u8,
    ) -> Tmp102Result<(), I::Error> {
        dev.write16(address, Self::POINTER, self.into_bits())
    }
}

impl Addressing for RawTemperature {
    const POINTER: u8 = TEMPERATURE_PTR;
}

impl Interact for RawTemperature {
    fn read<I: I2c<SevenBitAddress>, D: DelayNs>(
        &mut self,
        dev: &mut Tmp102Bus<I, D>,
        address: u8,
    ) -> Tmp102Result<(), I::Error> {
        self.0 = dev.read16(address, Self::POINTER)?;
        Ok(())
    }

    fn write<I: I2c<SevenBitAddress>, D: DelayNs>(
        &self,
        _dev: &mut Tmp102Bus<I, D>,
        _address: u8,
    ) -> Tmp102Result<(), I::Error> {
        Err(Tmp102Error::ReadOnly)
    }
}
