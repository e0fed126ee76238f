use crate::Configuration;

#[derive(Debug, PartialEq)]
/// TMP102 errors
pub enum Tmp102Error<E> {
    /// I2C bus errors, including a device that did not acknowledge.
    I2c(E),
    /// The configuration write was acknowledged, but the register read back
    /// without 12-bit resolution. Holds the value read back.
    NotLatched(Configuration),
    /// Write attempted on a read-only register.
    ReadOnly,
}

impl<E> From<E> for Tmp102Error<E> {
    fn from(value: E) -> Self {
        Self::I2c(value)
    }
}
