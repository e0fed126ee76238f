#![no_std]
#![deny(missing_docs)]

/*! # TMP102
 *
 * A no-std driver for Texas Instruments TMP102 (and register-compatible TMP112)
 * digital temperature sensors.
 *
 * A single [`Tmp102Bus`] drives every sensor on a shared I2C bus; each operation
 * takes the 7-bit address of the device it targets. The driver implements the
 * [`Thermometer`] and [`ThermometerAsync`] traits from `embedded-thermopoll`, so
 * it plugs straight into an [`Acquisition`](embedded_thermopoll::Acquisition) cycle.
 */

pub use embedded_thermopoll::{PollError, PollResult, Thermometer, ThermometerAsync};
mod bus;
mod bus_async;
mod error;
mod registers;
mod registers_async;
mod thermometer;
mod thermometer_async;
mod traits;
mod traits_async;

pub use bus::{Tmp102Builder, Tmp102Bus};
pub use bus_async::Tmp102BusAsync;
pub use error::Tmp102Error;
pub use registers::{
    CONFIG_PTR, Configuration, ConversionRate, RATE_1SPS, RATE_MASK, RES_MASK, RawTemperature,
    Resolution, SHDN_MASK, TEMPERATURE_PTR, Temperature, decode, force12,
};
pub use traits::{Addressing, Interact};
pub use traits_async::InteractAsync;

/// Results of TMP102-specific function calls.
pub type Tmp102Result<T, E> = Result<T, Tmp102Error<E>>;

/// Time allowed for the first full-resolution conversion after the
/// configuration register is written, in milliseconds.
pub const SETTLE_TIME_MS: u32 = 150;
