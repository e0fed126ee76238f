#![no_std]
#![deny(missing_docs)]
//! # embedded-thermopoll
//! A no-std acquisition loop for addressed temperature sensors sharing one bus.
//!
//! The [Thermometer] trait defines the three operations the loop needs from a sensor driver:
//! probing an address for presence, forcing a device into its measurement mode, and reading a
//! calibrated temperature. An asynchronous version of the trait, [ThermometerAsync], is provided
//! for use in async environments.
//!
//! [Acquisition] sweeps a fixed, ordered list of candidate addresses once per tick, collects the
//! readings of every device that answered into a [ReadingSet], and hands non-empty sets to a
//! [Publish] sink. Devices that are absent or fail to read are left out of the tick; nothing
//! halts the loop.

mod acquisition;
mod acquisition_async;
mod error;
mod reading;
mod traits;
mod traits_async;

pub use acquisition::{Acquisition, DeviceState, StartupReport};
pub use error::PollError;
pub use reading::{Reading, ReadingSet, write_payload};
pub use traits::{Publish, Thermometer};
pub use traits_async::ThermometerAsync;

/// Result of acquisition operations.
pub type PollResult<T, E> = Result<T, PollError<E>>;

/// Period of one acquisition tick, in milliseconds (1 Hz).
pub const TICK_PERIOD_MS: u32 = 1000;
