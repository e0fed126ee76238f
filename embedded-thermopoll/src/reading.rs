use core::fmt;

/// Temperature of one device, captured in one acquisition tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Bus address of the device.
    pub address: u8,
    /// Temperature in degrees Celsius.
    pub celsius: f32,
}

impl Reading {
    /// Creates a new [`Reading`].
    pub const fn new(address: u8, celsius: f32) -> Self {
        Self { address, celsius }
    }

    const EMPTY: Reading = Reading::new(0, 0.0);
}

impl fmt::Display for Reading {
    /// Formats as `Addr 0x48: 25.00 C`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Addr 0x{:02X}: {:.2} C", self.address, self.celsius)
    }
}

/// The readings of a single acquisition tick, in candidate-list order.
///
/// Holds at most `N` readings. Devices that were absent or unreadable during the tick
/// simply have no entry.
#[derive(Debug, Clone)]
pub struct ReadingSet<const N: usize> {
    readings: [Reading; N],
    len: usize,
}

impl<const N: usize> Default for ReadingSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ReadingSet<N> {
    /// Creates an empty [`ReadingSet`].
    pub const fn new() -> Self {
        Self {
            readings: [Reading::EMPTY; N],
            len: 0,
        }
    }

    /// Appends a reading. Returns `false` if the set is full.
    pub fn push(&mut self, reading: Reading) -> bool {
        if self.len == N {
            return false;
        }
        self.readings[self.len] = reading;
        self.len += 1;
        true
    }

    /// The readings as a slice.
    pub fn as_slice(&self) -> &[Reading] {
        &self.readings[..self.len]
    }

    /// Number of readings in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if no device produced a reading.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Looks up the reading of the device at `address`.
    pub fn get(&self, address: u8) -> Option<&Reading> {
        self.as_slice().iter().find(|r| r.address == address)
    }

    /// Iterate over the readings.
    pub fn iter(&self) -> core::slice::Iter<'_, Reading> {
        self.as_slice().iter()
    }
}

/// Writes the notification payload for `readings`.
///
/// The payload is a concatenation of `Addr 0x%02X: %.2f C  |  ` fragments, one per reading.
pub fn write_payload<W: fmt::Write>(out: &mut W, readings: &[Reading]) -> fmt::Result {
    for reading in readings {
        write!(out, "{reading}  |  ")?;
    }
    Ok(())
}

impl<const N: usize> fmt::Display for ReadingSet<N> {
    /// Formats the set as its notification payload (see [`write_payload`]).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_payload(f, self.as_slice())
    }
}

impl<'a, const N: usize> IntoIterator for &'a ReadingSet<N> {
    type Item = &'a Reading;
    type IntoIter = core::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
