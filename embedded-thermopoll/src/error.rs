#[allow(unused_imports)]
use crate::Acquisition;

/// Acquisition error type.
#[derive(Debug, PartialEq)]
pub enum PollError<E> {
    /// Encapsulates the error type from the underlying sensor driver.
    Other(E),
    /// The device acknowledged the mode write, but the readback did not show the requested mode.
    Unverified,
    /// More candidate addresses were given than the [`Acquisition`] can hold readings for.
    TooManyCandidates,
}

impl<E> From<E> for PollError<E> {
    fn from(other: E) -> Self {
        Self::Other(other)
    }
}
