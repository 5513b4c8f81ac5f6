//! Error type for `RingBuffer` operations.

#[cfg(feature = "std")]
use std::error;
use core::fmt;

/// Error value returned by `RingBuffer` operations whose precondition fails.
///
/// Nothing is mutated when an operation returns an error.
#[derive(Clone, Copy, Eq, PartialEq)]
pub enum Error {
    /// `enqueue` on a buffer that already holds `capacity` elements.
    CapacityExceeded {
        /// The element that did not fit.
        element: i32,
    },
    /// `dequeue` or `peek` on a buffer holding no elements.
    EmptyContainer,
}

const CAPERROR: &str = "insufficient capacity";
const EMPTYERROR: &str = "container is empty";

impl Error {
    fn message(&self) -> &'static str {
        match *self {
            Error::CapacityExceeded { .. } => CAPERROR,
            Error::EmptyContainer => EMPTYERROR,
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::CapacityExceeded { element } => {
                write!(f, "CapacityExceeded({}): {}", element, CAPERROR)
            }
            Error::EmptyContainer => write!(f, "EmptyContainer: {}", EMPTYERROR),
        }
    }
}
