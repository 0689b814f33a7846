use std::{error, fmt};

use crate::ParseError;

/// The error type for UUID generation calls.
///
/// A generation call either fully succeeds with a well-formed UUID or fails with one of these
/// variants; the engine never retries and never produces a partial result.
#[derive(Debug)]
pub enum Error {
    /// A namespace argument was not a valid canonical UUID string.
    Malformed(ParseError),

    /// The OS random source could not supply entropy.
    EntropyUnavailable(rand::Error),

    /// The system clock could not be read.
    ClockUnavailable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "malformed UUID: {}", e),
            Self::EntropyUnavailable(e) => write!(f, "entropy source unavailable: {}", e),
            Self::ClockUnavailable => write!(f, "system clock unavailable"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Malformed(e) => Some(e),
            Self::EntropyUnavailable(e) => Some(e),
            Self::ClockUnavailable => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(src: ParseError) -> Self {
        Self::Malformed(src)
    }
}
