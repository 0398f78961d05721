//! Errors returned when validating an alphabet.
//!
//! Error | Description
//! ---|---
//! `EmptyAlphabet` | The alphabet has no characters, so no index can ever be accepted.
//! `NonAsciiAlphabet` | The alphabet contains a byte outside the ASCII range.
//! `AlphabetTooLong` | The alphabet has more characters than a chunk can address.
//!
use std::panic::Location;

/// Alphabet validation error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("The alphabet is empty, {location}")]
    EmptyAlphabet { location: &'static Location<'static> },

    #[error("The alphabet contains the non ASCII byte: {byte:#04x}, {location}")]
    NonAsciiAlphabet {
        byte: u8,
        location: &'static Location<'static>,
    },

    #[error("The alphabet has {len} characters, but at most {max} are supported, {location}")]
    AlphabetTooLong {
        len: usize,
        max: usize,
        location: &'static Location<'static>,
    },
}
