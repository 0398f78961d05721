//! Alphabets the generators pick characters from.
//!
//! An alphabet is an ordered sequence of ASCII bytes. Duplicated characters
//! are kept as they are, so a caller supplying a skewed alphabet gets a
//! skewed distribution.
//!
//! Two alphabets are provided:
//!
//! - [`SAFE_BYTES`]: `a-z`, `A-Z` and `0-9` (62 characters).
//! - [`LOWER_BYTES`]: `a-z` and `0-9` (36 characters).
use std::fmt;
use std::panic::Location;

use tracing::debug;

use crate::error::Error;
use crate::generator::chunked::MAX_ALPHABET_LEN;

/// Lowercase letters and digits.
pub const LOWER_BYTES: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Lowercase letters, uppercase letters and digits.
pub const SAFE_BYTES: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A validated alphabet.
///
/// It's guaranteed to be non-empty, ASCII only and short enough for every
/// character to be addressable by one chunk of random bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet<'a> {
    bytes: &'a [u8],
}

impl<'a> Alphabet<'a> {
    /// It validates the characters and builds a new alphabet.
    ///
    /// # Errors
    ///
    /// Will return an error if the alphabet is empty, contains non ASCII
    /// characters or is longer than [`MAX_ALPHABET_LEN`].
    #[track_caller]
    pub fn new(chars: &'a str) -> Result<Self, Error> {
        let bytes = chars.as_bytes();

        let result = if bytes.is_empty() {
            Err(Error::EmptyAlphabet {
                location: Location::caller(),
            })
        } else if let Some(&byte) = bytes.iter().find(|b| !b.is_ascii()) {
            Err(Error::NonAsciiAlphabet {
                byte,
                location: Location::caller(),
            })
        } else if bytes.len() > MAX_ALPHABET_LEN {
            Err(Error::AlphabetTooLong {
                len: bytes.len(),
                max: MAX_ALPHABET_LEN,
                location: Location::caller(),
            })
        } else {
            Ok(Self { bytes })
        };

        if let Err(err) = &result {
            debug!("rejected alphabet: {err}");
        }

        result
    }

    /// The [`SAFE_BYTES`] alphabet.
    #[must_use]
    pub const fn safe() -> Alphabet<'static> {
        Alphabet {
            bytes: SAFE_BYTES.as_bytes(),
        }
    }

    /// The [`LOWER_BYTES`] alphabet.
    #[must_use]
    pub const fn lower() -> Alphabet<'static> {
        Alphabet {
            bytes: LOWER_BYTES.as_bytes(),
        }
    }

    /// Number of characters, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`, a valid alphabet has at least one character.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The characters as ASCII bytes, in order.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns `true` if the character belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        u8::try_from(c).is_ok_and(|b| self.bytes.contains(&b))
    }
}

impl fmt::Display for Alphabet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.bytes {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}

impl<'a> TryFrom<&'a str> for Alphabet<'a> {
    type Error = Error;

    #[track_caller]
    fn try_from(chars: &'a str) -> Result<Self, Self::Error> {
        Self::new(chars)
    }
}
