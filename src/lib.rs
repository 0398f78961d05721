//! Simple random strings.
//!
//! Don't use them for anything where security is important: the sources are
//! pseudo-random generators, and the strings are meant for fixtures,
//! temporary identifiers and filler data.
//!
//! ```rust
//! use randstr::{from_alphabet, lower_alphanumeric, safe, SAFE_BYTES};
//!
//! let id = safe(12);
//! assert_eq!(id.len(), 12);
//! assert!(id.chars().all(|c| SAFE_BYTES.contains(c)));
//!
//! assert_eq!(lower_alphanumeric(0), "");
//! assert_eq!(from_alphabet(3, "x").unwrap(), "xxx");
//! assert!(from_alphabet(3, "").is_err());
//! ```
//!
//! # Modules
//!
//! - [`generator`]: the chunked and the naive generators.
//! - [`alphabet`]: the built-in alphabets and the validated [`Alphabet`](alphabet::Alphabet) type.
//! - [`source`]: where the random bits come from.
//! - [`error`]: alphabet validation errors.
//! - [`console`] and [`bootstrap`]: the `randstr` command line program.
pub mod alphabet;
pub mod bootstrap;
pub mod console;
pub mod error;
pub mod generator;
pub mod source;

pub use alphabet::{LOWER_BYTES, SAFE_BYTES};
pub use error::Error;
pub use generator::{from_alphabet, lower_alphanumeric, safe, simple};
