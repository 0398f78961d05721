//! Random string generators.
//!
//! Function | Alphabet | Algorithm
//! ---|---|---
//! [`safe`] | [`SAFE_BYTES`](crate::alphabet::SAFE_BYTES) | [`chunked`]
//! [`from_alphabet`] | any valid [`Alphabet`] | [`chunked`]
//! [`lower_alphanumeric`] | [`LOWER_BYTES`](crate::alphabet::LOWER_BYTES) | [`chunked`]
//! [`simple`](fn@simple) | [`SAFE_BYTES`](crate::alphabet::SAFE_BYTES) | [`simple`](mod@simple)
//!
//! Every function creates its own source with [`source::fresh`]. The `*_with`
//! variants take the source from the caller instead, which is how tests and
//! reproducible runs get a deterministic output:
//!
//! ```rust
//! use randstr::alphabet::Alphabet;
//! use randstr::{generator, source};
//!
//! let alphabet = Alphabet::new("ACGT").unwrap();
//!
//! let a = generator::from_alphabet_with(&mut source::seeded(1), 12, &alphabet);
//! let b = generator::from_alphabet_with(&mut source::seeded(1), 12, &alphabet);
//!
//! assert_eq!(a, b);
//! assert_eq!(a.len(), 12);
//! ```
pub mod chunked;
pub mod simple;

use rand::RngCore;

use crate::alphabet::Alphabet;
use crate::error::Error;
use crate::source;

/// Returns `n` characters from the safe alphabet (`a-z`, `A-Z`, `0-9`).
#[must_use]
pub fn safe(n: usize) -> String {
    safe_with(&mut source::fresh(), n)
}

/// Like [`safe`], drawing from the given source.
pub fn safe_with<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> String {
    chunked::generate(rng, n, &Alphabet::safe())
}

/// Returns `n` characters from the given alphabet.
///
/// # Errors
///
/// Will return an error if the alphabet is empty, not ASCII or longer than
/// [`chunked::MAX_ALPHABET_LEN`]. The alphabet is validated even when `n` is
/// zero.
#[track_caller]
pub fn from_alphabet(n: usize, alphabet: &str) -> Result<String, Error> {
    let alphabet = Alphabet::new(alphabet)?;

    Ok(from_alphabet_with(&mut source::fresh(), n, &alphabet))
}

/// Like [`from_alphabet`], drawing from the given source.
pub fn from_alphabet_with<R: RngCore + ?Sized>(rng: &mut R, n: usize, alphabet: &Alphabet<'_>) -> String {
    chunked::generate(rng, n, alphabet)
}

/// Returns `n` characters from the lowercase alphabet (`a-z`, `0-9`).
#[must_use]
pub fn lower_alphanumeric(n: usize) -> String {
    lower_alphanumeric_with(&mut source::fresh(), n)
}

/// Like [`lower_alphanumeric`], drawing from the given source.
pub fn lower_alphanumeric_with<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> String {
    chunked::generate(rng, n, &Alphabet::lower())
}

/// Returns `n` characters from the safe alphabet using one draw per character.
#[must_use]
pub fn simple(n: usize) -> String {
    simple_with(&mut source::fresh(), n)
}

/// Like [`simple`](fn@simple), drawing from the given source.
pub fn simple_with<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> String {
    simple::generate(rng, n)
}
