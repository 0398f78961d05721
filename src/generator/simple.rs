//! Naive generator: one full random integer per character.
//!
//! It's slower than the chunked generator because it never shares a draw
//! between characters, but its behavior is easier to follow. It's kept as a
//! separate code path to compare both in benchmarks.
use rand::Rng;
use tracing::trace;

use crate::alphabet::SAFE_BYTES;

/// Generates `n` characters from [`SAFE_BYTES`].
pub fn generate<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
    let bytes = SAFE_BYTES.as_bytes();

    let out: String = (0..n).map(|_| char::from(bytes[rng.gen_range(0..bytes.len())])).collect();

    trace!(length = n, "generated simple random string");

    out
}
