//! Sources of pseudo-random bits for the generators.
//!
//! There is no process-wide generator. Every convenience function creates a
//! local source with [`fresh`], so calls never share state and can run on any
//! thread. Callers that need reproducible output inject their own source,
//! usually one built with [`seeded`].
//!
//! > **NOTICE**: none of these sources is suitable for secrets. The strings
//! they produce are meant for fixtures and temporary identifiers.
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Seed for a deterministic source.
pub type Seed = u64;

/// Number of usable bits in one draw. The top bit of the 64-bit output is
/// discarded.
pub const DRAW_BITS: u32 = 63;

/// A new source seeded from the operating system entropy.
#[must_use]
pub fn fresh() -> StdRng {
    StdRng::from_entropy()
}

/// A new source that always produces the same sequence for the same seed.
#[must_use]
pub fn seeded(seed: Seed) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a non-negative 63-bit value.
pub fn draw63<R: RngCore + ?Sized>(rng: &mut R) -> u64 {
    rng.next_u64() >> (u64::BITS - DRAW_BITS)
}
