//! Chunked bit extraction.
//!
//! One 63-bit draw holds [`CHUNKS_PER_DRAW`] chunks of [`CHUNK_BITS`] bits.
//! Each chunk is a candidate index into the alphabet:
//!
//! ```text
//!  draw (63 bits)
//!  | unused | chunk 9 | ... | chunk 1 | chunk 0 |
//!    3 bits   6 bits          6 bits    6 bits
//! ```
//!
//! Chunks are consumed from the least significant end. A chunk whose value is
//! not a valid index is discarded instead of being reduced modulo the
//! alphabet length, so every character has the same probability even when the
//! alphabet size is not a power of two. A new draw is only taken once all the
//! chunks of the previous one have been consumed.
use rand::RngCore;
use tracing::trace;

use crate::alphabet::Alphabet;
use crate::source::{self, DRAW_BITS};

/// Width of one chunk.
pub const CHUNK_BITS: u32 = 6;

/// All 1-bits, as many as [`CHUNK_BITS`].
pub const CHUNK_MASK: u64 = (1 << CHUNK_BITS) - 1;

/// Number of whole chunks in one draw.
pub const CHUNKS_PER_DRAW: u32 = DRAW_BITS / CHUNK_BITS;

/// Longest alphabet that a chunk can address.
pub const MAX_ALPHABET_LEN: usize = 1 << CHUNK_BITS;

/// Counters collected while extracting chunks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Calls made to the random source.
    pub draws: u64,
    /// Chunks used as an alphabet index.
    pub accepted: u64,
    /// Chunks discarded because they were out of range.
    pub rejected: u64,
}

/// The in-progress draw chunks are extracted from.
pub struct BitCache<'r, R: RngCore + ?Sized> {
    rng: &'r mut R,
    cache: u64,
    remaining: u32,
    stats: Stats,
}

impl<'r, R: RngCore + ?Sized> BitCache<'r, R> {
    /// It takes the first draw from the source.
    pub fn new(rng: &'r mut R) -> Self {
        let cache = source::draw63(&mut *rng);

        Self {
            rng,
            cache,
            remaining: CHUNKS_PER_DRAW,
            stats: Stats {
                draws: 1,
                ..Stats::default()
            },
        }
    }

    /// Extracts the next chunk, drawing again when the cache is exhausted.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_chunk(&mut self) -> usize {
        if self.remaining == 0 {
            self.cache = source::draw63(&mut *self.rng);
            self.remaining = CHUNKS_PER_DRAW;
            self.stats.draws += 1;
        }

        // masked to CHUNK_BITS, it always fits
        let chunk = (self.cache & CHUNK_MASK) as usize;

        self.cache >>= CHUNK_BITS;
        self.remaining -= 1;

        chunk
    }

    /// Returns the next chunk lower than `len`, discarding the others.
    ///
    /// `len` must be in `1..=MAX_ALPHABET_LEN`, otherwise it never returns.
    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!((1..=MAX_ALPHABET_LEN).contains(&len));

        loop {
            let chunk = self.next_chunk();

            if chunk < len {
                self.stats.accepted += 1;
                return chunk;
            }

            self.stats.rejected += 1;
        }
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }
}

/// Generates `n` characters from the alphabet.
pub fn generate<R: RngCore + ?Sized>(rng: &mut R, n: usize, alphabet: &Alphabet<'_>) -> String {
    generate_with_stats(rng, n, alphabet).0
}

/// Like [`generate`], also returning how many draws and chunks it took.
///
/// No draw is made when `n` is zero.
pub fn generate_with_stats<R: RngCore + ?Sized>(rng: &mut R, n: usize, alphabet: &Alphabet<'_>) -> (String, Stats) {
    let mut out = String::with_capacity(n);

    if n == 0 {
        return (out, Stats::default());
    }

    let bytes = alphabet.as_bytes();
    let mut cache = BitCache::new(rng);

    for _ in 0..n {
        let idx = cache.next_index(bytes.len());
        out.push(char::from(bytes[idx]));
    }

    let stats = cache.stats();

    trace!(
        length = n,
        alphabet_len = bytes.len(),
        draws = stats.draws,
        rejected = stats.rejected,
        "generated chunked random string"
    );

    (out, stats)
}
