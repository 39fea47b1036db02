//! The single source of randomness for generation and rendering.
//!
//! Every draw in the pipeline goes through a [`SeededRng`] that is passed
//! explicitly, so a given seed reproduces the same graph and the same text.

use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha12Rng;
use std::ops::RangeInclusive;

/// SplitMix64 increment (the 64-bit golden ratio).
const STREAM_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// A deterministic pseudo-random generator parameterised by a 64-bit seed.
///
/// Backed by ChaCha12 named explicitly, so the stream does not change when
/// `rand` repoints `StdRng` or when the host platform changes.
/// Not cryptographically meaningful here; it only has to be cheap and stable.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: ChaCha12Rng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha12Rng::seed_from_u64(seed),
        }
    }

    /// Creates an independent generator for `stream`, derived from `seed`.
    ///
    /// Used to give each backend renderer its own generator so renders can
    /// run in parallel and stay reproducible.
    pub fn derive(seed: u64, stream: u64) -> Self {
        Self::new(splitmix64(
            seed ^ stream.wrapping_add(1).wrapping_mul(STREAM_SPACING),
        ))
    }

    /// Uniform integer in the inclusive `range`. The range must not be empty.
    pub fn int_in(&mut self, range: RangeInclusive<usize>) -> usize {
        self.inner.random_range(range)
    }

    /// Uniform real in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

#[inline]
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(STREAM_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}
