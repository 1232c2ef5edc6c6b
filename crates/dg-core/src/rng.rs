//! Deterministic per-obstacle and layout RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each moving obstacle gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR ((index + 1) * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive indices uniformly across the seed space.  The
//! `+ 1` keeps obstacle 0 off the layout stream, which uses `global_seed`
//! unmixed.  Consequences:
//!
//! - Obstacles never share RNG state, so the order in which their moves are
//!   computed does not matter (sequential and parallel runs agree).
//! - Replaying the same seed against the same initial layout reproduces every
//!   draw, and therefore every agent position.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── ObstacleRng ───────────────────────────────────────────────────────────────

/// Per-obstacle deterministic RNG.
///
/// Create one per moving obstacle at simulation init and keep it in a `Vec`
/// parallel to the obstacle positions.
pub struct ObstacleRng(SmallRng);

impl ObstacleRng {
    /// Seed deterministically from the run's global seed and an obstacle index.
    pub fn new(global_seed: u64, index: usize) -> Self {
        let mix = (index as u64).wrapping_add(1).wrapping_mul(MIXING_CONSTANT);
        ObstacleRng(SmallRng::seed_from_u64(global_seed ^ mix))
    }

    /// One RNG per obstacle, indices `0..count`.
    pub fn for_obstacles(global_seed: u64, count: usize) -> Vec<ObstacleRng> {
        (0..count).map(|i| ObstacleRng::new(global_seed, i)).collect()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for one-off global operations (layout generation).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }

    /// Remove and return `amount` elements sampled without replacement from
    /// `pool`.  The remaining elements stay in `pool` (order unspecified).
    ///
    /// Returns `None` (leaving `pool` untouched) if `amount > pool.len()`.
    pub fn take_sample<T>(&mut self, pool: &mut Vec<T>, amount: usize) -> Option<Vec<T>> {
        if amount > pool.len() {
            return None;
        }
        self.shuffle(pool);
        let rest = pool.split_off(amount);
        Some(std::mem::replace(pool, rest))
    }
}
