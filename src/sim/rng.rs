//! Injectable randomness
//!
//! The simulation only ever asks for inclusive integer draws, so tests can
//! substitute a scripted source and replay exact spawn sequences.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

pub trait RandomSource {
    /// Uniform integer in `[min, max]` (both inclusive). Requires `min <= max`.
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;
}

impl RandomSource for Pcg32 {
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        self.random_range(min..=max)
    }
}

/// Seeded PCG generator used by default
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of values, cycling when exhausted.
/// Values are clamped into the requested range.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<i32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if self.values.is_empty() {
            return min;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(min, max)
    }
}
