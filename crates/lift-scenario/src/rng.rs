//! Deterministic RNG for random scenario generation.
//!
//! Batch run `i` of a batch seeded with `seed` draws from
//!
//!   seed XOR (i * MIXING_CONSTANT)
//!
//! so every run is reproducible on its own, whichever thread executes it and
//! however many runs the batch has.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct ScenarioRng(SmallRng);

impl ScenarioRng {
    pub fn new(seed: u64) -> Self {
        ScenarioRng(SmallRng::seed_from_u64(seed))
    }

    /// The RNG for run `index` of a batch seeded with `seed`.
    pub fn for_run(seed: u64, index: u64) -> Self {
        Self::new(seed ^ index.wrapping_mul(MIXING_CONSTANT))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
