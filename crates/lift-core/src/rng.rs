//! Deterministic simulation-level RNG wrapper.
//!
//! The core simulation is fully deterministic; the only randomness in the
//! system is bootstrap-time initial lift placement.  `SimRng` wraps a seeded
//! `SmallRng` so that the same seed always produces the same fleet layout
//! and therefore the same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG for bootstrap operations (initial placement,
/// synthetic data-set generation).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
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
}
