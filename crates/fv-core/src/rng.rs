//! Deterministic particle-phase RNG.
//!
//! Every flow instance starts its particle at a random phase so rebuilt flow
//! sets don't animate in lock-step.  Production seeds from entropy; tests
//! inject a fixed seed so rebuilds are reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of random particle phases in `[0, 1)`.
pub struct PhaseRng(SmallRng);

impl PhaseRng {
    /// Deterministic RNG for tests and replayable runs.
    pub fn seeded(seed: u64) -> Self {
        PhaseRng(SmallRng::seed_from_u64(seed))
    }

    /// OS-entropy-seeded RNG for production.
    pub fn from_entropy() -> Self {
        PhaseRng(SmallRng::from_entropy())
    }

    /// Next uniform phase in `[0, 1)`.
    #[inline]
    pub fn next_phase(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}
