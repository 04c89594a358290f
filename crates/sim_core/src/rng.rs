//! Seedable session randomness.
//!
//! The only nondeterminism in the whole simulation is the capture roll, so
//! it is drawn from a single per-session generator whose seed is recorded.
//! Tests swap in a fixed source through the `UnitRng` trait.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws in `[0, 1)`.
pub trait UnitRng {
    fn next_unit(&mut self) -> f32;
}

/// Deterministic session RNG (seeded ChaCha8).
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this session was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl UnitRng for SessionRng {
    fn next_unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

/// Fixed draw source for tests and scripted scenarios.
#[derive(Debug, Clone, Copy)]
pub struct FixedRng(pub f32);

impl UnitRng for FixedRng {
    fn next_unit(&mut self) -> f32 {
        self.0
    }
}
