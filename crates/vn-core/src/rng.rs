//! Injectable uniform sources and deterministic RNG wrappers.
//!
//! # Determinism strategy
//!
//! The exposure model only ever needs one operation: "draw uniform in
//! `[0, 1)`".  That is the [`UniformSource`] trait, so tests can hand in a
//! scripted sequence and the engine can hand in a seeded generator.
//!
//! For whole runs, each timestamp index gets its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive indices uniformly across the seed space.  This
//! means:
//!
//! - Timestamps never share RNG state, so they can be evaluated in any order
//!   (or in parallel) and still reproduce the same exposure draws.
//! - Changing the start index of a run does not disturb the draws of the
//!   timestamps that remain.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── UniformSource ─────────────────────────────────────────────────────────────

/// A source of uniform draws in `[0, 1)`.
pub trait UniformSource {
    /// Draw the next value.  Implementations must return values in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

// ── StepRng ───────────────────────────────────────────────────────────────────

/// Per-timestamp deterministic RNG.
///
/// Created fresh for every timestamp a run evaluates.  The type is `!Sync`
/// so each Rayon worker owns the generators for the indices it processes.
pub struct StepRng(SmallRng);

impl StepRng {
    /// Seed deterministically from the run's global seed and a timestamp index.
    pub fn new(global_seed: u64, index: usize) -> Self {
        let seed = global_seed ^ (index as u64).wrapping_mul(MIXING_CONSTANT);
        StepRng(SmallRng::seed_from_u64(seed))
    }
}

impl UniformSource for StepRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG for operations outside the per-timestamp pipeline (fleet
/// census, ad-hoc `mark_exposed` calls).
///
/// Used only in single-threaded contexts; parallel code uses [`StepRng`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl UniformSource for SimRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}
