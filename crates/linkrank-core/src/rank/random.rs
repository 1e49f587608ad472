//! Injectable randomness for the sampling estimator

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of random draws for the random-surfer walk.
///
/// Abstracted behind a trait so tests can substitute a seeded or scripted
/// source for the process-local RNG.
pub trait RandomSource {
    /// Uniform pick of an index in `0..n`. `n` must be non-zero.
    fn pick_uniform(&mut self, n: usize) -> usize;

    /// Weighted pick of an index, proportional to `weights`.
    ///
    /// Weights must be non-negative with a positive sum.
    fn pick_weighted(&mut self, weights: &[f64]) -> usize;
}

/// [`RandomSource`] backed by any `rand` RNG.
#[derive(Debug)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Source seeded from system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_uniform(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }

    fn pick_weighted(&mut self, weights: &[f64]) -> usize {
        // Cumulative-distribution inversion: one uniform draw in [0, total),
        // then a linear scan for its bucket.
        let total: f64 = weights.iter().sum();
        debug_assert!(total > 0.0, "weights must have a positive sum");

        let mut draw = self.rng.gen_range(0.0..total);
        for (index, weight) in weights.iter().enumerate() {
            if draw < *weight {
                return index;
            }
            draw -= weight;
        }
        // Rounding can push the draw past the last bucket boundary.
        weights.len() - 1
    }
}
