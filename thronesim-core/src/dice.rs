//! Deterministic random draws.
//!
//! Every random decision in the simulation flows through the [`Dice`] trait:
//! one inclusive integer draw and one unit-interval draw. Systems never touch
//! a platform RNG directly, so the same seed always replays the same run and
//! tests can script every outcome.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The two-primitive randomness source the simulation runs on.
pub trait Dice {
    /// Uniform integer in `lo..=hi`. Callers keep `lo <= hi`.
    fn draw_int(&mut self, lo: i64, hi: i64) -> i64;

    /// Uniform float in `[0.0, 1.0)`.
    fn draw_unit(&mut self) -> f64;

    /// Bernoulli trial: true with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.draw_unit() < p
    }
}

/// Seed-reproducible dice backed by [`StdRng`].
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Dice for SeededDice {
    fn draw_int(&mut self, lo: i64, hi: i64) -> i64 {
        self.rng.gen_range(lo..=hi)
    }

    fn draw_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
