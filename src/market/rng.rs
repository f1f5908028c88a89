//! Random number sources for the simulation engine
//!
//! Everything stochastic draws through the `RandomSource` trait so tests
//! can replay a fixed sequence instead of sampling the thread RNG.

use rand::Rng;

/// Source of uniform random floats in `[0, 1)`
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Uniform float in `[min, max)`
    fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform integer in `[min, max]`, both bounds inclusive
    fn range_u32(&mut self, min: u32, max: u32) -> u32 {
        min + (self.next_f64() * (max - min + 1) as f64).floor() as u32
    }
}

/// Production source backed by the thread-local RNG
pub struct ThreadRngSource {
    rng: rand::rngs::ThreadRng,
}

impl ThreadRngSource {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ThreadRngSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRngSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen()
    }
}

/// Replays a fixed sequence of draws, cycling once exhausted
///
/// Used by tests that need exact, reproducible generator output.
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Source that returns the same value on every draw
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
