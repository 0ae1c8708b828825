use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::floored_stddev;

/// Fixed-capacity random sample of historical values.
///
/// Once full, every new value replaces a slot drawn uniformly over the
/// current fill count. There is no `k/n` acceptance step, so recent values
/// are over-represented compared with classic reservoir sampling.
#[derive(Debug, Clone)]
pub struct Reservoir<R = StdRng> {
    elements: Vec<f64>,
    size: usize,
    total: f64,
    rng: R,
}

impl Reservoir<StdRng> {
    /// Reservoir seeded from OS entropy.
    pub fn new(size: usize) -> Self {
        Self::with_rng(size, StdRng::from_entropy())
    }

    /// Reservoir with reproducible replacement choices.
    pub fn seeded(size: usize, seed: u64) -> Self {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Reservoir<R> {
    /// Reservoir drawing replacement slots from `rng`. A zero `size` is bumped to 1.
    pub fn with_rng(size: usize, rng: R) -> Self {
        let size = size.max(1);
        Self {
            elements: Vec::with_capacity(size),
            size,
            total: 0.0,
            rng,
        }
    }

    pub fn add(&mut self, value: f64) {
        if self.elements.len() < self.size {
            self.elements.push(value);
        } else {
            let index = self.rng.gen_range(0..self.elements.len());
            self.total -= self.elements[index];
            self.elements[index] = value;
        }
        self.total += value;
    }

    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Number of values currently held.
    pub fn get_count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() == self.size
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn mean(&self) -> f64 {
        if self.elements.is_empty() {
            0.0
        } else {
            self.total / self.elements.len() as f64
        }
    }

    /// Population standard deviation of the sample, never exactly zero.
    pub fn stddev(&self) -> f64 {
        floored_stddev(&self.elements, self.mean())
    }

    pub fn elements(&self) -> &[f64] {
        &self.elements
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.total = 0.0;
    }
}
