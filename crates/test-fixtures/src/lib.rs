//! Seeded synthetic streams shared by tests and benchmarks across the workspace.
//!
//! Every generator takes an explicit seed so a failing scenario replays exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `len` draws from N(mean, std_dev²) via Box-Muller.
pub fn gaussian_stream(mean: f64, std_dev: f64, len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| mean + std_dev * standard_normal(&mut rng)).collect()
}

/// `len_each` draws from N(before, 1) followed by `len_each` draws from N(after, 1).
pub fn abrupt_shift(before: f64, after: f64, len_each: usize, seed: u64) -> Vec<f64> {
    let mut stream = gaussian_stream(before, 1.0, len_each, seed);
    stream.extend(gaussian_stream(after, 1.0, len_each, seed.wrapping_add(1)));
    stream
}

/// `len` uniform draws from `[low, high)`.
pub fn uniform_stream(low: f64, high: f64, len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(low..high)).collect()
}

/// `len` 0/1 outcomes, each 1 with probability `p`.
pub fn bernoulli_stream(p: f64, len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| if rng.gen_bool(p) { 1.0 } else { 0.0 })
        .collect()
}

/// Error stream whose error rate jumps from `p_before` to `p_after` halfway.
pub fn error_rate_shift(p_before: f64, p_after: f64, len_each: usize, seed: u64) -> Vec<f64> {
    let mut stream = bernoulli_stream(p_before, len_each, seed);
    stream.extend(bernoulli_stream(p_after, len_each, seed.wrapping_add(1)));
    stream
}

fn standard_normal(rng: &mut StdRng) -> f64 {
    let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
    let u2: f64 = rng.gen_range(0.0..1.0);
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}
