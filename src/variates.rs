//! Random-variate primitives shared by all engines.
//!
//! Every sampler takes its random source as an explicit parameter so a
//! caller can substitute a seeded generator and replay a run exactly.

use std::f64::consts::PI;

use rand::Rng;

/// One standard-normal draw via the Box-Muller transform.
///
/// The first uniform is re-drawn while it is exactly zero so the
/// logarithm stays finite.
pub fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    let mut u1: f64 = rng.gen();
    while u1 <= 0.0 {
        u1 = rng.gen();
    }
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Poisson draw by the multiplicative threshold method (Knuth).
///
/// Counts uniform draws until their running product falls below
/// `e^-lambda`. Loop length is unbounded, so lambda must stay small.
pub fn poisson<R: Rng>(rng: &mut R, lambda: f64) -> u64 {
    let threshold = (-lambda).exp();
    let mut product: f64 = rng.gen();
    let mut count = 0_u64;
    while product > threshold {
        product *= rng.gen::<f64>();
        count += 1;
    }
    count
}

/// Exponential draw with the given mean, by inverse CDF.
///
/// Re-draws while `1 - u` is not positive, mirroring the Box-Muller
/// guard.
pub fn exponential<R: Rng>(rng: &mut R, mean: f64) -> f64 {
    let mut u: f64 = rng.gen();
    while 1.0 - u <= 0.0 {
        u = rng.gen();
    }
    -mean * (1.0 - u).ln()
}

/// Uniform integer in the inclusive range `[lo, hi]`.
pub fn discrete_uniform<R: Rng>(rng: &mut R, lo: i64, hi: i64) -> i64 {
    debug_assert!(lo <= hi);
    rng.gen_range(lo..=hi)
}

/// Fixed categorical distribution over percentage buckets.
///
/// Entries are `(cumulative threshold percent, outcome)` pairs in
/// ascending threshold order, with the final threshold at 100.
#[derive(Debug, Clone)]
pub struct Categorical<T: Copy> {
    entries: Vec<(u32, T)>,
}

impl<T: Copy> Categorical<T> {
    pub fn new(entries: &[(u32, T)]) -> Self {
        debug_assert!(!entries.is_empty());
        debug_assert!(entries.windows(2).all(|pair| pair[0].0 < pair[1].0));
        debug_assert_eq!(entries.last().map(|entry| entry.0), Some(100));
        Self {
            entries: entries.to_vec(),
        }
    }

    /// Draws an integer in 1..=100 and returns the first outcome whose
    /// threshold is at least the draw.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> T {
        let draw: u32 = rng.gen_range(1..=100);
        for &(threshold, value) in &self.entries {
            if threshold >= draw {
                return value;
            }
        }
        self.entries[self.entries.len() - 1].1
    }
}
