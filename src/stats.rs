//! Aggregate statistics over a finite numeric sample.
//!
//! Population (not sample) variance throughout. Empty inputs yield 0
//! rather than NaN; callers that need a hard failure validate their
//! sample sizes before simulating.

use std::cmp::Ordering;

pub fn mean(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    sample.iter().sum::<f64>() / sample.len() as f64
}

pub fn min(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    sample.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn max(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    sample.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub fn population_variance(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    let m = mean(sample);
    sample.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / sample.len() as f64
}

pub fn std_dev(sample: &[f64]) -> f64 {
    population_variance(sample).sqrt()
}

pub fn median(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    let sorted = sorted_copy(sample);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 != 0 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Percentile with linear interpolation between the two bracketing
/// order statistics of a sorted copy.
pub fn percentile(sample: &[f64], p: f64) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    let sorted = sorted_copy(sample);
    let index = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;
    if upper >= sorted.len() {
        return sorted[sorted.len() - 1];
    }
    let weight = index - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

/// Standard deviation over mean, as a percentage. Zero-mean samples
/// report 0 rather than a non-finite ratio.
pub fn coefficient_of_variation(sample: &[f64]) -> f64 {
    let m = mean(sample);
    if m == 0.0 {
        return 0.0;
    }
    std_dev(sample) / m * 100.0
}

fn sorted_copy(sample: &[f64]) -> Vec<f64> {
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}
