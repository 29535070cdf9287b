//! Shared utilities for integration tests

use std::cmp::Ordering;

use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

/// Slice lengths around the lane counts of each vector tier
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,    // Empty
        1,    // Single element
        2,    // Smallest sortable
        3,    // Odd remainder
        4,    // SSE lane count for 32-bit
        5,    // SSE + 1
        7,    // AVX2 - 1
        8,    // AVX2 lane count for 32-bit
        9,    // AVX2 + 1
        15,   // AVX-512 - 1
        16,   // AVX-512 lane count for 32-bit
        17,   // AVX-512 + 1
        31,   // Prime
        32,   // Two AVX-512 vectors
        63,   // Almost cache line of u64
        64,   // Cache line of u64
        100,  // Round number
        127,  // Mersenne prime
        128,  // Power of 2
        1000, // Large enough to hit every partition path
    ]
}

/// Reproducible full-range values of any supported element type
pub fn random_values<T>(len: usize, seed: u64) -> Vec<T>
where
    Standard: Distribution<T>,
{
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}

/// Reproducible normal samples, the typical float workload
pub fn random_normal(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    (0..len).map(|_| normal.sample(&mut rng)).collect()
}

/// Overwrite every `stride`-th element with a NaN
pub fn inject_nans(mut data: Vec<f64>, stride: usize) -> Vec<f64> {
    for i in (0..data.len()).step_by(stride.max(1)) {
        data[i] = f64::NAN;
    }
    data
}

/// Independent reference order: NaNs after every value, sign and payload
/// ignored
pub fn reference_cmp(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap(),
    }
}

/// Sort a copy with the reference order
pub fn reference_sorted(data: &[f64]) -> Vec<f64> {
    let mut expected = data.to_vec();
    expected.sort_by(reference_cmp);
    expected
}

/// Assert float slices match element for element, treating any two NaNs as
/// equal
pub fn assert_floats_equal(actual: &[f64], expected: &[f64], context: &str) {
    assert_eq!(actual.len(), expected.len(), "length mismatch for {context}");
    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let matches = (a.is_nan() && e.is_nan()) || a == e;
        assert!(matches, "{context}: index {i}: got {a}, expected {e}");
    }
}
