//! Concurrent first use of the process-wide dispatch points
//!
//! Resolution for a dispatch point may race on first use. All racers must
//! get sorted output, and afterwards exactly one variant is published and
//! it never exceeds the probed level.

mod common;

use common::{assert_floats_equal, inject_nans, random_normal, random_values, reference_sorted};
use vqsort_kernels::{sort_f64, sort_u32, DispatchedSort};

#[test]
fn test_concurrent_first_use_u32() {
    std::thread::scope(|scope| {
        for seed in 0..8u64 {
            scope.spawn(move || {
                let mut data: Vec<u32> = random_values(4096, seed);
                let mut expected = data.clone();
                expected.sort_unstable();
                sort_u32(&mut data);
                assert_eq!(data, expected, "seed {seed}");
            });
        }
    });

    let dispatcher = u32::dispatcher();
    let published = dispatcher.resolved().map(|d| d.level());
    assert!(published.is_some());
    assert!(dispatcher.detected_level().satisfies(published.unwrap()));
}

#[test]
fn test_concurrent_first_use_f64_with_nans() {
    std::thread::scope(|scope| {
        for seed in 0..8u64 {
            scope.spawn(move || {
                let data = inject_nans(random_normal(4096, seed), 17);
                let expected = reference_sorted(&data);
                let mut actual = data;
                sort_f64(&mut actual);
                assert_floats_equal(&actual, &expected, &format!("seed {seed}"));
            });
        }
    });

    assert!(f64::dispatcher().resolved().is_some());
}
