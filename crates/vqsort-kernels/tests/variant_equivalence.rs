//! Equivalence tests across dispatch tiers
//!
//! Every variant of a kernel family sorts the same total order, so any tier
//! the running hardware supports must produce output identical to the
//! portable baseline and to an independent reference sort.

mod common;

use common::{
    assert_floats_equal, edge_case_lengths, inject_nans, random_normal, random_values,
    reference_sorted,
};
use vqsort_core::{
    detected_level, CapabilityLevel, KernelDispatcher, KernelKey, KernelName, PinnedProbe,
    TypeTag, VariantRegistry,
};
use vqsort_kernels::{sort_f64, sort_i16, sort_u16, sort_u32, variants, DispatchedSort};

/// Float datasets covering the orderings a partition-based sort gets wrong
/// first
fn f64_datasets() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("empty", vec![]),
        ("single", vec![42.0]),
        ("sorted", (0..100).map(|x| x as f64).collect()),
        ("reverse", (0..100).rev().map(|x| x as f64).collect()),
        ("constant", vec![1.5; 64]),
        ("random_normal", random_normal(1000, 42)),
        ("nan_every_fifth", inject_nans(random_normal(256, 7), 5)),
        ("all_nans", vec![f64::NAN; 32]),
        (
            "special_values",
            vec![
                0.0,
                -0.0,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::MAX,
                f64::MIN,
                f64::MIN_POSITIVE,
                -f64::MIN_POSITIVE,
                f64::NAN,
                -f64::NAN,
            ],
        ),
    ]
}

#[test]
fn test_every_supported_tier_matches_reference_f64() {
    let dispatcher = f64::dispatcher();
    let detected = dispatcher.detected_level();

    for (name, data) in f64_datasets() {
        let expected = reference_sorted(&data);
        for descriptor in dispatcher.candidates() {
            if !detected.satisfies(descriptor.level()) {
                continue;
            }
            let mut actual = data.clone();
            // Safety: the probe satisfies this descriptor's tier.
            unsafe { descriptor.invoke(&mut actual) };
            assert_floats_equal(
                &actual,
                &expected,
                &format!("{name} via {}", descriptor.name()),
            );
        }
    }
}

#[test]
fn test_every_supported_tier_matches_reference_u32() {
    let dispatcher = u32::dispatcher();
    let detected = dispatcher.detected_level();
    let data: Vec<u32> = random_values(2000, 11);
    let mut expected = data.clone();
    expected.sort_unstable();

    for descriptor in dispatcher.candidates() {
        if !detected.satisfies(descriptor.level()) {
            continue;
        }
        let mut actual = data.clone();
        // Safety: the probe satisfies this descriptor's tier.
        unsafe { descriptor.invoke(&mut actual) };
        assert_eq!(actual, expected, "u32 via {}", descriptor.name());
    }
}

/// Wide-family u64 registry around an injected probe, for forcing levels
fn forced_dispatcher(level: CapabilityLevel) -> KernelDispatcher<u64, PinnedProbe> {
    let mut registry = VariantRegistry::new(KernelKey::new(KernelName::Sort, TypeTag::U64));
    // Safety: invocation below only ever pins levels the hardware satisfies.
    unsafe {
        registry.register(
            CapabilityLevel::Baseline,
            "baseline",
            variants::sort_baseline::<u64>,
        );
        #[cfg(target_arch = "x86_64")]
        {
            registry.register(
                CapabilityLevel::Sse42,
                "sse4.2",
                variants::x86_64::sort_sse42::<u64>,
            );
            registry.register(
                CapabilityLevel::Avx2,
                "avx2",
                variants::x86_64::sort_avx2::<u64>,
            );
            registry.register(
                CapabilityLevel::Avx512,
                "avx512",
                variants::x86_64::sort_avx512::<u64>,
            );
        }
    }
    KernelDispatcher::with_probe(registry, PinnedProbe(level))
}

#[test]
fn test_forced_levels_agree() {
    let hardware = detected_level();
    let input: Vec<u64> = random_values(512, 9);
    let mut expected = input.clone();
    expected.sort_unstable();

    for &level in &CapabilityLevel::ALL {
        if !hardware.satisfies(level) {
            continue;
        }
        let dispatcher = forced_dispatcher(level);
        let chosen = dispatcher.resolve().unwrap();
        assert!(
            level.satisfies(chosen.level()),
            "pinned {level} resolved {}, above the pinned level",
            chosen.level()
        );

        let mut actual = input.clone();
        dispatcher.invoke(&mut actual).unwrap();
        assert_eq!(actual, expected, "pinned level {level}");
    }
}

#[test]
fn test_narrow_family_matches_reference() {
    for seed in 0..4u64 {
        let input: Vec<i16> = random_values(500, seed);
        let mut expected = input.clone();
        expected.sort_unstable();
        let mut actual = input;
        sort_i16(&mut actual);
        assert_eq!(actual, expected, "i16 seed {seed}");
    }

    // Wider than the u16 value space, so every value repeats
    let input: Vec<u16> = random_values(1 << 17, 99);
    let mut expected = input.clone();
    expected.sort_unstable();
    let mut actual = input;
    sort_u16(&mut actual);
    assert_eq!(actual, expected);
}

#[test]
fn test_edge_case_lengths() {
    for len in edge_case_lengths() {
        let mut unsigned: Vec<u32> = random_values(len, len as u64);
        let mut expected = unsigned.clone();
        expected.sort_unstable();
        sort_u32(&mut unsigned);
        assert_eq!(unsigned, expected, "u32 len {len}");

        let floats = random_normal(len, len as u64 + 1);
        let expected = reference_sorted(&floats);
        let mut actual = floats;
        sort_f64(&mut actual);
        assert_floats_equal(&actual, &expected, &format!("f64 len {len}"));
    }
}

#[test]
fn test_nan_policy_example() {
    let mut data = vec![5.0, 3.0, f64::NAN, 1.0, f64::NAN, 2.0];
    sort_f64(&mut data);
    assert_eq!(&data[..4], &[1.0, 2.0, 3.0, 5.0]);
    assert!(data[4].is_nan() && data[5].is_nan());
}

#[test]
fn test_nan_sign_and_payload_ignored() {
    let quiet = f64::NAN;
    let negative = -f64::NAN;
    let payload = f64::from_bits(f64::NAN.to_bits() | 0xdead);

    let mut data = vec![payload, 2.0, negative, -1.0, quiet, 0.0];
    sort_f64(&mut data);

    assert_eq!(&data[..3], &[-1.0, 0.0, 2.0]);
    assert!(data[3..].iter().all(|v| v.is_nan()));
}
