//! Process-wide dispatch points
//!
//! One lazily built [`KernelDispatcher`] per element type, shared by every
//! caller in the process. The wide family (32- and 64-bit elements) registers
//! the baseline plus the SSE4.2, AVX2 and AVX-512 tiers; the narrow family
//! (16-bit elements) registers the baseline plus the AVX-512 VBMI2 tier,
//! since compress-store is what makes vectorizing 16-bit lanes pay off.
//!
//! On non-x86_64 targets only the baseline is registered and every dispatch
//! resolves to it.

use std::sync::OnceLock;

use vqsort_core::{CapabilityLevel, KernelDispatcher, KernelKey, VariantRegistry};

use crate::element::SortKey;
use crate::variants;

/// Element types with a process-wide dispatch point
///
/// Implemented for the eight supported element types. The dispatcher is
/// built on first access and lives for the rest of the process, so its
/// resolution happens at most once per type.
pub trait DispatchedSort: SortKey {
    /// The shared dispatcher for this element type
    fn dispatcher() -> &'static KernelDispatcher<Self>;
}

/// Registry for the wide kernel family (32- and 64-bit elements)
fn wide_registry<T: SortKey>() -> VariantRegistry<T> {
    let mut registry = VariantRegistry::new(KernelKey::new(T::KERNEL, T::TAG));
    // Safety: the baseline variant is unconditionally sound, and each
    // vectorized variant enables exactly the features its registered level
    // guarantees the probe has verified.
    unsafe {
        registry.register(CapabilityLevel::Baseline, "baseline", variants::sort_baseline::<T>);
        #[cfg(target_arch = "x86_64")]
        {
            registry.register(
                CapabilityLevel::Sse42,
                "sse4.2",
                variants::x86_64::sort_sse42::<T>,
            );
            registry.register(CapabilityLevel::Avx2, "avx2", variants::x86_64::sort_avx2::<T>);
            registry.register(
                CapabilityLevel::Avx512,
                "avx512",
                variants::x86_64::sort_avx512::<T>,
            );
        }
    }
    registry
}

/// Registry for the narrow kernel family (16-bit elements)
fn narrow_registry<T: SortKey>() -> VariantRegistry<T> {
    let mut registry = VariantRegistry::new(KernelKey::new(T::KERNEL, T::TAG));
    // Safety: as in `wide_registry`.
    unsafe {
        registry.register(CapabilityLevel::Baseline, "baseline", variants::sort_baseline::<T>);
        #[cfg(target_arch = "x86_64")]
        registry.register(
            CapabilityLevel::Avx512Vbmi2,
            "avx512-vbmi2",
            variants::x86_64::sort_avx512_vbmi2::<T>,
        );
    }
    registry
}

/// Sort a slice into ascending order through the per-type dispatch point
///
/// Integers sort by value. Floats sort with every NaN after every non-NaN
/// value, regardless of NaN sign or payload. The sort is in place, unstable
/// and allocation-free, and a slice shorter than two elements is returned
/// unchanged.
///
/// # Panics
///
/// Panics if resolution fails, which would mean a dispatch point was built
/// with an empty registry. The registries in this module always carry a
/// baseline variant, so this is unreachable short of a registration defect.
///
/// # Examples
///
/// ```
/// let mut data = vec![5.0f64, 3.0, f64::NAN, 1.0, f64::NAN, 2.0];
/// vqsort_kernels::sort(&mut data);
/// assert_eq!(&data[..4], &[1.0, 2.0, 3.0, 5.0]);
/// assert!(data[4].is_nan() && data[5].is_nan());
/// ```
pub fn sort<T: DispatchedSort>(data: &mut [T]) {
    let dispatcher = T::dispatcher();
    if let Err(err) = dispatcher.invoke(data) {
        panic!("{}: dispatch failed: {}", dispatcher.key(), err);
    }
}

macro_rules! dispatch_entry {
    ($ty:ty, $entry:ident, $registry:ident) => {
        impl DispatchedSort for $ty {
            fn dispatcher() -> &'static KernelDispatcher<$ty> {
                static DISPATCHER: OnceLock<KernelDispatcher<$ty>> = OnceLock::new();
                DISPATCHER.get_or_init(|| KernelDispatcher::new($registry::<$ty>()))
            }
        }

        #[doc = concat!("Sort a `", stringify!($ty), "` slice into ascending order.")]
        ///
        /// Monomorphized entry point over [`sort`]; see there for the
        /// ordering contract.
        pub fn $entry(data: &mut [$ty]) {
            sort::<$ty>(data);
        }
    };
}

dispatch_entry!(i16, sort_i16, narrow_registry);
dispatch_entry!(u16, sort_u16, narrow_registry);
dispatch_entry!(i32, sort_i32, wide_registry);
dispatch_entry!(u32, sort_u32, wide_registry);
dispatch_entry!(i64, sort_i64, wide_registry);
dispatch_entry!(u64, sort_u64, wide_registry);
dispatch_entry!(f32, sort_f32, wide_registry);
dispatch_entry!(f64, sort_f64, wide_registry);
