//! Per-tier sort variants
//!
//! Each function here is one registrable variant: a thin wrapper whose
//! `#[target_feature]` attribute re-compiles the shared engine with that
//! tier's instructions enabled. The wrappers are all compiled on x86_64
//! regardless of the build machine; whether one may be *called* is decided
//! at runtime by the dispatcher, never at build time.
//!
//! All variants sort the same total order, so any two of them produce
//! identical output on identical input. Only the instruction mix differs.

use crate::element::SortKey;
use crate::engine;

/// Portable variant, sound on every processor
///
/// This is the unconditional fallback the dispatcher resolves to when no
/// vectorized tier is available. Safe to call directly.
pub fn sort_baseline<T: SortKey>(data: &mut [T]) {
    engine::sort_ascending(data);
}

#[cfg(target_arch = "x86_64")]
pub mod x86_64 {
    use super::*;

    /// SSE4.2 variant
    ///
    /// # Safety
    ///
    /// The executing CPU must support SSE4.2.
    #[target_feature(enable = "sse4.2")]
    pub unsafe fn sort_sse42<T: SortKey>(data: &mut [T]) {
        engine::sort_ascending(data);
    }

    /// AVX2 variant
    ///
    /// # Safety
    ///
    /// The executing CPU must support AVX and AVX2.
    #[target_feature(enable = "avx,avx2")]
    pub unsafe fn sort_avx2<T: SortKey>(data: &mut [T]) {
        engine::sort_ascending(data);
    }

    /// AVX-512 variant (skylake-avx512 feature group)
    ///
    /// # Safety
    ///
    /// The executing CPU must support AVX-512 F, CD, VL, BW and DQ.
    #[target_feature(enable = "avx512f,avx512cd,avx512vl,avx512bw,avx512dq")]
    pub unsafe fn sort_avx512<T: SortKey>(data: &mut [T]) {
        engine::sort_ascending(data);
    }

    /// AVX-512 VBMI2 variant (icelake-class)
    ///
    /// The VBMI2 compress/expand instructions are what make vectorized
    /// partitioning of 16-bit lanes worthwhile, so this is the entry tier
    /// for the narrow-element kernel family.
    ///
    /// # Safety
    ///
    /// The executing CPU must support the AVX-512 group above plus VBMI2.
    #[target_feature(enable = "avx512f,avx512cd,avx512vl,avx512bw,avx512dq,avx512vbmi2")]
    pub unsafe fn sort_avx512_vbmi2<T: SortKey>(data: &mut [T]) {
        engine::sort_ascending(data);
    }
}
