//! Runtime CPU-capability dispatch for vectorized numeric sorting
//!
//! Umbrella crate re-exporting the two workspace crates:
//!
//! - [`vqsort_core`] - the dispatch machinery: capability probe, variant
//!   registry, resolver and per-dispatch-point cache
//! - [`vqsort_kernels`] - the sort variants and the per-type entry points
//!   built on that machinery
//!
//! Most callers only need an entry point:
//!
//! ```rust
//! let mut data = vec![5.0f64, 3.0, f64::NAN, 1.0, f64::NAN, 2.0];
//! vqsort::sort_f64(&mut data);
//! assert_eq!(&data[..4], &[1.0, 2.0, 3.0, 5.0]);
//! assert!(data[4].is_nan() && data[5].is_nan());
//! ```
//!
//! The first call for an element type probes the CPU once, resolves the
//! highest variant the processor satisfies and publishes it; later calls go
//! straight to the published variant. `VQSORT_MAX_LEVEL` caps the probed
//! level for triage without rebuilding.

// Re-export workspace crates
pub use vqsort_core;
pub use vqsort_kernels;

// The dispatch machinery
pub use vqsort_core::{
    detected_level, CapabilityLevel, CapabilityProbe, CpuProbe, Error, FeatureSet,
    KernelDispatcher, KernelKey, KernelName, PinnedProbe, Result, SortFn, TypeTag,
    VariantDescriptor, VariantRegistry, MAX_LEVEL_ENV,
};

// The dispatched sorts
pub use vqsort_kernels::{
    sort, sort_f32, sort_f64, sort_i16, sort_i32, sort_i64, sort_u16, sort_u32, sort_u64,
    DispatchedSort, SortKey,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use vqsort_core::prelude::*;
    pub use vqsort_kernels::{
        sort, sort_f32, sort_f64, sort_i16, sort_i32, sort_i64, sort_u16, sort_u32, sort_u64,
        DispatchedSort, SortKey,
    };
}
