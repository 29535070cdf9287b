//! Runtime CPU-capability dispatch for numeric kernels
//!
//! This crate provides the mechanism that picks, at first use, the best
//! compiled variant of a kernel for the processor the program actually runs
//! on, and then gets out of the way.
//!
//! # Architecture Overview
//!
//! The machinery has four pieces:
//!
//! 1. **Probe** - detects the processor's [`CapabilityLevel`] once per
//!    process and memoizes it
//! 2. **Registry** - an ordered table of [`VariantDescriptor`]s per dispatch
//!    point, highest required tier first
//! 3. **Dispatcher** - resolves the best satisfied variant exactly once and
//!    caches the result atomically
//! 4. **Keys** - [`KernelKey`] names one dispatch point (kernel family plus
//!    element type)
//!
//! Resolution is a pure function of fixed inputs, so concurrent first calls
//! are harmless: the first published result wins and every caller converges
//! on it.
//!
//! # Example
//!
//! ```rust
//! use vqsort_core::{
//!     CapabilityLevel, KernelDispatcher, KernelKey, KernelName, PinnedProbe, TypeTag,
//!     VariantRegistry,
//! };
//!
//! fn baseline(data: &mut [i32]) {
//!     data.sort_unstable();
//! }
//!
//! let mut registry = VariantRegistry::new(KernelKey::new(KernelName::Sort, TypeTag::I32));
//! // Safety: the baseline variant is sound on any processor.
//! unsafe { registry.register(CapabilityLevel::Baseline, "baseline", baseline) };
//!
//! let dispatcher = KernelDispatcher::with_probe(registry, PinnedProbe(CapabilityLevel::Avx2));
//! let mut data = vec![3, 1, 2];
//! dispatcher.invoke(&mut data)?;
//! assert_eq!(data, vec![1, 2, 3]);
//! # Ok::<(), vqsort_core::Error>(())
//! ```

// Re-export submodules
pub mod capability;
pub mod dispatcher;
pub mod error;
pub mod key;
pub mod probe;
pub mod registry;

// Re-export core types
pub use error::{Error, Result};

pub use capability::{CapabilityLevel, FeatureSet};
pub use dispatcher::KernelDispatcher;
pub use key::{KernelKey, KernelName, TypeTag};
pub use probe::{detected_level, CapabilityProbe, CpuProbe, PinnedProbe, MAX_LEVEL_ENV};
pub use registry::{SortFn, VariantDescriptor, VariantRegistry};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CapabilityLevel,
        CapabilityProbe,
        CpuProbe,
        Error,
        KernelDispatcher,
        KernelKey,
        KernelName,
        Result,
        TypeTag,
        VariantRegistry,
    };
}
