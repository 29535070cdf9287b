//! Dispatched element types
//!
//! [`SortKey`] is the type foundation for the sort kernels: plain-data
//! numeric types with a total order every variant agrees on. The trait also
//! pins each type to its dispatch identity, so the per-type registries and
//! keys fall out of the type itself.
//!
//! Floats order through [`OrderedFloat`], which places every NaN above all
//! numbers (and equal to other NaNs), so ascending sorts put NaNs at the
//! end regardless of payload or sign bit.

use bytemuck::Pod;
use num_traits::Num;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt::Debug;
use vqsort_core::{KernelName, TypeTag};

/// Numeric element types the sort kernels dispatch over
pub trait SortKey: Pod + Num + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Tag identifying this type in a dispatch key
    const TAG: TypeTag;

    /// Kernel family this type dispatches through
    const KERNEL: KernelName;

    /// Total order every variant sorts by
    ///
    /// Integers use their natural order. Floats compare NaN greater than
    /// every number, so ascending output ends with the NaNs.
    fn sort_cmp(&self, other: &Self) -> Ordering;
}

// =============================================================================
// SortKey implementations for concrete types
// =============================================================================

impl SortKey for i16 {
    const TAG: TypeTag = TypeTag::I16;
    const KERNEL: KernelName = KernelName::Sort16;

    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl SortKey for u16 {
    const TAG: TypeTag = TypeTag::U16;
    const KERNEL: KernelName = KernelName::Sort16;

    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl SortKey for i32 {
    const TAG: TypeTag = TypeTag::I32;
    const KERNEL: KernelName = KernelName::Sort;

    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl SortKey for u32 {
    const TAG: TypeTag = TypeTag::U32;
    const KERNEL: KernelName = KernelName::Sort;

    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl SortKey for i64 {
    const TAG: TypeTag = TypeTag::I64;
    const KERNEL: KernelName = KernelName::Sort;

    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl SortKey for u64 {
    const TAG: TypeTag = TypeTag::U64;
    const KERNEL: KernelName = KernelName::Sort;

    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl SortKey for f32 {
    const TAG: TypeTag = TypeTag::F32;
    const KERNEL: KernelName = KernelName::Sort;

    fn sort_cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(*self).cmp(&OrderedFloat(*other))
    }
}

impl SortKey for f64 {
    const TAG: TypeTag = TypeTag::F64;
    const KERNEL: KernelName = KernelName::Sort;

    fn sort_cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(*self).cmp(&OrderedFloat(*other))
    }
}

// =============================================================================
// Tests
// =============================================================================
