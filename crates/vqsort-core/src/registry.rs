//! Variant registry
//!
//! One registry per dispatch point: an ordered table of candidate
//! implementations, highest required tier first. Contents are fixed during
//! static setup, before the first dispatch call; the resolver never mutates
//! them.

use crate::capability::CapabilityLevel;
use crate::key::KernelKey;
use std::fmt;

/// Signature shared by every registered sort variant
///
/// Sorts the slice ascending in place. The pointer is `unsafe` because a
/// variant above the baseline tier is compiled with target features the
/// processor must actually support; the dispatcher only invokes a variant
/// after the probe has reported its tier (see [`VariantRegistry::register`]).
pub type SortFn<T> = unsafe fn(&mut [T]);

/// One registered implementation: required tier, name, and entry point
pub struct VariantDescriptor<T> {
    level: CapabilityLevel,
    name: &'static str,
    func: SortFn<T>,
}

impl<T> VariantDescriptor<T> {
    /// Minimum capability tier the variant requires
    pub fn level(&self) -> CapabilityLevel {
        self.level
    }

    /// Variant name, used in logs and benchmark labels
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the variant on `data`
    ///
    /// # Safety
    ///
    /// The current processor must satisfy [`Self::level`], unless the
    /// variant was registered as unconditionally sound (see
    /// [`VariantRegistry::register`]).
    pub unsafe fn invoke(&self, data: &mut [T]) {
        (self.func)(data)
    }
}

// Manual impls: the derives would bound T, but fn pointers are Copy for any T.
impl<T> Clone for VariantDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VariantDescriptor<T> {}

impl<T> fmt::Debug for VariantDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantDescriptor")
            .field("level", &self.level)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered candidate table for one dispatch point
#[derive(Debug)]
pub struct VariantRegistry<T> {
    key: KernelKey,
    candidates: Vec<VariantDescriptor<T>>,
}

impl<T> VariantRegistry<T> {
    /// Create an empty registry for `key`
    pub fn new(key: KernelKey) -> Self {
        debug_assert!(
            key.kernel().covers(key.ty()),
            "{key}: kernel family does not cover element type"
        );
        Self {
            key,
            candidates: Vec::new(),
        }
    }

    /// The dispatch point this registry serves
    pub fn key(&self) -> KernelKey {
        self.key
    }

    /// Register one variant
    ///
    /// Called during static setup; the candidate list stays ordered highest
    /// tier first regardless of registration order.
    ///
    /// # Safety
    ///
    /// `func` must be sound to call on any processor whose detected tier
    /// satisfies `level`. The lowest-level registration backs the
    /// unconditional fallback path and must be sound on every processor.
    ///
    /// # Panics
    ///
    /// Panics if a variant with the same `level` is already registered for
    /// this key. Duplicate tiers are a registration defect.
    pub unsafe fn register(
        &mut self,
        level: CapabilityLevel,
        name: &'static str,
        func: SortFn<T>,
    ) {
        let descriptor = VariantDescriptor { level, name, func };
        // Candidates are descending by level, so compare reversed.
        match self.candidates.binary_search_by(|d| level.cmp(&d.level)) {
            Ok(_) => panic!(
                "{}: duplicate variant registered for level {}",
                self.key, level
            ),
            Err(pos) => self.candidates.insert(pos, descriptor),
        }
    }

    /// Candidates for this key, highest required tier first
    pub fn candidates(&self) -> &[VariantDescriptor<T>] {
        &self.candidates
    }

    /// Number of registered variants
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether no variant has been registered
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
