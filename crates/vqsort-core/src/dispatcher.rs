//! Kernel dispatcher
//!
//! Owns the registry, the probe, and the resolution cache for one dispatch
//! point. Resolution walks the candidates highest tier first and publishes
//! the winner exactly once; every later call reuses the published descriptor
//! after a single atomic load.
//!
//! The probe is a type parameter defaulting to the process-wide
//! [`CpuProbe`], so tests build isolated dispatchers around a
//! [`PinnedProbe`](crate::probe::PinnedProbe) and exercise every resolution
//! branch deterministically.

use crate::capability::CapabilityLevel;
use crate::error::{Error, Result};
use crate::key::KernelKey;
use crate::probe::{CapabilityProbe, CpuProbe};
use crate::registry::{VariantDescriptor, VariantRegistry};
use std::sync::OnceLock;

/// Resolver and resolution cache for one dispatch point
#[derive(Debug)]
pub struct KernelDispatcher<T, P: CapabilityProbe = CpuProbe> {
    registry: VariantRegistry<T>,
    probe: P,
    resolved: OnceLock<VariantDescriptor<T>>,
}

impl<T> KernelDispatcher<T, CpuProbe> {
    /// Dispatcher using the process-wide CPU probe
    pub fn new(registry: VariantRegistry<T>) -> Self {
        Self::with_probe(registry, CpuProbe::new())
    }
}

impl<T, P: CapabilityProbe> KernelDispatcher<T, P> {
    /// Dispatcher with an injected probe
    pub fn with_probe(registry: VariantRegistry<T>, probe: P) -> Self {
        Self {
            registry,
            probe,
            resolved: OnceLock::new(),
        }
    }

    /// The dispatch point this dispatcher serves
    pub fn key(&self) -> KernelKey {
        self.registry.key()
    }

    /// Candidates for this dispatch point, highest tier first
    pub fn candidates(&self) -> &[VariantDescriptor<T>] {
        self.registry.candidates()
    }

    /// The capability tier this dispatcher's probe reports
    pub fn detected_level(&self) -> CapabilityLevel {
        self.probe.detect()
    }

    /// The published variant, or `None` before first resolution
    pub fn resolved(&self) -> Option<&VariantDescriptor<T>> {
        self.resolved.get()
    }

    /// Resolve (at most once effectively) the variant for this dispatch point
    ///
    /// Picks the highest-tier candidate the probe satisfies, falling back to
    /// the lowest-tier candidate when none is satisfied. Concurrent first
    /// calls may each compute the selection, which is a pure function of the
    /// fixed registry and probe, but the first published result wins and all
    /// callers converge on it.
    ///
    /// # Errors
    ///
    /// [`Error::NoVariants`] when the registry is empty. That is a
    /// configuration defect: deterministic, never retried.
    pub fn resolve(&self) -> Result<&VariantDescriptor<T>> {
        if let Some(descriptor) = self.resolved.get() {
            return Ok(descriptor);
        }
        let chosen = self.select()?;
        Ok(self.resolved.get_or_init(|| {
            log::debug!(
                "{}: selected {} variant ({}) for detected level {}",
                self.key(),
                chosen.name(),
                chosen.level(),
                self.probe.detect()
            );
            chosen
        }))
    }

    /// Pure selection, no caching
    fn select(&self) -> Result<VariantDescriptor<T>> {
        let candidates = self.registry.candidates();
        let detected = self.probe.detect();
        candidates
            .iter()
            .find(|d| detected.satisfies(d.level()))
            .or_else(|| candidates.last())
            .copied()
            .ok_or_else(|| Error::no_variants(self.key()))
    }

    /// Sort `data` through the resolved variant
    ///
    /// # Errors
    ///
    /// [`Error::NoVariants`] when the registry is empty.
    pub fn invoke(&self, data: &mut [T]) -> Result<()> {
        let descriptor = self.resolve()?;
        // Safety: registration contract. The probe satisfied the variant's
        // tier, or this is the lowest registration, which is sound on every
        // processor.
        unsafe { descriptor.invoke(data) };
        Ok(())
    }
}
