//! Processor feature probing
//!
//! The production probe queries the host once and memoizes the resulting
//! [`CapabilityLevel`] for the process lifetime. Detection never fails: a
//! feature that cannot be confirmed is treated as absent, so the worst
//! outcome is the baseline tier.
//!
//! Dispatchers take the probe as a type parameter, so tests inject a
//! [`PinnedProbe`] to exercise resolution at any tier deterministically.

use crate::capability::{CapabilityLevel, FeatureSet};
use std::sync::OnceLock;

/// Environment variable capping the detected tier (e.g. `avx2`)
///
/// Accepts the names produced by [`CapabilityLevel::name`]. Unparsable
/// values are logged and ignored. Read once, at first detection.
pub const MAX_LEVEL_ENV: &str = "VQSORT_MAX_LEVEL";

/// Source of the detected capability tier
///
/// Implementations must be deterministic over the process lifetime: `detect`
/// is a pure function of fixed hardware (or pinned) state, so concurrent
/// redundant calls are harmless.
pub trait CapabilityProbe: Clone + Send + Sync + 'static {
    /// The capability tier variants may rely on
    fn detect(&self) -> CapabilityLevel;
}

/// Probe backed by runtime feature detection, memoized process-wide
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuProbe;

static DETECTED: OnceLock<CapabilityLevel> = OnceLock::new();

impl CpuProbe {
    pub fn new() -> Self {
        Self
    }

    /// Raw per-feature results from the host processor
    ///
    /// Always empty on non-x86-64 targets. The underlying queries are served
    /// from the standard library's own detection cache, so this is cheap to
    /// call for diagnostics.
    #[cfg(target_arch = "x86_64")]
    pub fn features() -> FeatureSet {
        let mut features = FeatureSet::empty();
        if is_x86_feature_detected!("sse4.2") {
            features |= FeatureSet::SSE42;
        }
        if is_x86_feature_detected!("avx") {
            features |= FeatureSet::AVX;
        }
        if is_x86_feature_detected!("avx2") {
            features |= FeatureSet::AVX2;
        }
        if is_x86_feature_detected!("avx512f") {
            features |= FeatureSet::AVX512F;
        }
        if is_x86_feature_detected!("avx512cd") {
            features |= FeatureSet::AVX512CD;
        }
        if is_x86_feature_detected!("avx512vl") {
            features |= FeatureSet::AVX512VL;
        }
        if is_x86_feature_detected!("avx512bw") {
            features |= FeatureSet::AVX512BW;
        }
        if is_x86_feature_detected!("avx512dq") {
            features |= FeatureSet::AVX512DQ;
        }
        if is_x86_feature_detected!("avx512vbmi2") {
            features |= FeatureSet::AVX512VBMI2;
        }
        features
    }

    /// Raw per-feature results from the host processor
    #[cfg(not(target_arch = "x86_64"))]
    pub fn features() -> FeatureSet {
        FeatureSet::empty()
    }
}

impl CapabilityProbe for CpuProbe {
    fn detect(&self) -> CapabilityLevel {
        *DETECTED.get_or_init(|| {
            let hardware = CapabilityLevel::from_features(Self::features());
            let level = apply_cap(hardware, env_cap());
            if level < hardware {
                log::debug!(
                    "cpu capability: {level} ({MAX_LEVEL_ENV} capped from {hardware})"
                );
            } else {
                log::debug!("cpu capability: {level}");
            }
            level
        })
    }
}

/// Probe pinned to a fixed tier, for tests and forced-variant harnesses
#[derive(Clone, Copy, Debug)]
pub struct PinnedProbe(pub CapabilityLevel);

impl CapabilityProbe for PinnedProbe {
    fn detect(&self) -> CapabilityLevel {
        self.0
    }
}

/// The process-wide detected capability tier
pub fn detected_level() -> CapabilityLevel {
    CpuProbe::new().detect()
}

fn env_cap() -> Option<CapabilityLevel> {
    let raw = std::env::var(MAX_LEVEL_ENV).ok()?;
    match raw.parse() {
        Ok(level) => Some(level),
        Err(e) => {
            log::warn!("ignoring {MAX_LEVEL_ENV}={raw:?}: {e}");
            None
        }
    }
}

fn apply_cap(hardware: CapabilityLevel, cap: Option<CapabilityLevel>) -> CapabilityLevel {
    match cap {
        Some(cap) if cap < hardware => cap,
        _ => hardware,
    }
}
