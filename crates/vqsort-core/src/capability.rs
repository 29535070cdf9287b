//! Processor capability tiers
//!
//! A [`CapabilityLevel`] is the dispatch predicate: an ordered tier of
//! instruction-set support. Tiers are totally ordered and "satisfies" is a
//! plain `>=` comparison, so a processor at a higher tier runs every variant
//! registered for a lower one.
//!
//! [`FeatureSet`] holds the raw per-feature probe results; the mapping from
//! raw features to a tier lives in [`CapabilityLevel::from_features`] so it
//! can be tested without real hardware.

use crate::error::Error;
use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

/// Ordered processor capability tier
///
/// The discriminants are ascending so tier comparisons can be done with the
/// derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CapabilityLevel {
    /// Portable scalar code, runs on any processor of the family
    Baseline = 0,
    /// SSE4.2 class
    Sse42 = 1,
    /// AVX2 class
    Avx2 = 2,
    /// AVX-512 skylake-server class (F/CD/VL/BW/DQ)
    Avx512 = 3,
    /// AVX-512 ice-lake class (skylake group plus VBMI2)
    Avx512Vbmi2 = 4,
}

impl CapabilityLevel {
    /// All tiers, lowest first
    pub const ALL: [Self; 5] = [
        Self::Baseline,
        Self::Sse42,
        Self::Avx2,
        Self::Avx512,
        Self::Avx512Vbmi2,
    ];

    /// Whether this (detected) tier satisfies a variant's requirement
    pub fn satisfies(self, required: CapabilityLevel) -> bool {
        self >= required
    }

    /// Stable lowercase name, used in logs and the env override
    pub fn name(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Sse42 => "sse4.2",
            Self::Avx2 => "avx2",
            Self::Avx512 => "avx512",
            Self::Avx512Vbmi2 => "avx512-vbmi2",
        }
    }

    /// Map a raw probed feature set to the highest tier it fully supports
    ///
    /// Partial support for a tier's feature group falls through to the next
    /// lower tier, so an incomplete AVX-512 group still dispatches as AVX2.
    pub fn from_features(features: FeatureSet) -> Self {
        if features.contains(FeatureSet::AVX512_VBMI2_TIER) {
            Self::Avx512Vbmi2
        } else if features.contains(FeatureSet::AVX512_TIER) {
            Self::Avx512
        } else if features.contains(FeatureSet::AVX2_TIER) {
            Self::Avx2
        } else if features.contains(FeatureSet::SSE42) {
            Self::Sse42
        } else {
            Self::Baseline
        }
    }
}

impl fmt::Display for CapabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CapabilityLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "baseline" | "scalar" => Ok(Self::Baseline),
            "sse4.2" | "sse42" => Ok(Self::Sse42),
            "avx2" => Ok(Self::Avx2),
            "avx512" => Ok(Self::Avx512),
            "avx512-vbmi2" | "avx512vbmi2" => Ok(Self::Avx512Vbmi2),
            _ => Err(Error::unknown_level(s)),
        }
    }
}

bitflags! {
    /// Raw instruction-set features reported by the probe
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FeatureSet: u32 {
        const SSE42       = 0b000000001;
        const AVX         = 0b000000010;
        const AVX2        = 0b000000100;
        const AVX512F     = 0b000001000;
        const AVX512CD    = 0b000010000;
        const AVX512VL    = 0b000100000;
        const AVX512BW    = 0b001000000;
        const AVX512DQ    = 0b010000000;
        const AVX512VBMI2 = 0b100000000;
    }
}

impl FeatureSet {
    /// Features required by the AVX2 tier
    pub const AVX2_TIER: Self = Self::AVX.union(Self::AVX2);
    /// Skylake-server AVX-512 feature group
    pub const AVX512_TIER: Self = Self::AVX512F
        .union(Self::AVX512CD)
        .union(Self::AVX512VL)
        .union(Self::AVX512BW)
        .union(Self::AVX512DQ);
    /// Ice-lake feature group required by the 16-bit kernels
    pub const AVX512_VBMI2_TIER: Self = Self::AVX512_TIER.union(Self::AVX512VBMI2);
}
