//! Dispatch point identity
//!
//! A dispatch point is one (kernel, element type) pair. The sort kernels come
//! in two independent families matching how the variants are built: `Sort`
//! covers the 32/64-bit element widths, `Sort16` covers the 16-bit widths,
//! which only have accelerated variants at the ice-lake tier.

use std::fmt;

/// Kernel family of a dispatch point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelName {
    /// Ascending sort over 32/64-bit elements
    Sort,
    /// Ascending sort over 16-bit elements
    Sort16,
}

impl KernelName {
    /// Stable lowercase name, used in keys and log lines
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sort => "sort",
            Self::Sort16 => "sort16",
        }
    }

    /// Whether this family dispatches elements of the given type
    pub fn covers(self, tag: TypeTag) -> bool {
        match self {
            Self::Sort => tag.width_bits() >= 32,
            Self::Sort16 => tag.width_bits() == 16,
        }
    }
}

impl fmt::Display for KernelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compile-time tag for a dispatched element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl TypeTag {
    /// Stable lowercase name, used in keys and log lines
    pub fn as_str(self) -> &'static str {
        match self {
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    /// Element width in bits
    pub fn width_bits(self) -> u32 {
        match self {
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 | Self::F32 => 32,
            Self::I64 | Self::U64 | Self::F64 => 64,
        }
    }

    /// Whether the tagged type is a floating-point type
    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of one dispatch point: kernel family plus element type
///
/// Keys are plain values; they are fixed at registry construction and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KernelKey {
    kernel: KernelName,
    ty: TypeTag,
}

impl KernelKey {
    /// Create a key for a (kernel, element type) pair
    pub fn new(kernel: KernelName, ty: TypeTag) -> Self {
        Self { kernel, ty }
    }

    /// The kernel family
    pub fn kernel(self) -> KernelName {
        self.kernel
    }

    /// The element type tag
    pub fn ty(self) -> TypeTag {
        self.ty
    }
}

impl fmt::Display for KernelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kernel, self.ty)
    }
}
