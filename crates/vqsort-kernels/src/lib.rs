//! Vectorized sort kernels with runtime dispatch
//!
//! This crate supplies the sort variants and the per-type dispatch points
//! built on [`vqsort_core`]. Two kernel families are wired up:
//!
//! - **wide** (`i32`, `u32`, `i64`, `u64`, `f32`, `f64`): baseline plus
//!   SSE4.2, AVX2 and AVX-512 tiers.
//! - **narrow** (`i16`, `u16`): baseline plus the AVX-512 VBMI2 tier, the
//!   first tier whose compress-store makes 16-bit lanes worth vectorizing.
//!
//! Callers use the monomorphized entry points (`sort_f64` and friends) or
//! the generic [`sort`]. The first call for an element type probes the CPU,
//! resolves the best variant and publishes it; every later call reuses the
//! published variant.
//!
//! Every variant sorts the same total order. Floats place each NaN after
//! every non-NaN value, with NaN sign and payload ignored, so the result of
//! a dispatch never depends on which tier the hardware happened to support.
//!
//! # Examples
//!
//! ```
//! use vqsort_kernels::{sort_f64, sort_u32};
//!
//! let mut ids = vec![42u32, 7, 19, 7];
//! sort_u32(&mut ids);
//! assert_eq!(ids, vec![7, 7, 19, 42]);
//!
//! let mut samples = vec![0.3f64, f64::NAN, -1.5];
//! sort_f64(&mut samples);
//! assert_eq!(&samples[..2], &[-1.5, 0.3]);
//! assert!(samples[2].is_nan());
//! ```

pub mod dispatch;
pub mod element;
mod engine;
pub mod variants;

pub use dispatch::{
    sort, sort_f32, sort_f64, sort_i16, sort_i32, sort_i64, sort_u16, sort_u32, sort_u64,
    DispatchedSort,
};
pub use element::SortKey;
