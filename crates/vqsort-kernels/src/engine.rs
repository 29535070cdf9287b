//! Shared sort engine
//!
//! Single comparison-based engine behind every variant. The per-tier
//! wrappers in [`crate::variants`] carry the `#[target_feature]`
//! annotations; this body has none, so it inlines into each wrapper and is
//! code-generated once per tier with that tier's features enabled.

use crate::element::SortKey;

/// In-place ascending sort under the element's total order
///
/// Unstable and non-allocating. Slices shorter than two elements are left
/// untouched.
#[inline]
pub(crate) fn sort_ascending<T: SortKey>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    data.sort_unstable_by(T::sort_cmp);
}
