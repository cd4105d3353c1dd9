//! Integer edge weights.

use core::fmt;
use num_traits::PrimInt;

/// Numeric type usable as an edge weight.
///
/// Any primitive integer qualifies. Algorithms never add two weights without
/// `checked_add`, so an overflowing path sum is treated as "no improvement"
/// rather than wrapping into a false shortcut.
pub trait Weight: PrimInt + Default + fmt::Debug + fmt::Display {}

impl<T> Weight for T where T: PrimInt + Default + fmt::Debug + fmt::Display {}

/// Adds a weight to a finite distance, `None` on overflow.
#[inline]
pub(crate) fn extend<W: Weight>(distance: W, weight: W) -> Option<W> {
    distance.checked_add(&weight)
}

/// Returns `true` if `candidate` is strictly shorter than the current entry.
///
/// `None` is the infinity sentinel, so any finite candidate improves on it.
#[inline]
pub(crate) fn improves<W: Weight>(candidate: W, current: Option<W>) -> bool {
    current.map_or(true, |current| candidate < current)
}
