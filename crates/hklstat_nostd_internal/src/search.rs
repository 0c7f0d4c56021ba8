use crate::index::{IndexOrder, MillerIndex};
use core::cmp::Ordering;

/// Returns the position of the first element of `sorted` that isn't less
/// than `hkl` (or `sorted.len()` if there isn't one).
///
/// `sorted` must already be sorted under `order`. This is not checked.
#[inline]
pub fn lower_bound(sorted: &[MillerIndex], hkl: &MillerIndex, order: &impl IndexOrder) -> usize {
    sorted.partition_point(|probe| order.less(probe, hkl))
}

/// Checks whether `indices` is non-decreasing under `order`.
///
/// None of the routines in this crate call this. It's here so that callers
/// can cheaply check a precondition when they aren't sure it holds.
pub fn is_sorted_by_order(indices: &[MillerIndex], order: &impl IndexOrder) -> bool {
    indices
        .windows(2)
        .all(|pair| order.compare(&pair[0], &pair[1]) != Ordering::Greater)
}
