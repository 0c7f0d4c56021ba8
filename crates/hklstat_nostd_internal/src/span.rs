//! Implements [`IndexSpan`], the packed ordering built from a reference array

use crate::index::{IndexOrder, MillerIndex};
use core::cmp::Ordering;

/// The per-component bounds of a collection of Miller indices.
///
/// Keys inside the span can be packed into a single integer with a
/// mixed-radix encoding (h is the most significant digit). Comparing packed
/// values gives the span-packed order.
///
/// # Note
/// The span-packed order is only valid relative to the array it was built
/// from. It should be rebuilt whenever that array changes, and packed values
/// must never be compared across different spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexSpan {
    min: [i32; 3],
    max: [i32; 3],
}

impl IndexSpan {
    /// Returns `None` when `indices` is empty (there are no bounds).
    pub fn from_indices(indices: &[MillerIndex]) -> Option<IndexSpan> {
        let (first, rest) = indices.split_first()?;
        let mut min = first.0;
        let mut max = first.0;
        for hkl in rest {
            for dim in 0..3 {
                min[dim] = min[dim].min(hkl.0[dim]);
                max[dim] = max[dim].max(hkl.0[dim]);
            }
        }
        Some(IndexSpan { min, max })
    }

    pub fn min(&self) -> [i32; 3] {
        self.min
    }

    pub fn max(&self) -> [i32; 3] {
        self.max
    }

    /// The number of distinct values along each component
    pub fn range(&self) -> [i64; 3] {
        [0, 1, 2].map(|dim: usize| self.max[dim] as i64 - self.min[dim] as i64 + 1)
    }

    pub fn contains(&self, hkl: &MillerIndex) -> bool {
        (0..3).all(|dim: usize| self.min[dim] <= hkl.0[dim] && hkl.0[dim] <= self.max[dim])
    }

    /// Pack `hkl` into a single integer.
    ///
    /// The result is only meaningful if `self.contains(hkl)`. We use i128 so
    /// that no combination of i32 components can overflow.
    #[inline]
    pub fn pack(&self, hkl: &MillerIndex) -> i128 {
        let range = self.range();
        let offset = |dim: usize| hkl.0[dim] as i128 - self.min[dim] as i128;
        (offset(0) * range[1] as i128 + offset(1)) * range[2] as i128 + offset(2)
    }
}

impl IndexOrder for IndexSpan {
    #[inline]
    fn compare(&self, lhs: &MillerIndex, rhs: &MillerIndex) -> Ordering {
        self.pack(lhs).cmp(&self.pack(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::FastLexicographic;

    const SAMPLE: [MillerIndex; 4] = [
        MillerIndex::new(-2, 0, 3),
        MillerIndex::new(1, -4, 0),
        MillerIndex::new(0, 2, -1),
        MillerIndex::new(1, 1, 1),
    ];

    #[test]
    fn empty_has_no_span() {
        assert!(IndexSpan::from_indices(&[]).is_none());
    }

    #[test]
    fn bounds() {
        let span = IndexSpan::from_indices(&SAMPLE).unwrap();
        assert_eq!(span.min(), [-2, -4, -1]);
        assert_eq!(span.max(), [1, 2, 3]);
        assert_eq!(span.range(), [4, 7, 5]);
        assert!(span.contains(&MillerIndex::new(0, 0, 0)));
        assert!(!span.contains(&MillerIndex::new(0, 3, 0)));
    }

    #[test]
    fn pack_corners() {
        let span = IndexSpan::from_indices(&SAMPLE).unwrap();
        assert_eq!(span.pack(&MillerIndex::new(-2, -4, -1)), 0);
        assert_eq!(span.pack(&MillerIndex::new(-2, -4, 0)), 1);
        assert_eq!(span.pack(&MillerIndex::new(-2, -3, -1)), 5);
        assert_eq!(span.pack(&MillerIndex::new(-1, -4, -1)), 35);
        assert_eq!(span.pack(&MillerIndex::new(1, 2, 3)), 4 * 7 * 5 - 1);
    }

    #[test]
    fn packed_order_agrees_with_lexicographic_inside_span() {
        let span = IndexSpan::from_indices(&SAMPLE).unwrap();
        for lhs in SAMPLE.iter() {
            for rhs in SAMPLE.iter() {
                assert_eq!(
                    span.compare(lhs, rhs),
                    FastLexicographic.compare(lhs, rhs),
                    "{lhs:?} vs {rhs:?}"
                );
            }
        }
    }

    #[test]
    fn extreme_components_dont_overflow() {
        let extremes = [
            MillerIndex::new(i32::MIN, i32::MIN, i32::MIN),
            MillerIndex::new(i32::MAX, i32::MAX, i32::MAX),
        ];
        let span = IndexSpan::from_indices(&extremes).unwrap();
        assert!(span.less(&extremes[0], &extremes[1]));
        assert_eq!(span.pack(&extremes[0]), 0);
    }
}
