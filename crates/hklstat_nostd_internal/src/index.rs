use core::cmp::Ordering;

/// A Miller index `(h, k, l)`, the key identifying a reflection.
///
/// Equality is exact and componentwise. The derived [`Hash`] combines all 3
/// components; collisions are always resolved through [`PartialEq`].
///
/// We intentionally don't implement [`Ord`] (or [`PartialOrd`]). Callers must
/// pick an [`IndexOrder`] explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MillerIndex(pub [i32; 3]);

impl MillerIndex {
    pub const fn new(h: i32, k: i32, l: i32) -> Self {
        MillerIndex([h, k, l])
    }

    pub const fn h(&self) -> i32 {
        self.0[0]
    }

    pub const fn k(&self) -> i32 {
        self.0[1]
    }

    pub const fn l(&self) -> i32 {
        self.0[2]
    }
}

impl From<[i32; 3]> for MillerIndex {
    fn from(hkl: [i32; 3]) -> Self {
        MillerIndex(hkl)
    }
}

impl From<(i32, i32, i32)> for MillerIndex {
    fn from((h, k, l): (i32, i32, i32)) -> Self {
        MillerIndex([h, k, l])
    }
}

/// A strategy for ordering [`MillerIndex`] values.
///
/// This plays a role similar to a comparator object. Implementors must
/// provide a total order (at least over the keys they are used with).
pub trait IndexOrder {
    fn compare(&self, lhs: &MillerIndex, rhs: &MillerIndex) -> Ordering;

    #[inline]
    fn less(&self, lhs: &MillerIndex, rhs: &MillerIndex) -> bool {
        self.compare(lhs, rhs) == Ordering::Less
    }
}

/// Compares h, then k, then l.
#[derive(Clone, Copy, Debug, Default)]
pub struct FastLexicographic;

impl IndexOrder for FastLexicographic {
    #[inline]
    fn compare(&self, lhs: &MillerIndex, rhs: &MillerIndex) -> Ordering {
        lhs.0.cmp(&rhs.0)
    }
}
