use crate::index::{FastLexicographic, IndexOrder, MillerIndex};

/// Walks 2 sorted arrays in lockstep and calls `f(i_a, i_b)` for every pair
/// of positions where `indices_a[i_a] == indices_b[i_b]`.
///
/// Both arrays must be sorted under [`FastLexicographic`] order (this isn't
/// checked). Pairs are reported in ascending order of both positions.
///
/// This is a single linear pass. Each entry of `indices_b` is compared
/// against at most 1 entry of `indices_a`, so the result is only exhaustive
/// when `indices_a` holds no duplicate keys. (Duplicates in `indices_b` are
/// each paired with the same entry of `indices_a`.)
pub fn for_each_common_pair(
    indices_a: &[MillerIndex],
    indices_b: &[MillerIndex],
    mut f: impl FnMut(usize, usize),
) {
    let order = FastLexicographic;
    let (n_a, n_b) = (indices_a.len(), indices_b.len());

    let mut i_a = 0;
    let mut i_b = 0;
    while i_a < n_a && i_b < n_b {
        while i_a < n_a && order.less(&indices_a[i_a], &indices_b[i_b]) {
            i_a += 1;
        }
        if i_a == n_a {
            break;
        }
        if indices_a[i_a] == indices_b[i_b] {
            f(i_a, i_b);
        }
        i_b += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // collect up to 8 pairs without an allocator
    fn collect_pairs(a: &[MillerIndex], b: &[MillerIndex]) -> ([(usize, usize); 8], usize) {
        let mut pairs = [(usize::MAX, usize::MAX); 8];
        let mut n_pairs = 0;
        for_each_common_pair(a, b, |i_a, i_b| {
            pairs[n_pairs] = (i_a, i_b);
            n_pairs += 1;
        });
        (pairs, n_pairs)
    }

    #[test]
    fn simple_overlap() {
        let a = [MillerIndex::new(0, 0, 1), MillerIndex::new(0, 0, 2)];
        let b = [MillerIndex::new(0, 0, 2), MillerIndex::new(0, 0, 3)];
        let (pairs, n_pairs) = collect_pairs(&a, &b);
        assert_eq!(&pairs[..n_pairs], &[(1, 0)]);
    }

    #[test]
    fn interleaved() {
        let a = [
            MillerIndex::new(-1, 0, 0),
            MillerIndex::new(0, 0, 1),
            MillerIndex::new(0, 2, 0),
            MillerIndex::new(3, 0, 0),
        ];
        let b = [
            MillerIndex::new(-2, 0, 0),
            MillerIndex::new(0, 0, 1),
            MillerIndex::new(0, 1, 0),
            MillerIndex::new(0, 2, 0),
            MillerIndex::new(3, 0, 0),
            MillerIndex::new(4, 0, 0),
        ];
        let (pairs, n_pairs) = collect_pairs(&a, &b);
        assert_eq!(&pairs[..n_pairs], &[(1, 1), (2, 3), (3, 4)]);
    }

    #[test]
    fn duplicates_in_b_share_an_entry_of_a() {
        let a = [MillerIndex::new(1, 1, 1)];
        let b = [MillerIndex::new(1, 1, 1), MillerIndex::new(1, 1, 1)];
        let (pairs, n_pairs) = collect_pairs(&a, &b);
        assert_eq!(&pairs[..n_pairs], &[(0, 0), (0, 1)]);
    }

    #[test]
    fn empty_inputs() {
        let a = [MillerIndex::new(1, 1, 1)];
        assert_eq!(collect_pairs(&a, &[]).1, 0);
        assert_eq!(collect_pairs(&[], &a).1, 0);
    }
}
