use hklstat_nostd_internal::{MillerIndex, for_each_common_pair};

/// Find the positions of the Miller indices shared by `indices_a` and
/// `indices_b`.
///
/// Returns `(positions_a, positions_b)`, of equal length, such that
/// `indices_a[positions_a[n]] == indices_b[positions_b[n]]` for every `n`.
///
/// Both inputs must already be sorted under [`crate::FastLexicographic`]
/// order (see [`crate::sort_permutation_fast_less`]). This is not checked.
/// The result is exhaustive only when `indices_a` holds no duplicates.
pub fn my_common_indices(
    indices_a: &[MillerIndex],
    indices_b: &[MillerIndex],
) -> (Vec<usize>, Vec<usize>) {
    let mut positions_a = Vec::new();
    let mut positions_b = Vec::new();
    for_each_common_pair(indices_a, indices_b, |i_a, i_b| {
        positions_a.push(i_a);
        positions_b.push(i_b);
    });
    (positions_a, positions_b)
}
