use hklstat_nostd_internal::{FastLexicographic, IndexSpan, MillerIndex, fill_sort_permutation};

/// Returns the permutation that sorts `indices` in fast lexicographic order
/// (h, then k, then l). The relative order of equal keys is unspecified.
pub fn sort_permutation_fast_less(indices: &[MillerIndex]) -> Vec<usize> {
    let mut perm = vec![0; indices.len()];
    fill_sort_permutation(indices, &mut perm, &FastLexicographic);
    perm
}

/// Returns the permutation that sorts `indices` under the span-packed order
/// derived from `indices` itself.
///
/// Reorder a reference dataset with this before passing it to
/// [`crate::make_selection_for_xds_unmerged`].
pub fn sort_permutation_packed(indices: &[MillerIndex]) -> Vec<usize> {
    let mut perm = vec![0; indices.len()];
    if let Some(span) = IndexSpan::from_indices(indices) {
        fill_sort_permutation(indices, &mut perm, &span);
    }
    perm
}

/// Gathers `values[perm[0]], values[perm[1]], ...`
///
/// # Panics
/// If any entry of `perm` is out of bounds for `values`
pub fn select_by_permutation<T: Clone>(values: &[T], perm: &[usize]) -> Vec<T> {
    perm.iter().map(|&i| values[i].clone()).collect()
}
