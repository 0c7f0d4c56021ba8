use crate::index::{IndexOrder, MillerIndex};

/// Fills `perm` with the permutation that sorts `indices` under `order`.
///
/// Afterwards `indices[perm[0]] <= indices[perm[1]] <= ...`. `indices` is left
/// untouched. We use an unstable sort, so the relative order of equal keys is
/// unspecified.
///
/// # Panics
/// If `perm.len() != indices.len()`
pub fn fill_sort_permutation(indices: &[MillerIndex], perm: &mut [usize], order: &impl IndexOrder) {
    assert_eq!(indices.len(), perm.len());
    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }
    perm.sort_unstable_by(|&lhs, &rhs| order.compare(&indices[lhs], &indices[rhs]));
}
