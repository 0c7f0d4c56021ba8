use hklstat_nostd_internal::{MillerIndex, fill_selection_mask};
use tracing::{debug, info};

/// The result of matching a query dataset against a sorted reference dataset
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionOutcome {
    /// one entry per reference entry, `true` when it matched some query entry
    pub mask: Vec<bool>,
    /// number of query entries that matched nothing
    pub n_unmatched: usize,
    /// number of query entries that matched more than 1 reference entry
    pub n_ambiguous: usize,
}

impl SelectionOutcome {
    pub fn n_selected(&self) -> usize {
        self.mask.iter().filter(|selected| **selected).count()
    }
}

/// Finds the entries of an unmerged reference dataset (`rhs`) that
/// correspond to entries of an unmerged query dataset (`lhs`).
///
/// A reference entry is selected when some query entry has an identical
/// Miller index and a value differing by less than `threshold` (e.g. spot
/// centroids on the frame-number axis). Query entries that match zero or
/// several reference entries aren't errors: they are counted in the outcome
/// and reported through [`tracing`].
///
/// # Preconditions
/// `rhs_indices` must already be sorted under the span-packed order of
/// `rhs_indices` itself (see [`crate::sort_permutation_packed`]). This is
/// not checked.
///
/// # Panics
/// If `lhs_indices.len() != lhs_data.len()` or
/// `rhs_indices.len() != rhs_data.len()`.
pub fn match_sorted_unmerged(
    lhs_indices: &[MillerIndex],
    lhs_data: &[f64],
    rhs_indices: &[MillerIndex],
    rhs_data: &[f64],
    threshold: f64,
) -> SelectionOutcome {
    let mut mask = vec![false; rhs_indices.len()];
    let mut n_unmatched = 0;
    let mut n_ambiguous = 0;

    fill_selection_mask(
        lhs_indices,
        lhs_data,
        rhs_indices,
        rhs_data,
        threshold,
        &mut mask,
        |i_lhs, n_found| match n_found {
            1 => {}
            0 => {
                n_unmatched += 1;
                debug!(
                    lhs_position = i_lhs,
                    hkl = ?lhs_indices[i_lhs].0,
                    "0 Found"
                );
            }
            _ => {
                n_ambiguous += 1;
                debug!(
                    lhs_position = i_lhs,
                    hkl = ?lhs_indices[i_lhs].0,
                    "{n_found} Found"
                );
            }
        },
    );

    let outcome = SelectionOutcome {
        mask,
        n_unmatched,
        n_ambiguous,
    };
    info!(
        n_lhs = lhs_indices.len(),
        n_rhs = rhs_indices.len(),
        n_selected = outcome.n_selected(),
        n_unmatched,
        n_ambiguous,
        "matched unmerged reflections"
    );
    outcome
}

/// Returns a selection over `rhs` of the entries that match an entry of
/// `lhs`. This is [`match_sorted_unmerged`] without the diagnostic counts.
pub fn make_selection_for_xds_unmerged(
    lhs_indices: &[MillerIndex],
    lhs_data: &[f64],
    rhs_indices: &[MillerIndex],
    rhs_data: &[f64],
    threshold: f64,
) -> Vec<bool> {
    match_sorted_unmerged(lhs_indices, lhs_data, rhs_indices, rhs_data, threshold).mask
}
