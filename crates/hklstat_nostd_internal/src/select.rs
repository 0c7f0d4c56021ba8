//! The core of the logic for matching reflections across 2 unmerged datasets
//!
//! Experimental datasets routinely hold duplicate observations of a
//! reflection (and routinely lack others), so a query entry can match
//! zero, one, or several reference entries. None of these cases is an
//! error here. We simply report the number of matches to the caller.

use crate::index::MillerIndex;
use crate::search::lower_bound;
use crate::span::IndexSpan;

/// Marks every entry of the reference dataset that matches some query entry.
///
/// The reference entry `j` matches query entry `i` if
/// `sorted_indices[j] == query_indices[i]` and
/// `|sorted_data[j] - query_data[i]| < threshold`. After this returns,
/// `mask[j]` is `true` if and only if entry `j` matched at least one query
/// entry.
///
/// `on_match_count(i, n)` is called once for every query entry `i` (in order)
/// with the number of reference entries, `n`, that it matched.
///
/// # Preconditions
/// `sorted_indices` must be sorted under the span-packed order of
/// `sorted_indices` itself. This is NOT checked; violating it produces
/// missing matches rather than a panic.
///
/// # Panics
/// If `query_indices` & `query_data`, `sorted_indices` & `sorted_data`, or
/// `sorted_indices` & `mask` have different lengths.
pub fn fill_selection_mask(
    query_indices: &[MillerIndex],
    query_data: &[f64],
    sorted_indices: &[MillerIndex],
    sorted_data: &[f64],
    threshold: f64,
    mask: &mut [bool],
    mut on_match_count: impl FnMut(usize, usize),
) {
    assert_eq!(query_indices.len(), query_data.len());
    assert_eq!(sorted_indices.len(), sorted_data.len());
    assert_eq!(sorted_indices.len(), mask.len());

    mask.fill(false);

    let Some(span) = IndexSpan::from_indices(sorted_indices) else {
        // nothing can ever match an empty reference
        (0..query_indices.len()).for_each(|i| on_match_count(i, 0));
        return;
    };

    for (i, (hkl, &value)) in query_indices.iter().zip(query_data).enumerate() {
        let start = lower_bound(sorted_indices, hkl, &span);

        // equal keys are contiguous, so we can stop at the first mismatch
        let mut n_found = 0;
        for (j, candidate) in sorted_indices.iter().enumerate().skip(start) {
            if candidate != hkl {
                break;
            }
            let diff = sorted_data[j] - value;
            // NOTE: f64::abs isn't available in no_std crates
            let abs_diff = if diff < 0.0 { -diff } else { diff };
            if abs_diff < threshold {
                mask[j] = true;
                n_found += 1;
            }
        }
        on_match_count(i, n_found);
    }
}
