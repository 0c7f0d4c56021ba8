/*!
Provides native routines for the numerically intensive parts of processing
unmerged X-ray diffraction data, where each observation is keyed by a
[Miller index](https://en.wikipedia.org/wiki/Miller_index) `(h, k, l)`.

# Overview

There are 2 kinds of functionality:

- stateless batch operations over complete arrays of Miller indices:
  - [`make_selection_for_xds_unmerged`] (and [`match_sorted_unmerged`])
    matches reflections between 2 unmerged datasets
  - [`my_common_indices`] finds the positions of the keys shared by 2
    sorted arrays
  - [`sort_permutation_fast_less`] & [`sort_permutation_packed`] compute
    sort permutations without touching the input
- [`MergeEquivalents`], a streaming accumulator that merges repeated
  observations of the same reflection into a mean, a standard error and a
  redundancy count.

# Orderings

Miller indices are ordered 2 different ways (see [`FastLexicographic`] and
[`IndexSpan`]). The matching routine searches with the span-packed order
while every other routine uses the fast lexicographic order. Each routine
documents which order its sorted inputs must satisfy. These preconditions
are never checked at runtime (use [`is_sorted_by_order`] if you need to).

# Diagnostics

Diagnostics are emitted through [`tracing`]. We never install a subscriber.

# Developer Guide

See the crate-level documentation for [`hklstat_nostd_internal`].
*/

#![deny(rustdoc::broken_intra_doc_links)]

// inform build-system of the crates in this package
mod array;
mod common_indices;
mod error;
mod matching;
mod merge_equivalents;
mod permutation;
mod sigma;

// pull in symbols that visible outside of the package
pub use array::{miller_indices_from_array, miller_indices_to_array};
pub use common_indices::my_common_indices;
pub use error::Error;
pub use hklstat_nostd_internal::{
    Datum, FastLexicographic, IndexOrder, IndexSpan, MergeStats, MillerIndex, ObservationBatch,
    is_sorted_by_order,
};
pub use matching::{SelectionOutcome, make_selection_for_xds_unmerged, match_sorted_unmerged};
pub use merge_equivalents::{MergeEquivalents, MergedView};
pub use permutation::{select_by_permutation, sort_permutation_fast_less, sort_permutation_packed};
pub use sigma::SigmaMethod;
