//! Core machinery for working with Miller-index datasets that doesn't require
//! the standard library (or an allocator).
//!
//! Nothing in here is intended to be used directly. The public API lives in
//! the `hklstat` crate, which allocates the outputs and layers error
//! handling and diagnostics on top of these routines.
//!
//! # Orderings
//!
//! A [`MillerIndex`] deliberately doesn't implement [`Ord`]. We need 2
//! incompatible orderings over the same key type, and each one is
//! represented by a separate type implementing [`IndexOrder`]:
//! - [`FastLexicographic`] compares `(h, k, l)` component-by-component. It is
//!   a total order, independent of any other data.
//! - [`IndexSpan`] packs each key into a single integer, relative to the
//!   per-component bounds of a reference array, and compares the packed
//!   values. An [`IndexSpan`] is only meaningful for searching within the
//!   array it was built from.
#![no_std]

mod index;
mod intersect;
mod merge_stats;
mod observation;
mod permute;
mod search;
mod select;
mod span;

pub use index::{FastLexicographic, IndexOrder, MillerIndex};
pub use intersect::for_each_common_pair;
pub use merge_stats::MergeStats;
pub use observation::{Datum, ObservationBatch};
pub use permute::fill_sort_permutation;
pub use search::{is_sorted_by_order, lower_bound};
pub use select::fill_selection_mask;
pub use span::IndexSpan;
