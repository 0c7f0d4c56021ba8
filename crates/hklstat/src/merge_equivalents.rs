//! Implements the streaming accumulator that merges symmetry-equivalent (or
//! simply repeated) observations of each reflection.
//!
//! The accumulator moves through the states Empty -> Accumulating -> Merged.
//! Merging doesn't consume the accumulated statistics, so observations can
//! still be added after a merge; a later call to merge re-derives the outputs
//! from the current state.

use crate::{Error, SigmaMethod};
use hklstat_nostd_internal::{MergeStats, MillerIndex, ObservationBatch};
use std::collections::{HashMap, hash_map::Entry};
use tracing::debug;

/// Borrowed view of the 4 parallel output sequences produced by the most
/// recent merge.
///
/// The order of the entries is the (unspecified) iteration order of the
/// accumulator's internal hash map. It is neither sorted nor insertion
/// order. Sort the entries yourself if you need a particular order.
#[derive(Clone, Copy, Debug)]
pub struct MergedView<'a> {
    pub indices: &'a [MillerIndex],
    pub data: &'a [f64],
    pub sigmas: &'a [f64],
    pub redundancies: &'a [u32],
}

impl MergedView<'_> {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Merges repeated observations of each reflection with online (single-pass)
/// weighted mean & variance updates.
///
/// # Example
/// ```
/// use hklstat::{MergeEquivalents, MillerIndex};
///
/// let mut merger = MergeEquivalents::new();
/// merger.add_observations(
///     &[MillerIndex::new(1, 0, 0), MillerIndex::new(1, 0, 0)],
///     &[10.0, 12.0],
/// );
/// merger.merge("population sigma").unwrap();
/// assert_eq!(merger.data(), &[11.0]);
/// assert_eq!(merger.redundancies(), &[2]);
/// ```
///
/// # Concurrency
/// A single instance must not be shared across threads while it is being
/// mutated. The borrow checker already enforces this for safe code.
#[derive(Clone, Debug, Default)]
pub struct MergeEquivalents {
    records: HashMap<MillerIndex, MergeStats>,
    n_observations: usize,
    // outputs of the last merge
    indices: Vec<MillerIndex>,
    data: Vec<f64>,
    sigmas: Vec<f64>,
    redundancies: Vec<u32>,
}

impl MergeEquivalents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a batch of observations, each with unit weight.
    ///
    /// # Panics
    /// If `indices` and `data` have different lengths
    pub fn add_observations(&mut self, indices: &[MillerIndex], data: &[f64]) {
        self.add_batch(&ObservationBatch::new(indices, data, None));
    }

    /// Add a batch of observations, each weighted by `1/σ²`.
    ///
    /// Zero sigmas aren't guarded against (they produce infinite weights).
    ///
    /// # Panics
    /// If `indices`, `data` and `sigmas` don't all share the same length
    pub fn add_observations_with_sigmas(
        &mut self,
        indices: &[MillerIndex],
        data: &[f64],
        sigmas: &[f64],
    ) {
        self.add_batch(&ObservationBatch::new(indices, data, Some(sigmas)));
    }

    pub fn add_batch(&mut self, batch: &ObservationBatch) {
        if batch.is_empty() {
            return;
        }
        for (hkl, datum) in batch.iter() {
            match self.records.entry(hkl) {
                Entry::Occupied(mut entry) => entry.get_mut().consume(&datum),
                Entry::Vacant(entry) => {
                    entry.insert(MergeStats::from_first(&datum));
                }
            }
        }
        self.n_observations += batch.len();
        debug!(
            n_added = batch.len(),
            n_unique = self.records.len(),
            "added observations"
        );
    }

    /// Rebuild the output sequences from the accumulated statistics.
    ///
    /// `sigma` must be `"population sigma"` or `"experimental sigma"`. When
    /// it's anything else, the outputs are left untouched.
    pub fn merge(&mut self, sigma: &str) -> Result<(), Error> {
        let method: SigmaMethod = sigma.parse()?;
        self.merge_with(method);
        Ok(())
    }

    pub fn merge_with(&mut self, method: SigmaMethod) {
        self.indices.clear();
        self.data.clear();
        self.sigmas.clear();
        self.redundancies.clear();

        for (hkl, stats) in self.records.iter() {
            self.indices.push(*hkl);
            self.data.push(stats.mean());
            self.sigmas.push(method.standard_error(stats));
            self.redundancies.push(stats.redundancy());
        }
        debug!(n_unique = self.indices.len(), %method, "merged observations");
    }

    /// The Miller indices as of the last merge
    pub fn indices(&self) -> &[MillerIndex] {
        &self.indices
    }

    /// The merged values as of the last merge
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// The standard errors as of the last merge
    pub fn sigmas(&self) -> &[f64] {
        &self.sigmas
    }

    /// The redundancies as of the last merge
    pub fn redundancies(&self) -> &[u32] {
        &self.redundancies
    }

    pub fn merged(&self) -> MergedView<'_> {
        MergedView {
            indices: &self.indices,
            data: &self.data,
            sigmas: &self.sigmas,
            redundancies: &self.redundancies,
        }
    }

    /// The number of distinct reflections observed so far (which may differ
    /// from the number of outputs if observations were added after the last
    /// merge)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The total number of observations consumed so far
    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Discard all accumulated statistics and outputs
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
