// the reason this is named mod.rs has to do with some complexities of how
// testing is handled
//
// we are following the advice of the rust book
// https://doc.rust-lang.org/book/ch11-03-test-organization.html#submodules-in-integration-tests
#![allow(dead_code)]

use hklstat::{MergedView, MillerIndex};
use rand::distr::{Distribution, Uniform};
use rand_xoshiro::Xoshiro256PlusPlus;

// based on numpy!
// https://numpy.org/doc/stable/reference/generated/numpy.isclose.html
pub fn isclose(actual: f64, ref_val: f64, rtol: f64, atol: f64) -> bool {
    let actual_nan = actual.is_nan();
    let ref_nan = ref_val.is_nan();
    if actual_nan || ref_nan {
        actual_nan && ref_nan
    } else {
        (actual - ref_val).abs() <= (atol + rtol * ref_val.abs())
    }
}

/// draws Miller indices with every component in `[-max_abs, max_abs]`.
///
/// Use a small `max_abs` to get lots of repeated keys
pub fn random_indices(rng: &mut Xoshiro256PlusPlus, n: usize, max_abs: i32) -> Vec<MillerIndex> {
    let component_dist = Uniform::new_inclusive(-max_abs, max_abs).unwrap();
    (0..n)
        .map(|_| {
            MillerIndex::new(
                component_dist.sample(rng),
                component_dist.sample(rng),
                component_dist.sample(rng),
            )
        })
        .collect()
}

pub fn random_values(rng: &mut Xoshiro256PlusPlus, n: usize, low: f64, high: f64) -> Vec<f64> {
    let value_dist = Uniform::new(low, high).unwrap();
    (0..n).map(|_| value_dist.sample(rng)).collect()
}

/// A single merged reflection, pulled out of a [`MergedView`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MergedEntry {
    pub hkl: MillerIndex,
    pub value: f64,
    pub sigma: f64,
    pub redundancy: u32,
}

/// The merged outputs come out in hash-map order. This puts them in
/// lexicographic order so that tests can compare them.
pub fn sorted_entries(view: MergedView) -> Vec<MergedEntry> {
    let mut entries: Vec<MergedEntry> = (0..view.len())
        .map(|i| MergedEntry {
            hkl: view.indices[i],
            value: view.data[i],
            sigma: view.sigmas[i],
            redundancy: view.redundancies[i],
        })
        .collect();
    entries.sort_by(|a, b| a.hkl.0.cmp(&b.hkl.0));
    entries
}
