//! Defines the running statistics tracked for each merged reflection
//!
//! We track a weighted mean and the weighted sum of squared deviations with a
//! Welford-style online update. For an incoming datum (value `v`, weight `w`)
//! and a record holding mean `m`, total weight `W` and `m2`:
//!
//! ```text
//! delta = v - m
//! R     = w * delta / (W + w)
//! m    <- m + R
//! m2   <- m2 + W * delta * R
//! W    <- W + w
//! ```
//!
//! The first datum for a reflection seeds the record with `m = v`, `W = w`
//! and `m2 = w * v²`. That seed isn't what you would get by applying the
//! update above to an empty record (which gives `m2 = 0`). It's the
//! convention that existing merged datasets were produced with, and the
//! population standard error depends on it, so we keep it.

use crate::observation::Datum;

/// Running statistics for all observations of a single reflection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MergeStats {
    mean: f64,
    weight: f64,
    m2: f64,
    redundancy: u32,
}

impl MergeStats {
    /// Seed a record from a reflection's first observation
    pub fn from_first(datum: &Datum) -> Self {
        MergeStats {
            mean: datum.value,
            weight: datum.weight,
            m2: datum.weight * datum.value * datum.value,
            redundancy: 1,
        }
    }

    /// consume a subsequent observation of the same reflection
    #[inline]
    pub fn consume(&mut self, datum: &Datum) {
        let delta = datum.value - self.mean;
        let tot_weight = datum.weight + self.weight;
        let r = datum.weight * delta / tot_weight;
        self.mean += r;
        self.m2 += self.weight * delta * r;
        self.weight = tot_weight;
        self.redundancy += 1;
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn m2(&self) -> f64 {
        self.m2
    }

    pub fn redundancy(&self) -> u32 {
        self.redundancy
    }
}
