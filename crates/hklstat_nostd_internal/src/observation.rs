use crate::index::MillerIndex;

/// A single observation's contribution to a merged reflection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Datum {
    pub value: f64,
    pub weight: f64,
}

/// A borrowed batch of unmerged observations.
///
/// The constituent slices are parallel arrays (entry `i` of each slice
/// describes observation `i`).
#[derive(Clone, Copy)]
pub struct ObservationBatch<'a> {
    indices: &'a [MillerIndex],
    values: &'a [f64],
    sigmas: Option<&'a [f64]>,
}

impl<'a> ObservationBatch<'a> {
    /// Create a new batch.
    ///
    /// # Panics
    /// Mismatched lengths are a bug in the calling code, so we fail
    /// immediately.
    pub fn new(
        indices: &'a [MillerIndex],
        values: &'a [f64],
        sigmas: Option<&'a [f64]>,
    ) -> ObservationBatch<'a> {
        assert_eq!(
            indices.len(),
            values.len(),
            "indices and values must have the same length"
        );
        if let Some(sigmas) = sigmas {
            assert_eq!(
                indices.len(),
                sigmas.len(),
                "indices and sigmas must have the same length"
            );
        }
        ObservationBatch {
            indices,
            values,
            sigmas,
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// When sigmas are provided, each observation is weighted by `1/σ²`.
    /// Otherwise, every observation has unit weight.
    ///
    /// A sigma of zero produces an infinite weight. That's up to the caller.
    #[inline]
    pub fn weight(&self, i: usize) -> f64 {
        match self.sigmas {
            Some(sigmas) => 1.0 / (sigmas[i] * sigmas[i]),
            None => 1.0,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MillerIndex, Datum)> + 'a {
        let batch = *self;
        (0..batch.len()).map(move |i| {
            (
                batch.indices[i],
                Datum {
                    value: batch.values[i],
                    weight: batch.weight(i),
                },
            )
        })
    }
}
