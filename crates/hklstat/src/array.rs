//! Conversions between the `(n, 3)` integer arrays that host environments
//! typically hold Miller indices in and slices of [`MillerIndex`]

use crate::Error;
use hklstat_nostd_internal::MillerIndex;
use ndarray::{Array2, ArrayView2, Axis};

/// Copies the rows of an `(n, 3)` array into a vector of Miller indices.
///
/// Any memory layout is accepted.
pub fn miller_indices_from_array(array: ArrayView2<i32>) -> Result<Vec<MillerIndex>, Error> {
    if array.len_of(Axis(1)) != 3 {
        return Err(Error::index_array_shape(array.shape().to_vec()));
    }
    Ok(array
        .rows()
        .into_iter()
        .map(|row| MillerIndex::new(row[0], row[1], row[2]))
        .collect())
}

/// Produces an `(n, 3)` array from a slice of Miller indices
pub fn miller_indices_to_array(indices: &[MillerIndex]) -> Array2<i32> {
    Array2::from_shape_fn((indices.len(), 3), |(i, dim)| indices[i].0[dim])
}
