//! Row-major nonzero support of a matrix

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DenseMatrix, MatrixElement};

/// Flattened row-major indices (`row * cols + col`) of the nonzero cells
///
/// Sets built with [`NonzeroSet::from_dense`] are strictly ascending by
/// construction. Sets built with [`NonzeroSet::new`] are taken as given;
/// the encoder rejects them if they are unsorted or out of range.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NonzeroSet {
    indices: Vec<usize>,
}

impl NonzeroSet {
    /// Wrap a list of flattened indices without checking it
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Scan a dense matrix in row-major order
    pub fn from_dense<T: MatrixElement>(dense: &DenseMatrix<T>) -> Self {
        let indices = dense
            .as_slice()
            .iter()
            .enumerate()
            .filter(|(_, value)| !value.is_zero())
            .map(|(idx, _)| idx)
            .collect();
        Self { indices }
    }

    /// Flattened indices
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Number of nonzero cells
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_from_dense_is_row_major() {
        let m = DenseMatrix::from_rows(&[
            vec![0.0, 4.0, 0.0],
            vec![0.0, 0.0, 0.0],
            vec![7.0, 0.0, -1.0],
        ])
        .unwrap();
        let set = NonzeroSet::from_dense(&m);
        assert_eq!(set.as_slice(), &[1, 6, 8]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_negative_zero_is_not_stored() {
        let m = DenseMatrix::from_rows(&[vec![-0.0, 1.0]]).unwrap();
        assert_eq!(NonzeroSet::from_dense(&m).as_slice(), &[1]);
    }
}
