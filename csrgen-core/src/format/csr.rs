//! Compressed Sparse Row matrix
//!
//! CSR stores:
//! - `row_ptr`: `rows + 1` offsets; row `r` owns slots `row_ptr[r]..row_ptr[r + 1]`
//! - `col_idx`: logical column of every stored value
//! - `values`: nonzero values in row-major order

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::validation::structure::check_structure;
use crate::{DenseMatrix, Index, MatrixElement, Result, SparseMatrix};

/// CSR triple together with the logical matrix shape
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CsrMatrix<T> {
    rows: usize,
    cols: usize,
    row_ptr: Vec<Index>,
    col_idx: Vec<Index>,
    values: Vec<T>,
}

impl<T: MatrixElement> CsrMatrix<T> {
    /// Assemble a CSR matrix from raw arrays without checking them
    ///
    /// Use [`crate::validate`] or [`CsrMatrix::to_dense`] to prove a triple
    /// obtained this way is well formed.
    pub fn from_raw_parts(
        rows: usize,
        cols: usize,
        row_ptr: Vec<Index>,
        col_idx: Vec<Index>,
        values: Vec<T>,
    ) -> Self {
        Self {
            rows,
            cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Split into `(row_ptr, col_idx, values)`
    pub fn into_parts(self) -> (Vec<Index>, Vec<Index>, Vec<T>) {
        (self.row_ptr, self.col_idx, self.values)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row offsets
    pub fn row_ptr(&self) -> &[Index] {
        &self.row_ptr
    }

    /// Column index of every stored value
    pub fn col_idx(&self) -> &[Index] {
        &self.col_idx
    }

    /// Stored values
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Columns and values of one row
    ///
    /// Returns `None` for a row outside the matrix or a span the arrays
    /// cannot satisfy.
    pub fn row(&self, row: usize) -> Option<(&[Index], &[T])> {
        let start = *self.row_ptr.get(row)? as usize;
        let end = *self.row_ptr.get(row + 1)? as usize;
        Some((self.col_idx.get(start..end)?, self.values.get(start..end)?))
    }

    /// Decode back to a dense matrix, rejecting malformed layouts
    pub fn to_dense(&self) -> Result<DenseMatrix<T>> {
        check_structure(self)?;

        let mut dense = DenseMatrix::zeros(self.rows, self.cols);
        for row in 0..self.rows {
            let start = self.row_ptr[row] as usize;
            let end = self.row_ptr[row + 1] as usize;
            for slot in start..end {
                dense[(row, self.col_idx[slot] as usize)] = self.values[slot];
            }
        }
        Ok(dense)
    }
}

impl<T: MatrixElement> SparseMatrix for CsrMatrix<T> {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CsrError, StructuralFault};
    use alloc::vec;

    fn sample() -> CsrMatrix<f64> {
        // [1 0 2]
        // [0 0 0]
        // [0 3 0]
        CsrMatrix::from_raw_parts(
            3,
            3,
            vec![0, 2, 2, 3],
            vec![0, 2, 1],
            vec![1.0, 2.0, 3.0],
        )
    }

    #[test]
    fn test_row_access() {
        let csr = sample();
        assert_eq!(csr.row(0), Some((&[0, 2][..], &[1.0, 2.0][..])));
        assert_eq!(csr.row(1), Some((&[][..], &[][..])));
        assert_eq!(csr.row(3), None);
    }

    #[test]
    fn test_sparsity() {
        let csr = sample();
        assert_eq!(csr.dimensions(), (3, 3));
        assert_eq!(csr.nnz(), 3);
        assert_eq!(csr.sparsity(), 3.0 / 9.0);
    }

    #[test]
    fn test_to_dense() {
        let dense = sample().to_dense().unwrap();
        assert_eq!(dense.as_slice(), &[1.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn test_to_dense_rejects_short_row_ptr() {
        let csr =
            CsrMatrix::from_raw_parts(3, 3, vec![0, 2, 3], vec![0, 2, 1], vec![1.0, 2.0, 3.0]);
        assert_eq!(
            csr.to_dense().unwrap_err(),
            CsrError::Structural(StructuralFault::RowPtrLength {
                expected: 4,
                found: 3
            })
        );
    }
}
