//! Row-major dense matrix

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{InputFault, MatrixElement, NonzeroSet, Result, SparseMatrix};

/// Dense `rows x cols` matrix stored row-major
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DenseMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: MatrixElement> DenseMatrix<T> {
    /// Create an all-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }

    /// Wrap row-major storage, checking it matches the declared shape
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(InputFault::EmptyDimension { rows, cols }.into());
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(InputFault::DimensionOverflow { rows, cols })?;
        if data.len() != expected {
            return Err(InputFault::LengthMismatch {
                expected,
                found: data.len(),
            }
            .into());
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from a list of rows; every row must have the same length
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || cols == 0 {
            return Err(InputFault::EmptyDimension {
                rows: rows.len(),
                cols,
            }
            .into());
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(InputFault::LengthMismatch {
                    expected: cols,
                    found: row.len(),
                }
                .into());
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Build by evaluating `f(row, col)` for every cell
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self { rows, cols, data }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major backing storage
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major backing storage
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Flattened indices of every nonzero cell, ascending
    pub fn nonzero_set(&self) -> NonzeroSet {
        NonzeroSet::from_dense(self)
    }
}

impl<T: MatrixElement> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl<T: MatrixElement> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        &mut self.data[row * self.cols + col]
    }
}

impl<T: MatrixElement> SparseMatrix for DenseMatrix<T> {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.data.iter().filter(|value| !value.is_zero()).count()
    }
}
