//! Row-major nonzero set to CSR conversion
//!
//! The encoder makes a single forward pass over the ascending flattened
//! indices. Because the indices are row-major, crossing a multiple of
//! `cols` means the current row is finished; crossing several at once
//! means the rows in between are empty.

use alloc::vec::Vec;

use crate::{CsrMatrix, DenseMatrix, Index, InputFault, MatrixElement, NonzeroSet, Result};

/// Encode `rows x cols` nonzeros, given as flattened row-major indices, into CSR
///
/// `value_lookup` maps a flattened index to the value stored there. It is
/// called exactly once per index, in ascending order.
///
/// Fails with [`InputFault`] if a dimension is zero, if the indices are not
/// strictly ascending, if an index lies outside `[0, rows * cols)`, or if
/// the column count or nonzero count does not fit the 32-bit index type.
pub fn encode<T, F>(
    rows: usize,
    cols: usize,
    indices: &[usize],
    mut value_lookup: F,
) -> Result<CsrMatrix<T>>
where
    T: MatrixElement,
    F: FnMut(usize) -> T,
{
    check_preconditions(rows, cols, indices)?;

    let nnz = indices.len();
    let mut row_ptr: Vec<Index> = Vec::with_capacity(rows + 1);
    let mut col_idx: Vec<Index> = Vec::with_capacity(nnz);
    let mut values: Vec<T> = Vec::with_capacity(nnz);

    row_ptr.push(0);
    // Flattened index where the next unclosed row begins
    let mut boundary = cols;
    let mut rows_closed = 0usize;

    for (processed, &idx) in indices.iter().enumerate() {
        while idx >= boundary {
            row_ptr.push(processed as Index);
            boundary += cols;
            rows_closed += 1;
        }
        col_idx.push((idx - (boundary - cols)) as Index);
        values.push(value_lookup(idx));
    }

    for _ in rows_closed..rows {
        row_ptr.push(nnz as Index);
    }

    Ok(CsrMatrix::from_raw_parts(rows, cols, row_ptr, col_idx, values))
}

/// Encode a [`NonzeroSet`] whose values are looked up by flattened index
pub fn encode_nonzero_set<T, F>(
    rows: usize,
    cols: usize,
    nonzeros: &NonzeroSet,
    value_lookup: F,
) -> Result<CsrMatrix<T>>
where
    T: MatrixElement,
    F: FnMut(usize) -> T,
{
    encode(rows, cols, nonzeros.as_slice(), value_lookup)
}

/// Scan a dense matrix and encode its nonzero cells
pub fn encode_dense<T: MatrixElement>(dense: &DenseMatrix<T>) -> Result<CsrMatrix<T>> {
    let nonzeros = dense.nonzero_set();
    let data = dense.as_slice();
    encode_nonzero_set(dense.rows(), dense.cols(), &nonzeros, |idx| data[idx])
}

/// Check the encoder's input contract
fn check_preconditions(rows: usize, cols: usize, indices: &[usize]) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(InputFault::EmptyDimension { rows, cols }.into());
    }
    let limit = rows
        .checked_mul(cols)
        .ok_or(InputFault::DimensionOverflow { rows, cols })?;

    if Index::try_from(cols).is_err() {
        return Err(InputFault::IndexTypeOverflow { value: cols }.into());
    }
    if Index::try_from(indices.len()).is_err() {
        return Err(InputFault::IndexTypeOverflow {
            value: indices.len(),
        }
        .into());
    }

    for (position, &index) in indices.iter().enumerate() {
        if index >= limit {
            return Err(InputFault::OutOfRange {
                position,
                index,
                limit,
            }
            .into());
        }
        if position > 0 && index <= indices[position - 1] {
            return Err(InputFault::NotAscending {
                position,
                previous: indices[position - 1],
                index,
            }
            .into());
        }
    }

    Ok(())
}
