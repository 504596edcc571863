//! Layout checks that need only the CSR triple
//!
//! These guard against the row-boundary bug class of the encoder: a row
//! pointer that advances too early or too late leaves one row with a
//! partial span and shifts every entry after it.

use crate::{CsrMatrix, MatrixElement, Result, StructuralFault};

/// Walk `row_ptr` row by row and check every span against the slot arrays
///
/// Checks, in order: `row_ptr` length and origin, per-row span
/// monotonicity and availability, column range, per-row column order, and
/// finally that `row_ptr[rows]` equals both slot array lengths.
pub fn check_structure<T: MatrixElement>(csr: &CsrMatrix<T>) -> Result<()> {
    let rows = csr.rows();
    let row_ptr = csr.row_ptr();
    let col_idx = csr.col_idx();

    if row_ptr.len().checked_sub(1) != Some(rows) {
        return Err(StructuralFault::RowPtrLength {
            expected: rows.saturating_add(1),
            found: row_ptr.len(),
        }
        .into());
    }
    if row_ptr[0] != 0 {
        return Err(StructuralFault::NonZeroOrigin { found: row_ptr[0] }.into());
    }

    let slots = col_idx.len().min(csr.values().len());
    let mut cursor = 0usize;

    for row in 0..rows {
        let start = row_ptr[row] as usize;
        let end = row_ptr[row + 1] as usize;
        if end < start {
            return Err(StructuralFault::DecreasingRowPtr { row }.into());
        }

        let expected = end - start;
        let mut consumed = 0usize;
        while cursor < slots && consumed < expected {
            check_slot(csr, row, start, cursor)?;
            cursor += 1;
            consumed += 1;
        }
        if consumed != expected {
            return Err(StructuralFault::PartialSpan {
                row,
                expected,
                consumed,
            }
            .into());
        }
    }

    let row_ptr_end = row_ptr[rows] as usize;
    if row_ptr_end != col_idx.len() || row_ptr_end != csr.values().len() {
        return Err(StructuralFault::NnzMismatch {
            row_ptr_end,
            col_idx_len: col_idx.len(),
            values_len: csr.values().len(),
        }
        .into());
    }

    Ok(())
}

/// Column range and in-row ordering for one slot of `row` (which starts at `start`)
fn check_slot<T: MatrixElement>(
    csr: &CsrMatrix<T>,
    row: usize,
    start: usize,
    slot: usize,
) -> Result<()> {
    let col_idx = csr.col_idx();
    let col = col_idx[slot];
    if col as usize >= csr.cols() {
        return Err(StructuralFault::ColumnOutOfRange {
            slot,
            col,
            cols: csr.cols(),
        }
        .into());
    }
    if slot > start && col <= col_idx[slot - 1] {
        return Err(StructuralFault::UnsortedColumns { row, slot }.into());
    }
    Ok(())
}
