//! Value-level checks against the source matrix

use alloc::vec::Vec;

use crate::{CsrError, CsrMatrix, DenseMatrix, InputFault, MatrixElement, Result};

/// Rebuild a `rows x cols` row-major grid from the CSR slots
///
/// Slots whose row span or column cannot be placed in the grid are
/// skipped, so this never panics on a malformed triple. Structural
/// defects are reported by the structure check; here they surface as
/// value mismatches.
pub fn decode_lenient<T: MatrixElement>(csr: &CsrMatrix<T>, rows: usize, cols: usize) -> Vec<T> {
    let mut grid = alloc::vec![T::default(); rows * cols];
    let row_ptr = csr.row_ptr();
    let slots = csr.col_idx().len().min(csr.values().len());

    for row in 0..rows.min(row_ptr.len().saturating_sub(1)) {
        let start = (row_ptr[row] as usize).min(slots);
        let end = (row_ptr[row + 1] as usize).min(slots);
        for slot in start..end {
            let col = csr.col_idx()[slot] as usize;
            if col < cols {
                grid[row * cols + col] = csr.values()[slot];
            }
        }
    }

    grid
}

/// Decoding the CSR triple must reproduce `dense` cell for cell
///
/// Reports the first differing coordinate in row-major order.
pub fn check_round_trip<T: MatrixElement>(
    dense: &DenseMatrix<T>,
    csr: &CsrMatrix<T>,
) -> Result<()> {
    let cols = dense.cols();
    let decoded = decode_lenient(csr, dense.rows(), cols);

    let mismatch = dense
        .as_slice()
        .iter()
        .zip(&decoded)
        .position(|(expected, found)| !expected.same_value(found));

    match mismatch {
        None => Ok(()),
        Some(idx) => Err(CsrError::RoundTrip {
            row: idx / cols,
            col: idx % cols,
            expected: dense.as_slice()[idx].to_f64(),
            found: decoded[idx].to_f64(),
        }),
    }
}

/// Every diagonal entry must be nonzero
pub fn check_diagonal<T: MatrixElement>(dense: &DenseMatrix<T>) -> Result<()> {
    let n = dense.rows().min(dense.cols());
    match (0..n).find(|&i| dense[(i, i)].is_zero()) {
        None => Ok(()),
        Some(index) => Err(CsrError::SingularDiagonal { index }),
    }
}

/// `dense[i][j] == dense[j][i]` for every pair
///
/// Scans the upper triangle row by row and reports the first offending
/// `(row, col)` with `row < col`.
pub fn check_symmetry<T: MatrixElement>(dense: &DenseMatrix<T>) -> Result<()> {
    let n = dense.rows();
    if dense.cols() != n {
        return Err(InputFault::NotSquare {
            rows: n,
            cols: dense.cols(),
        }
        .into());
    }

    for row in 0..n {
        for col in row + 1..n {
            if !dense[(row, col)].same_value(&dense[(col, row)]) {
                return Err(CsrError::Asymmetry { row, col });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_dense;
    use alloc::vec;

    fn spd3() -> DenseMatrix<f64> {
        DenseMatrix::from_rows(&[
            vec![4.0, 1.0, 0.0],
            vec![1.0, 3.0, 0.5],
            vec![0.0, 0.5, 2.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_round_trip_of_encoder_output() {
        let dense = spd3();
        let csr = encode_dense(&dense).unwrap();
        assert_eq!(decode_lenient(&csr, 3, 3), dense.as_slice());
        assert_eq!(check_round_trip(&dense, &csr), Ok(()));
    }

    #[test]
    fn test_round_trip_reports_first_mismatch() {
        let dense = spd3();
        let (row_ptr, mut col_idx, values) = encode_dense(&dense).unwrap().into_parts();
        // Shift the (1, 2) entry to (1, 1)
        col_idx[4] = 1;
        let csr = CsrMatrix::from_raw_parts(3, 3, row_ptr, col_idx, values);
        assert_eq!(
            check_round_trip(&dense, &csr),
            Err(CsrError::RoundTrip {
                row: 1,
                col: 1,
                expected: 3.0,
                found: 0.5
            })
        );
    }

    #[test]
    fn test_round_trip_detects_dropped_row() {
        let dense = spd3();
        // Row 0 closed one entry early: its second value lands in row 1
        let csr = CsrMatrix::from_raw_parts(
            3,
            3,
            vec![0, 1, 4, 6],
            vec![0, 1, 0, 1, 2, 1, 2],
            vec![4.0, 1.0, 1.0, 3.0, 0.5, 0.5, 2.0],
        );
        assert_eq!(
            check_round_trip(&dense, &csr),
            Err(CsrError::RoundTrip {
                row: 0,
                col: 1,
                expected: 1.0,
                found: 0.0
            })
        );
    }

    #[test]
    fn test_lenient_decode_ignores_impossible_slots() {
        let csr = CsrMatrix::from_raw_parts(2, 2, vec![0, 5, 1], vec![0, 9], vec![1.0, 2.0]);
        assert_eq!(decode_lenient(&csr, 2, 2), vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_singular_diagonal() {
        let dense = DenseMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 2.0]]).unwrap();
        assert_eq!(
            check_diagonal(&dense),
            Err(CsrError::SingularDiagonal { index: 0 })
        );
        assert_eq!(check_diagonal(&spd3()), Ok(()));
    }

    #[test]
    fn test_asymmetry() {
        let dense = DenseMatrix::from_rows(&[vec![1.0, 5.0], vec![7.0, 1.0]]).unwrap();
        assert_eq!(
            check_symmetry(&dense),
            Err(CsrError::Asymmetry { row: 0, col: 1 })
        );
        assert_eq!(check_symmetry(&spd3()), Ok(()));
    }

    #[test]
    fn test_nan_survives_round_trip_and_symmetry() {
        let dense = DenseMatrix::from_rows(&[
            vec![1.0, f64::NAN],
            vec![f64::NAN, f64::INFINITY],
        ])
        .unwrap();
        let csr = encode_dense(&dense).unwrap();
        assert_eq!(csr.values().len(), 4);
        assert_eq!(check_round_trip(&dense, &csr), Ok(()));
        assert_eq!(check_symmetry(&dense), Ok(()));
        assert_eq!(check_diagonal(&dense), Ok(()));
    }

    #[test]
    fn test_nan_against_number_is_asymmetric() {
        let dense = DenseMatrix::from_rows(&[vec![1.0, f64::NAN], vec![2.0, 1.0]]).unwrap();
        assert_eq!(
            check_symmetry(&dense),
            Err(CsrError::Asymmetry { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_symmetry_requires_square() {
        let dense = DenseMatrix::<f64>::zeros(2, 3);
        assert_eq!(
            check_symmetry(&dense),
            Err(CsrError::InvalidInput(InputFault::NotSquare { rows: 2, cols: 3 }))
        );
    }
}
