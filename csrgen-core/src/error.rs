//! Error types for CSR encoding and validation

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while encoding or validating a CSR matrix
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CsrError {
    /// Malformed input handed to the encoder or a constructor
    InvalidInput(InputFault),
    /// The row-pointer / column-index layout is malformed
    Structural(StructuralFault),
    /// Decoding the CSR triple does not reproduce the source matrix
    RoundTrip {
        row: usize,
        col: usize,
        expected: f64,
        found: f64,
    },
    /// A diagonal entry of the source matrix is zero
    SingularDiagonal { index: usize },
    /// The source matrix is not symmetric at `(row, col)`
    Asymmetry { row: usize, col: usize },
}

/// Precondition violations, reported with enough context to find the caller bug
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputFault {
    /// Row or column count is zero
    EmptyDimension { rows: usize, cols: usize },
    /// `rows * cols` does not fit in `usize`
    DimensionOverflow { rows: usize, cols: usize },
    /// A column count or nonzero count does not fit the 32-bit index type
    IndexTypeOverflow { value: usize },
    /// Nonzero indices must be strictly ascending
    NotAscending {
        position: usize,
        previous: usize,
        index: usize,
    },
    /// A flattened index is outside `[0, rows * cols)`
    OutOfRange {
        position: usize,
        index: usize,
        limit: usize,
    },
    /// Backing storage does not match the declared shape
    LengthMismatch { expected: usize, found: usize },
    /// Symmetry is only defined for square matrices
    NotSquare { rows: usize, cols: usize },
}

/// Layout defects found while walking a CSR triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StructuralFault {
    /// CSR dimensions differ from the matrix it claims to encode
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// `row_ptr` must hold `rows + 1` entries
    RowPtrLength { expected: usize, found: usize },
    /// `row_ptr[0]` must be zero
    NonZeroOrigin { found: u32 },
    /// `row_ptr[row + 1] < row_ptr[row]`
    DecreasingRowPtr { row: usize },
    /// Fewer slots were available for a row than its span claims
    PartialSpan {
        row: usize,
        expected: usize,
        consumed: usize,
    },
    /// `row_ptr[rows]`, `col_idx.len()` and `values.len()` disagree
    NnzMismatch {
        row_ptr_end: usize,
        col_idx_len: usize,
        values_len: usize,
    },
    /// A stored column index is `>= cols`
    ColumnOutOfRange { slot: usize, col: u32, cols: usize },
    /// Column indices within a row are not strictly ascending
    UnsortedColumns { row: usize, slot: usize },
}

/// Error category, one per failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    InvalidInput,
    StructuralError,
    RoundTripError,
    SingularDiagonalError,
    AsymmetryError,
}

impl CsrError {
    /// Get the failure class of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            CsrError::InvalidInput(_) => ErrorKind::InvalidInput,
            CsrError::Structural(_) => ErrorKind::StructuralError,
            CsrError::RoundTrip { .. } => ErrorKind::RoundTripError,
            CsrError::SingularDiagonal { .. } => ErrorKind::SingularDiagonalError,
            CsrError::Asymmetry { .. } => ErrorKind::AsymmetryError,
        }
    }
}

impl From<InputFault> for CsrError {
    fn from(fault: InputFault) -> Self {
        CsrError::InvalidInput(fault)
    }
}

impl From<StructuralFault> for CsrError {
    fn from(fault: StructuralFault) -> Self {
        CsrError::Structural(fault)
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::StructuralError => "StructuralError",
            ErrorKind::RoundTripError => "RoundTripError",
            ErrorKind::SingularDiagonalError => "SingularDiagonalError",
            ErrorKind::AsymmetryError => "AsymmetryError",
        };
        write!(f, "{msg}")
    }
}

impl core::fmt::Display for InputFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputFault::EmptyDimension { rows, cols } => {
                write!(f, "matrix dimensions {rows}x{cols} must both be positive")
            }
            InputFault::DimensionOverflow { rows, cols } => {
                write!(f, "matrix dimensions {rows}x{cols} overflow the index space")
            }
            InputFault::IndexTypeOverflow { value } => {
                write!(f, "{value} does not fit a 32-bit index")
            }
            InputFault::NotAscending {
                position,
                previous,
                index,
            } => write!(
                f,
                "nonzero index {index} at position {position} does not follow {previous}"
            ),
            InputFault::OutOfRange {
                position,
                index,
                limit,
            } => write!(
                f,
                "nonzero index {index} at position {position} is outside [0, {limit})"
            ),
            InputFault::LengthMismatch { expected, found } => {
                write!(f, "expected {expected} elements, found {found}")
            }
            InputFault::NotSquare { rows, cols } => {
                write!(f, "matrix is {rows}x{cols}, not square")
            }
        }
    }
}

impl core::fmt::Display for StructuralFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StructuralFault::ShapeMismatch { expected, found } => write!(
                f,
                "CSR is {}x{}, source matrix is {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            StructuralFault::RowPtrLength { expected, found } => {
                write!(f, "row_ptr has {found} entries, expected {expected}")
            }
            StructuralFault::NonZeroOrigin { found } => {
                write!(f, "row_ptr[0] is {found}, expected 0")
            }
            StructuralFault::DecreasingRowPtr { row } => {
                write!(f, "row_ptr decreases after row {row}")
            }
            StructuralFault::PartialSpan {
                row,
                expected,
                consumed,
            } => write!(
                f,
                "row {row} spans {expected} entries but only {consumed} were available"
            ),
            StructuralFault::NnzMismatch {
                row_ptr_end,
                col_idx_len,
                values_len,
            } => write!(
                f,
                "row_ptr ends at {row_ptr_end} but col_idx has {col_idx_len} \
                 and values has {values_len} entries"
            ),
            StructuralFault::ColumnOutOfRange { slot, col, cols } => {
                write!(f, "slot {slot} holds column {col}, outside [0, {cols})")
            }
            StructuralFault::UnsortedColumns { row, slot } => {
                write!(f, "row {row} has non-ascending columns at slot {slot}")
            }
        }
    }
}

impl core::fmt::Display for CsrError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CsrError::InvalidInput(fault) => write!(f, "{}: {fault}", self.kind()),
            CsrError::Structural(fault) => write!(f, "{}: {fault}", self.kind()),
            CsrError::RoundTrip {
                row,
                col,
                expected,
                found,
            } => write!(
                f,
                "{}: decoded ({row}, {col}) is {found}, source holds {expected}",
                self.kind()
            ),
            CsrError::SingularDiagonal { index } => {
                write!(f, "{}: diagonal entry ({index}, {index}) is zero", self.kind())
            }
            CsrError::Asymmetry { row, col } => write!(
                f,
                "{}: entry ({row}, {col}) differs from ({col}, {row})",
                self.kind()
            ),
        }
    }
}

impl core::error::Error for CsrError {}

/// Result type for CSR operations
pub type Result<T> = core::result::Result<T, CsrError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_kind() {
        assert_eq!(
            CsrError::from(InputFault::EmptyDimension { rows: 0, cols: 3 }).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            CsrError::from(StructuralFault::DecreasingRowPtr { row: 2 }).kind(),
            ErrorKind::StructuralError
        );
        assert_eq!(
            CsrError::SingularDiagonal { index: 0 }.kind(),
            ErrorKind::SingularDiagonalError
        );
        assert_eq!(
            CsrError::Asymmetry { row: 0, col: 1 }.kind(),
            ErrorKind::AsymmetryError
        );
    }

    #[test]
    fn test_display_carries_location() {
        let err = CsrError::Asymmetry { row: 0, col: 1 };
        assert_eq!(
            err.to_string(),
            "AsymmetryError: entry (0, 1) differs from (1, 0)"
        );

        let err = CsrError::from(StructuralFault::PartialSpan {
            row: 3,
            expected: 4,
            consumed: 1,
        });
        assert_eq!(
            err.to_string(),
            "StructuralError: row 3 spans 4 entries but only 1 were available"
        );
    }
}
