//! Error types for dataset generation

use csrgen_core::{CsrError, ValidationReport};
use thiserror::Error;

/// Errors that abort a generation run
#[derive(Debug, Error)]
pub enum Error {
    /// The encoder or a matrix constructor rejected its input
    #[error("CSR encoding failed: {0}")]
    Csr(#[from] CsrError),

    /// The encoded dataset failed at least one validation check
    #[error("dataset rejected by validation: {first}")]
    Validation {
        #[source]
        first: CsrError,
        report: ValidationReport,
    },

    #[error("density {0} is outside [0, 1]")]
    InvalidDensity(f64),

    #[error("invalid matrix dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// A column does not fit a 32-bit byte offset
    #[error("column {col} overflows a 32-bit offset for {element_bytes}-byte elements")]
    ColumnOffsetOverflow { col: u32, element_bytes: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dataset generation
pub type Result<T> = std::result::Result<T, Error>;
