//! Run configuration for the dataset generators and the emitter

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::emit::ColumnEncoding;
use crate::{Error, Result};

/// Alignment expression used for array symbols unless overridden
pub const DEFAULT_ALIGNMENT: &str = "NR_LANES*4";

/// Sparse matrix-vector dataset parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpmvConfig {
    /// Number of matrix rows
    pub rows: usize,
    /// Number of matrix columns
    pub cols: usize,
    /// Fraction of cells that hold a value
    pub density: f64,
    /// RNG seed
    pub seed: u64,
}

impl SpmvConfig {
    pub fn new(rows: usize, cols: usize, density: f64) -> Self {
        Self {
            rows,
            cols,
            density,
            seed: 0,
        }
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject parameters no matrix can satisfy
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.rows, self.cols)?;
        check_density(self.density)
    }
}

impl Default for SpmvConfig {
    fn default() -> Self {
        Self::new(64, 64, 0.1)
    }
}

/// Conjugate-gradient dataset parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CgConfig {
    /// Order of the square system
    pub size: usize,
    /// Solver iterations the kernel runs
    pub steps: u64,
    /// Probability of an off-diagonal factor entry
    pub density: f64,
    /// RNG seed
    pub seed: u64,
}

impl CgConfig {
    pub fn new(size: usize, steps: u64, density: f64) -> Self {
        Self {
            size,
            steps,
            density,
            seed: 0,
        }
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject parameters no matrix can satisfy
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.size, self.size)?;
        check_density(self.density)
    }
}

impl Default for CgConfig {
    fn default() -> Self {
        Self::new(32, 10, 0.1)
    }
}

/// Layout options for the assembler emitter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmitConfig {
    /// `.balign` argument for array symbols
    pub alignment: String,
    /// How column indices are written
    pub column_encoding: ColumnEncoding,
}

impl EmitConfig {
    /// Set the `.balign` argument for array symbols
    pub fn with_alignment(mut self, alignment: impl Into<String>) -> Self {
        self.alignment = alignment.into();
        self
    }

    /// Set the column index encoding
    pub fn with_column_encoding(mut self, column_encoding: ColumnEncoding) -> Self {
        self.column_encoding = column_encoding;
        self
    }
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            alignment: DEFAULT_ALIGNMENT.to_string(),
            column_encoding: ColumnEncoding::byte_offsets::<f64>(),
        }
    }
}

pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
        return Err(Error::InvalidDimensions { rows, cols });
    }
    Ok(())
}

pub(crate) fn check_density(density: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::InvalidDensity(density));
    }
    Ok(())
}
