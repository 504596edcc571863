//! Independent verification of a CSR encoding
//!
//! A wrong sparse encoding is invisible to the kernels that consume it, so
//! every dataset passes through [`validate`] before it is emitted. Each
//! check runs regardless of the others and records its own outcome.

pub mod content;
pub mod report;
pub mod structure;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use report::{Check, CheckStatus, ValidationReport};

use crate::{CsrMatrix, DenseMatrix, MatrixElement, StructuralFault};

/// Which domain checks to run on top of structure and decode-equivalence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationOptions {
    /// Require a nonzero diagonal
    pub diagonal_nonzero: bool,
    /// Require `A == Aᵀ`
    pub symmetry: bool,
}

impl ValidationOptions {
    /// Sparse matrix-vector datasets: any matrix is acceptable
    pub const fn sparse_matrix_vector() -> Self {
        Self {
            diagonal_nonzero: false,
            symmetry: false,
        }
    }

    /// Conjugate-gradient datasets: the solver needs a symmetric matrix
    /// with a nonzero diagonal
    pub const fn conjugate_gradient() -> Self {
        Self {
            diagonal_nonzero: true,
            symmetry: true,
        }
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self::sparse_matrix_vector()
    }
}

/// Verify that `csr` encodes `dense` and that `dense` meets the domain contract
pub fn validate<T: MatrixElement>(
    dense: &DenseMatrix<T>,
    csr: &CsrMatrix<T>,
    options: &ValidationOptions,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    let shape = check_shape(dense, csr).and_then(|()| structure::check_structure(csr));
    report.record(Check::Structure, shape.into());
    report.record(
        Check::DecodeEquivalence,
        content::check_round_trip(dense, csr).into(),
    );

    let diagonal = if options.diagonal_nonzero {
        content::check_diagonal(dense).into()
    } else {
        CheckStatus::Skipped
    };
    report.record(Check::DiagonalNonzero, diagonal);

    let symmetry = if options.symmetry {
        content::check_symmetry(dense).into()
    } else {
        CheckStatus::Skipped
    };
    report.record(Check::Symmetry, symmetry);

    report
}

fn check_shape<T: MatrixElement>(dense: &DenseMatrix<T>, csr: &CsrMatrix<T>) -> crate::Result<()> {
    let expected = (dense.rows(), dense.cols());
    let found = (csr.rows(), csr.cols());
    if expected != found {
        return Err(StructuralFault::ShapeMismatch { expected, found }.into());
    }
    Ok(())
}
