//! Generation pipeline: source, encode, validate
//!
//! [`encode_and_validate`] is the gate every dataset passes through. A
//! dataset is only constructed once its report is clean, so anything that
//! holds an [`SpmvDataset`] or [`CgDataset`] holds a proven encoding.

use std::io::Write;

use csrgen_core::{encode_nonzero_set, validate, CsrMatrix, DenseMatrix, SparseMatrix};
use csrgen_core::{ValidationOptions, ValidationReport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info, warn};

use crate::emit::{CsrSymbols, Emitter};
use crate::source::{random_vector, DenseSpd, MatrixSource, RandomSparse, SparseSpd};
use crate::{CgConfig, Error, Result, SpmvConfig};

/// A validated encoding together with the matrix it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Encoded<T> {
    pub dense: DenseMatrix<T>,
    pub csr: CsrMatrix<T>,
    pub report: ValidationReport,
}

/// Generate one matrix from `source`, encode it and validate the encoding
///
/// Every check in `options` runs before the outcome is decided. Any failure
/// returns [`Error::Validation`] carrying the first failure and the full
/// report.
pub fn encode_and_validate<S: MatrixSource>(
    source: &mut S,
    options: &ValidationOptions,
) -> Result<Encoded<S::Element>> {
    let (rows, cols) = source.shape();
    let generated = source.generate()?;
    info!(rows, cols, nnz = generated.nonzeros.len(), "generated matrix");

    let data = generated.dense.as_slice();
    let csr = encode_nonzero_set(rows, cols, &generated.nonzeros, |idx| data[idx])?;
    info!(row_ptr = csr.row_ptr().len(), nnz = csr.nnz(), "encoded CSR");

    let report = validate(&generated.dense, &csr, options);
    for (check, err) in report.failures() {
        warn!(%check, %err, "validation check failed");
    }
    let first_failure = report.failures().next().map(|(_, err)| err);
    if let Some(first) = first_failure {
        error!(%first, "aborting dataset");
        return Err(Error::Validation { first, report });
    }
    info!(sparsity = csr.sparsity(), "validated CSR");

    Ok(Encoded {
        dense: generated.dense,
        csr,
        report,
    })
}

/// Per-source RNG derived from the run's master RNG
fn child_rng(master: &mut StdRng) -> StdRng {
    StdRng::seed_from_u64(master.gen())
}

/// Sparse matrix-vector multiplication dataset
#[derive(Debug, Clone, PartialEq)]
pub struct SpmvDataset {
    pub csr: CsrMatrix<f64>,
    /// Input vector, one entry per column
    pub input: Vec<f64>,
    pub report: ValidationReport,
}

impl SpmvDataset {
    /// Generate and validate a dataset
    pub fn generate(config: &SpmvConfig) -> Result<Self> {
        config.validate()?;
        let mut master = StdRng::seed_from_u64(config.seed);

        let mut source = RandomSparse::with_rng(
            config.rows,
            config.cols,
            config.density,
            child_rng(&mut master),
        )?;
        let options = ValidationOptions::sparse_matrix_vector();
        let encoded = encode_and_validate(&mut source, &options)?;
        let input = random_vector(&mut master, config.cols);

        Ok(Self {
            csr: encoded.csr,
            input,
            report: encoded.report,
        })
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.csr.nnz()
    }

    /// Write the dataset as an assembler data section
    pub fn emit<W: Write>(&self, emitter: &mut Emitter<W>) -> Result<()> {
        let rows = self.csr.rows();
        emitter.begin_data_section()?;
        emitter.scalar_u64("R", rows as u64)?;
        emitter.scalar_u64("C", self.csr.cols() as u64)?;
        emitter.scalar_u64("NZ", self.nnz() as u64)?;
        emitter.csr(
            &CsrSymbols {
                row_ptr: "CSR_PROW",
                col_idx: "CSR_INDEX",
                values: "CSR_DATA",
            },
            &self.csr,
        )?;
        emitter.array("CSR_IN_VECTOR", &self.input)?;
        emitter.array("CSR_OUT_VECTOR", &vec![0.0f64; rows])?;
        info!(rows, cols = self.csr.cols(), nnz = self.nnz(), "emitted SpMV dataset");
        Ok(())
    }
}

/// Conjugate-gradient dataset
///
/// Carries a dense SPD operand for the dense solver, a sparse SPD operand
/// in CSR form for the sparse solver, and a shared right-hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct CgDataset {
    pub size: usize,
    pub steps: u64,
    pub operand: DenseMatrix<f64>,
    pub csr: CsrMatrix<f64>,
    pub rhs: Vec<f64>,
    /// Fraction of the sparse operand's cells that are nonzero
    pub sparsity: f64,
    pub report: ValidationReport,
}

impl CgDataset {
    /// Generate and validate a dataset
    pub fn generate(config: &CgConfig) -> Result<Self> {
        config.validate()?;
        let size = config.size;
        let mut master = StdRng::seed_from_u64(config.seed);

        let operand = DenseSpd::with_rng(size, child_rng(&mut master))?
            .generate()?
            .dense;

        let mut source = SparseSpd::with_rng(size, config.density, child_rng(&mut master))?;
        let options = ValidationOptions::conjugate_gradient();
        let encoded = encode_and_validate(&mut source, &options)?;
        let sparsity = encoded.csr.sparsity();

        let rhs = random_vector(&mut master, size);

        Ok(Self {
            size,
            steps: config.steps,
            operand,
            csr: encoded.csr,
            rhs,
            sparsity,
            report: encoded.report,
        })
    }

    /// Write the dataset as an assembler data section
    pub fn emit<W: Write>(&self, emitter: &mut Emitter<W>) -> Result<()> {
        let n = self.size;
        let zero_vector = vec![0.0f64; n];
        let zero_matrix = vec![0.0f64; n * n];

        emitter.begin_data_section()?;
        emitter.scalar_u64("size", n as u64)?;
        emitter.scalar_u64("step", self.steps)?;
        emitter.scalar_f64("sparsity", self.sparsity)?;
        emitter.array("A", self.operand.as_slice())?;
        emitter.array("b", &self.rhs)?;
        emitter.array("x", &zero_vector)?;
        emitter.array("r", &zero_vector)?;
        emitter.array("p", &zero_vector)?;
        emitter.array("Ax", &zero_matrix)?;
        emitter.array("Ap", &zero_matrix)?;
        emitter.csr(
            &CsrSymbols {
                row_ptr: "A_PROW",
                col_idx: "A_IDX",
                values: "A_DATA",
            },
            &self.csr,
        )?;
        info!(
            size = n,
            nnz = self.csr.nnz(),
            sparsity = self.sparsity,
            "emitted CG dataset"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Generated;
    use csrgen_core::{Check, CheckStatus, CsrError, NonzeroSet};

    /// Source that returns a fixed matrix with a caller-chosen support
    struct Fixed {
        dense: DenseMatrix<f64>,
        nonzeros: NonzeroSet,
    }

    impl MatrixSource for Fixed {
        type Element = f64;

        fn shape(&self) -> (usize, usize) {
            (self.dense.rows(), self.dense.cols())
        }

        fn generate(&mut self) -> Result<Generated<f64>> {
            Ok(Generated {
                dense: self.dense.clone(),
                nonzeros: self.nonzeros.clone(),
            })
        }
    }

    fn fixed(rows: &[Vec<f64>]) -> Fixed {
        let dense = DenseMatrix::from_rows(rows).unwrap();
        let nonzeros = dense.nonzero_set();
        Fixed { dense, nonzeros }
    }

    #[test]
    fn test_encode_and_validate_passes() {
        let mut source = fixed(&[vec![4.0, 1.0], vec![1.0, 3.0]]);
        let encoded =
            encode_and_validate(&mut source, &ValidationOptions::conjugate_gradient()).unwrap();
        assert_eq!(encoded.csr.row_ptr(), &[0, 2, 4]);
        assert!(encoded.report.is_ok());
    }

    #[test]
    fn test_singular_diagonal_aborts() {
        let mut source = fixed(&[vec![0.0, 1.0], vec![1.0, 2.0]]);
        let err = encode_and_validate(&mut source, &ValidationOptions::conjugate_gradient())
            .unwrap_err();
        match err {
            Error::Validation { first, report } => {
                assert_eq!(first, CsrError::SingularDiagonal { index: 0 });
                assert_eq!(report.status(Check::Structure), CheckStatus::Passed);
                assert_eq!(report.status(Check::DecodeEquivalence), CheckStatus::Passed);
                assert_eq!(report.status(Check::Symmetry), CheckStatus::Passed);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_asymmetry_aborts() {
        let mut source = fixed(&[vec![1.0, 5.0], vec![7.0, 1.0]]);
        let err = encode_and_validate(&mut source, &ValidationOptions::conjugate_gradient())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation {
                first: CsrError::Asymmetry { row: 0, col: 1 },
                ..
            }
        ));
    }

    #[test]
    fn test_missing_support_fails_decode_equivalence() {
        // The support omits cell 3, so the encoding drops a nonzero value
        let mut source = fixed(&[vec![1.0, 0.0], vec![0.0, 2.0]]);
        source.nonzeros = NonzeroSet::new(vec![0]);
        let err = encode_and_validate(&mut source, &ValidationOptions::sparse_matrix_vector())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation {
                first: CsrError::RoundTrip { row: 1, col: 1, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_spmv_dataset_shape() {
        let dataset = SpmvDataset::generate(&SpmvConfig::new(10, 7, 0.5).with_seed(2)).unwrap();
        assert_eq!(dataset.csr.row_ptr().len(), 11);
        assert_eq!(dataset.nnz(), 35);
        assert_eq!(dataset.input.len(), 7);
        assert!(dataset.report.is_ok());
    }

    #[test]
    fn test_spmv_dataset_is_reproducible() {
        let config = SpmvConfig::new(6, 9, 0.4).with_seed(77);
        assert_eq!(
            SpmvDataset::generate(&config).unwrap(),
            SpmvDataset::generate(&config).unwrap()
        );
    }

    #[test]
    fn test_cg_dataset() {
        let dataset = CgDataset::generate(&CgConfig::new(8, 3, 0.25).with_seed(1)).unwrap();
        assert_eq!(dataset.operand.rows(), 8);
        assert_eq!(dataset.rhs.len(), 8);
        assert_eq!(dataset.csr.row_ptr().len(), 9);
        assert_eq!(dataset.report.status(Check::Symmetry), CheckStatus::Passed);
        assert_eq!(
            dataset.report.status(Check::DiagonalNonzero),
            CheckStatus::Passed
        );
        assert!(dataset.sparsity >= 8.0 / 64.0 && dataset.sparsity <= 1.0);
        assert_eq!(dataset.sparsity, dataset.csr.values().len() as f64 / 64.0);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_generation() {
        assert!(matches!(
            SpmvDataset::generate(&SpmvConfig::new(4, 4, -1.0)),
            Err(Error::InvalidDensity(_))
        ));
        assert!(matches!(
            CgDataset::generate(&CgConfig::new(0, 1, 0.5)),
            Err(Error::InvalidDimensions { .. })
        ));
    }
}
