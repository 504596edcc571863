//! Uniformly scattered sparse matrix for SpMV datasets

use csrgen_core::{DenseMatrix, NonzeroSet};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use tracing::debug;

use super::{Generated, MatrixSource};
use crate::config::{check_density, check_dimensions};
use crate::Result;

/// `rows x cols` matrix with `floor(rows * cols * density)` nonzero cells
///
/// Cells are drawn without replacement from the whole grid. The k-th cell
/// in row-major order holds `k + 1`, which keeps every stored value
/// distinct and nonzero so a misplaced entry cannot go unnoticed.
#[derive(Debug, Clone)]
pub struct RandomSparse {
    rows: usize,
    cols: usize,
    density: f64,
    rng: StdRng,
}

impl RandomSparse {
    /// Create a source seeded with `seed`
    pub fn new(rows: usize, cols: usize, density: f64, seed: u64) -> Result<Self> {
        Self::with_rng(rows, cols, density, StdRng::seed_from_u64(seed))
    }

    /// Create a source driven by an existing RNG
    pub fn with_rng(rows: usize, cols: usize, density: f64, rng: StdRng) -> Result<Self> {
        check_dimensions(rows, cols)?;
        check_density(density)?;
        Ok(Self {
            rows,
            cols,
            density,
            rng,
        })
    }

    /// Number of nonzero cells each generated matrix holds
    pub fn nnz_target(&self) -> usize {
        ((self.rows * self.cols) as f64 * self.density) as usize
    }
}

impl MatrixSource for RandomSparse {
    type Element = f64;

    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn generate(&mut self) -> Result<Generated<f64>> {
        let cells = self.rows * self.cols;
        let nnz = self.nnz_target().min(cells);

        let mut picked = index::sample(&mut self.rng, cells, nnz).into_vec();
        picked.sort_unstable();

        let mut dense = DenseMatrix::zeros(self.rows, self.cols);
        let data = dense.as_mut_slice();
        for (ordinal, &idx) in picked.iter().enumerate() {
            data[idx] = (ordinal + 1) as f64;
        }

        debug!(
            rows = self.rows,
            cols = self.cols,
            nnz,
            "scattered random sparse matrix"
        );

        Ok(Generated {
            dense,
            nonzeros: NonzeroSet::new(picked),
        })
    }
}
