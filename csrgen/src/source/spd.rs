//! Symmetric positive-definite matrices for conjugate-gradient datasets

use csrgen_core::DenseMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{Generated, MatrixSource};
use crate::config::{check_density, check_dimensions};
use crate::Result;

/// Sparse SPD matrix `A = Lᵀ L`
///
/// `L` is lower triangular with a unit diagonal; each strictly lower cell
/// is set with probability `density` to a nonzero value in `[-1, 1)`.
/// Only the upper triangle of `A` is computed and then mirrored, so `A` is
/// exactly symmetric, and `A[i][i] >= 1`.
#[derive(Debug, Clone)]
pub struct SparseSpd {
    size: usize,
    density: f64,
    rng: StdRng,
}

impl SparseSpd {
    /// Create a source seeded with `seed`
    pub fn new(size: usize, density: f64, seed: u64) -> Result<Self> {
        Self::with_rng(size, density, StdRng::seed_from_u64(seed))
    }

    /// Create a source driven by an existing RNG
    pub fn with_rng(size: usize, density: f64, rng: StdRng) -> Result<Self> {
        check_dimensions(size, size)?;
        check_density(density)?;
        Ok(Self { size, density, rng })
    }

    fn unit_lower_factor(&mut self) -> DenseMatrix<f64> {
        let n = self.size;
        let mut factor = DenseMatrix::zeros(n, n);
        for i in 0..n {
            factor[(i, i)] = 1.0;
            for j in 0..i {
                if self.rng.gen_bool(self.density) {
                    factor[(i, j)] = nonzero_uniform(&mut self.rng);
                }
            }
        }
        factor
    }
}

impl MatrixSource for SparseSpd {
    type Element = f64;

    fn shape(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    fn generate(&mut self) -> Result<Generated<f64>> {
        let factor = self.unit_lower_factor();
        let n = self.size;

        // L[k][i] is zero for k < i, so the sum starts at the larger index
        let dense = gram(n, |i, j| (j.max(i)..n).map(|k| factor[(k, i)] * factor[(k, j)]).sum());
        let nonzeros = dense.nonzero_set();

        debug!(size = n, nnz = nonzeros.len(), "built sparse SPD matrix");
        Ok(Generated { dense, nonzeros })
    }
}

/// Dense SPD matrix `A = Xᵀ X + n·I` with `X` uniform in `[0, 1)`
#[derive(Debug, Clone)]
pub struct DenseSpd {
    size: usize,
    rng: StdRng,
}

impl DenseSpd {
    /// Create a source seeded with `seed`
    pub fn new(size: usize, seed: u64) -> Result<Self> {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    /// Create a source driven by an existing RNG
    pub fn with_rng(size: usize, rng: StdRng) -> Result<Self> {
        check_dimensions(size, size)?;
        Ok(Self { size, rng })
    }
}

impl MatrixSource for DenseSpd {
    type Element = f64;

    fn shape(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    fn generate(&mut self) -> Result<Generated<f64>> {
        let n = self.size;
        let rng = &mut self.rng;
        let x = DenseMatrix::from_fn(n, n, |_, _| rng.gen::<f64>());

        let dense = gram(n, |i, j| {
            let dot: f64 = (0..n).map(|k| x[(k, i)] * x[(k, j)]).sum();
            if i == j {
                dot + n as f64
            } else {
                dot
            }
        });
        let nonzeros = dense.nonzero_set();

        debug!(size = n, "built dense SPD matrix");
        Ok(Generated { dense, nonzeros })
    }
}

/// Fill an `n x n` matrix from its upper triangle, mirroring each entry
fn gram(n: usize, mut entry: impl FnMut(usize, usize) -> f64) -> DenseMatrix<f64> {
    let mut dense = DenseMatrix::zeros(n, n);
    for i in 0..n {
        for j in i..n {
            let value = entry(i, j);
            dense[(i, j)] = value;
            dense[(j, i)] = value;
        }
    }
    dense
}

fn nonzero_uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let value: f64 = rng.gen_range(-1.0..1.0);
        if value != 0.0 {
            return value;
        }
    }
}
