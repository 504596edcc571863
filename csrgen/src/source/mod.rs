//! Matrix sources
//!
//! A source produces the dense matrix a dataset is built from, together
//! with its row-major nonzero support. Sources own a seeded RNG so a
//! dataset can be regenerated bit for bit.

mod random_sparse;
mod spd;
mod vector;

pub use random_sparse::RandomSparse;
pub use spd::{DenseSpd, SparseSpd};
pub use vector::random_vector;

use csrgen_core::{DenseMatrix, MatrixElement, NonzeroSet};

use crate::Result;

/// Output of a matrix source
#[derive(Debug, Clone, PartialEq)]
pub struct Generated<T> {
    pub dense: DenseMatrix<T>,
    pub nonzeros: NonzeroSet,
}

/// Anything that can produce a matrix to encode
pub trait MatrixSource {
    /// Value type of the generated matrix
    type Element: MatrixElement;

    /// Shape of the matrices this source produces, as (rows, cols)
    fn shape(&self) -> (usize, usize);

    /// Produce the next matrix
    fn generate(&mut self) -> Result<Generated<Self::Element>>;
}
