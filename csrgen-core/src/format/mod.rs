//! Matrix representations
//!
//! `DenseMatrix` is the source of truth produced by a matrix source,
//! `NonzeroSet` is its row-major support, and `CsrMatrix` is the
//! compressed encoding handed to the kernels.

pub mod csr;
pub mod dense;
pub mod nonzero;

pub use csr::CsrMatrix;
pub use dense::DenseMatrix;
pub use nonzero::NonzeroSet;
