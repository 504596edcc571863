//! Abstract interfaces shared by the matrix representations
//!
//! Traits are pure interfaces; the concrete types live in `format`.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::SparseMatrix;
