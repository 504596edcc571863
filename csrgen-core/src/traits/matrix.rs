//! Core matrix abstraction trait
//!
//! Both the dense source matrix and its CSR encoding answer the same
//! shape and density queries, so the pipeline reports on whichever
//! representation it holds.

/// Format-agnostic read access to a matrix
pub trait SparseMatrix {
    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements
    fn nnz(&self) -> usize;

    /// Fraction of cells that are non-zero
    fn sparsity(&self) -> f64 {
        let (rows, cols) = self.dimensions();
        let cells = rows.saturating_mul(cols);
        if cells == 0 {
            0.0
        } else {
            self.nnz() as f64 / cells as f64
        }
    }
}
