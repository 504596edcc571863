//! csrgen - Validated CSR dataset generation
//!
//! This library produces the sparse-matrix inputs of vector-accelerator
//! benchmarks: a random matrix source, the CSR encoding of that matrix,
//! a validation gate that proves the encoding, and an assembler emitter
//! that lays the arrays out as data sections.
//!
//! ## Architecture
//!
//! csrgen follows a core/implementation separation:
//!
//! - **csrgen-core**: data model, encoder and validator (no I/O, no randomness)
//! - **csrgen**: matrix sources, the generation pipeline and the emitter
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use csrgen::{EmitConfig, Emitter, SpmvConfig, SpmvDataset};
//!
//! fn example() -> csrgen::Result<()> {
//!     let config = SpmvConfig::new(128, 128, 0.05).with_seed(7);
//!     let dataset = SpmvDataset::generate(&config)?;
//!
//!     let mut emitter = Emitter::new(std::io::stdout().lock(), EmitConfig::default());
//!     dataset.emit(&mut emitter)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Abort on invalid encodings**: nothing is emitted unless every check passes
//! - **Reproducible datasets**: every source is driven by a seeded RNG
//! - **serde**: serializable configs and validation reports
//! - **cli**: the `csrgen` command-line generator

pub use csrgen_core::{
    encode, encode_dense, encode_nonzero_set, validate, Check, CheckStatus, CsrError, CsrMatrix,
    DenseMatrix, ErrorKind, MatrixElement, NonzeroSet, SparseMatrix, ValidationOptions,
    ValidationReport,
};

pub mod config;
pub mod emit;
pub mod error;
pub mod pipeline;
pub mod source;

pub use config::{CgConfig, EmitConfig, SpmvConfig};
pub use emit::{ColumnEncoding, CsrSymbols, Emitter};
pub use error::{Error, Result};
pub use pipeline::{encode_and_validate, CgDataset, Encoded, SpmvDataset};
pub use source::{DenseSpd, Generated, MatrixSource, RandomSparse, SparseSpd};
