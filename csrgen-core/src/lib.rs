#![no_std]

//! csrgen Core - CSR encoding and validation
//!
//! This crate turns a dense matrix (or a precomputed nonzero set) into a
//! Compressed Sparse Row triple and proves the triple correct before it is
//! handed to a sparse numeric kernel. It has no I/O and no randomness.

extern crate alloc;

pub mod encoder;
pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use encoder::{encode, encode_dense, encode_nonzero_set};
pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::{validate, Check, CheckStatus, ValidationOptions, ValidationReport};

/// Index type used by the row-pointer and column-index arrays
pub type Index = u32;
