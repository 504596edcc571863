//! GNU assembler data-section emitter
//!
//! Every symbol is written as
//!
//! ```text
//! .global NAME
//! .balign ALIGN
//! NAME:
//!     .word 0x...
//! ```
//!
//! with the symbol's little-endian bytes grouped into 32-bit words, each
//! word printed most significant byte first. A trailing partial word is
//! zero-padded.

use std::borrow::Cow;
use std::io::Write;

use bytemuck::Pod;
use csrgen_core::{CsrMatrix, Index, MatrixElement};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{EmitConfig, Error, Result};

/// Header line opening the writable data section
pub const DATA_SECTION: &str = ".section .data,\"aw\",@progbits";

/// Alignment of scalar symbols
pub const SCALAR_ALIGNMENT: &str = "8";

/// How column indices are laid out for the consuming kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColumnEncoding {
    /// Logical column positions in `[0, cols)`
    Logical,
    /// Column position times the value element size, for direct pointer offsets
    ByteOffset { element_bytes: u32 },
}

impl ColumnEncoding {
    /// Byte offsets into an array of `T`
    pub fn byte_offsets<T: MatrixElement>() -> Self {
        ColumnEncoding::ByteOffset {
            element_bytes: T::size_bytes() as u32,
        }
    }

    /// Apply this encoding to logical column indices
    pub fn apply<'a>(&self, col_idx: &'a [Index]) -> Result<Cow<'a, [Index]>> {
        match *self {
            ColumnEncoding::Logical => Ok(Cow::Borrowed(col_idx)),
            ColumnEncoding::ByteOffset { element_bytes } => col_idx
                .iter()
                .map(|&col| {
                    col.checked_mul(element_bytes)
                        .ok_or(Error::ColumnOffsetOverflow { col, element_bytes })
                })
                .collect::<Result<Vec<_>>>()
                .map(Cow::Owned),
        }
    }
}

/// Symbol names for the three CSR arrays
#[derive(Debug, Clone, Copy)]
pub struct CsrSymbols<'a> {
    pub row_ptr: &'a str,
    pub col_idx: &'a str,
    pub values: &'a str,
}

/// Writes dataset symbols to an assembler source
pub struct Emitter<W: Write> {
    out: W,
    config: EmitConfig,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W, config: EmitConfig) -> Self {
        Self { out, config }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Open the data section; call once before the first symbol
    pub fn begin_data_section(&mut self) -> Result<()> {
        writeln!(self.out, "{DATA_SECTION}")?;
        Ok(())
    }

    /// 64-bit unsigned scalar
    pub fn scalar_u64(&mut self, name: &str, value: u64) -> Result<()> {
        self.symbol(name, SCALAR_ALIGNMENT, &value.to_le_bytes())
    }

    /// 64-bit float scalar
    pub fn scalar_f64(&mut self, name: &str, value: f64) -> Result<()> {
        self.symbol(name, SCALAR_ALIGNMENT, &value.to_le_bytes())
    }

    /// Array symbol aligned to the configured boundary
    pub fn array<T: Pod>(&mut self, name: &str, values: &[T]) -> Result<()> {
        let bytes = le_bytes(values);
        let alignment = self.config.alignment.clone();
        self.symbol(name, &alignment, &bytes)
    }

    /// All three CSR arrays, column indices encoded per the configuration
    pub fn csr<T: MatrixElement>(
        &mut self,
        symbols: &CsrSymbols<'_>,
        csr: &CsrMatrix<T>,
    ) -> Result<()> {
        let col_idx = self.config.column_encoding.apply(csr.col_idx())?;
        self.array(symbols.row_ptr, csr.row_ptr())?;
        self.array(symbols.col_idx, &col_idx)?;
        self.array(symbols.values, csr.values())
    }

    fn symbol(&mut self, name: &str, alignment: &str, bytes: &[u8]) -> Result<()> {
        writeln!(self.out, ".global {name}")?;
        writeln!(self.out, ".balign {alignment}")?;
        writeln!(self.out, "{name}:")?;
        for chunk in bytes.chunks(4) {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            writeln!(
                self.out,
                "    .word 0x{:02x}{:02x}{:02x}{:02x}",
                word[3], word[2], word[1], word[0]
            )?;
        }
        debug!(symbol = name, bytes = bytes.len(), "emitted symbol");
        Ok(())
    }
}

/// Little-endian byte view of a POD slice
fn le_bytes<T: Pod>(values: &[T]) -> Cow<'_, [u8]> {
    if cfg!(target_endian = "little") {
        Cow::Borrowed(bytemuck::cast_slice(values))
    } else {
        Cow::Owned(
            values
                .iter()
                .flat_map(|value| bytemuck::bytes_of(value).iter().rev().copied())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted(config: EmitConfig, f: impl FnOnce(&mut Emitter<Vec<u8>>) -> Result<()>) -> String {
        let mut emitter = Emitter::new(Vec::new(), config);
        f(&mut emitter).unwrap();
        String::from_utf8(emitter.into_inner()).unwrap()
    }

    #[test]
    fn test_scalar_u64() {
        let text = emitted(EmitConfig::default(), |e| e.scalar_u64("size", 0x1_0000_0005));
        assert_eq!(
            text,
            ".global size\n.balign 8\nsize:\n    .word 0x00000005\n    .word 0x00000001\n"
        );
    }

    #[test]
    fn test_scalar_f64() {
        // 1.0 = 0x3ff0000000000000
        let text = emitted(EmitConfig::default(), |e| e.scalar_f64("sparsity", 1.0));
        assert_eq!(
            text,
            ".global sparsity\n.balign 8\nsparsity:\n    .word 0x00000000\n    .word 0x3ff00000\n"
        );
    }

    #[test]
    fn test_array_uses_configured_alignment() {
        let text = emitted(EmitConfig::default(), |e| e.array("v", &[1u32, 0xdeadbeef]));
        assert_eq!(
            text,
            ".global v\n.balign NR_LANES*4\nv:\n    .word 0x00000001\n    .word 0xdeadbeef\n"
        );
    }

    #[test]
    fn test_partial_word_is_padded() {
        let text = emitted(EmitConfig::default().with_alignment("4"), |e| {
            e.array("b", &[0x11u8, 0x22, 0x33, 0x44, 0x55])
        });
        assert_eq!(
            text,
            ".global b\n.balign 4\nb:\n    .word 0x44332211\n    .word 0x00000055\n"
        );
    }

    #[test]
    fn test_empty_array_has_label_only() {
        let text = emitted(EmitConfig::default(), |e| e.array::<u32>("empty", &[]));
        assert_eq!(text, ".global empty\n.balign NR_LANES*4\nempty:\n");
    }

    #[test]
    fn test_data_section_header() {
        let text = emitted(EmitConfig::default(), |e| e.begin_data_section());
        assert_eq!(text, ".section .data,\"aw\",@progbits\n");
    }

    #[test]
    fn test_column_encoding() {
        let cols = [0u32, 2, 5];
        assert_eq!(ColumnEncoding::Logical.apply(&cols).unwrap().as_ref(), &cols);
        assert_eq!(
            ColumnEncoding::byte_offsets::<f64>().apply(&cols).unwrap().as_ref(),
            &[0, 16, 40]
        );
        assert!(matches!(
            ColumnEncoding::ByteOffset { element_bytes: 8 }.apply(&[u32::MAX]),
            Err(Error::ColumnOffsetOverflow { col: u32::MAX, element_bytes: 8 })
        ));
    }

    #[test]
    fn test_csr_symbols() {
        let csr = CsrMatrix::from_raw_parts(2, 2, vec![0, 1, 2], vec![1, 0], vec![1.0f32, 2.0]);
        let symbols = CsrSymbols {
            row_ptr: "P",
            col_idx: "I",
            values: "D",
        };
        let config = EmitConfig::default()
            .with_alignment("4")
            .with_column_encoding(ColumnEncoding::byte_offsets::<f32>());
        let text = emitted(config, |e| e.csr(&symbols, &csr));
        assert_eq!(
            text,
            concat!(
                ".global P\n.balign 4\nP:\n",
                "    .word 0x00000000\n    .word 0x00000001\n    .word 0x00000002\n",
                ".global I\n.balign 4\nI:\n",
                "    .word 0x00000004\n    .word 0x00000000\n",
                ".global D\n.balign 4\nD:\n",
                "    .word 0x3f800000\n    .word 0x40000000\n",
            )
        );
    }
}
