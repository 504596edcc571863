//! Generate validated CSR datasets as assembler data sections
//!
//! ```text
//! csrgen spmv 128 128 0.05 --seed 7 -o data.S
//! csrgen cg 64 10 0.1 --logical-columns
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use csrgen::config::DEFAULT_ALIGNMENT;
use csrgen::{CgConfig, CgDataset, ColumnEncoding, EmitConfig, Emitter, SpmvConfig, SpmvDataset};
use csrgen::{Error, ValidationReport};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// csrgen command-line interface
#[derive(Parser)]
#[command(name = "csrgen", version, about = "Validated CSR dataset generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sparse matrix-vector multiplication dataset
    Spmv {
        /// Matrix rows
        rows: usize,
        /// Matrix columns
        cols: usize,
        /// Fraction of cells holding a value, in [0, 1]
        density: f64,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Conjugate-gradient dataset
    Cg {
        /// Order of the system
        size: usize,
        /// Solver iterations
        steps: u64,
        /// Off-diagonal density of the sparse operand's factor, in [0, 1]
        density: f64,
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write the dataset here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// `.balign` argument for array symbols
    #[arg(long, default_value = DEFAULT_ALIGNMENT)]
    align: String,

    /// Emit logical column indices instead of byte offsets
    #[arg(long)]
    logical_columns: bool,

    /// Print the validation report as JSON on stderr
    #[arg(long)]
    report_json: bool,
}

impl CommonArgs {
    fn emit_config(&self) -> EmitConfig {
        let config = EmitConfig::default().with_alignment(self.align.clone());
        if self.logical_columns {
            config.with_column_encoding(ColumnEncoding::Logical)
        } else {
            config
        }
    }
}

fn main() {
    // stdout carries the dataset, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Spmv {
            rows,
            cols,
            density,
            common,
        } => {
            let config = SpmvConfig::new(rows, cols, density).with_seed(common.seed);
            let dataset = SpmvDataset::generate(&config)
                .map_err(|e| report_failure(e, common.report_json))
                .with_context(|| format!("generating {rows}x{cols} SpMV dataset"))?;
            print_report(&dataset.report, common.report_json)?;

            let mut emitter = Emitter::new(Vec::new(), common.emit_config());
            dataset.emit(&mut emitter).context("emitting SpMV dataset")?;
            write_output(&emitter.into_inner(), common.output.as_ref())
        }
        Command::Cg {
            size,
            steps,
            density,
            common,
        } => {
            let config = CgConfig::new(size, steps, density).with_seed(common.seed);
            let dataset = CgDataset::generate(&config)
                .map_err(|e| report_failure(e, common.report_json))
                .with_context(|| format!("generating size {size} CG dataset"))?;
            print_report(&dataset.report, common.report_json)?;

            let mut emitter = Emitter::new(Vec::new(), common.emit_config());
            dataset.emit(&mut emitter).context("emitting CG dataset")?;
            write_output(&emitter.into_inner(), common.output.as_ref())
        }
    }
}

/// Print the report of a rejected dataset before the error propagates
fn report_failure(error: Error, json: bool) -> Error {
    if let Error::Validation { report, .. } = &error {
        if let Err(e) = print_report(report, json) {
            warn!("could not print validation report: {e:#}");
        }
    }
    error
}

#[cfg(feature = "serde")]
fn print_report(report: &ValidationReport, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(report).context("serializing validation report")?;
        eprintln!("{text}");
    }
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_report(_report: &ValidationReport, json: bool) -> Result<()> {
    if json {
        warn!("--report-json needs the `serde` feature; skipping report");
    }
    Ok(())
}

/// Write the fully rendered dataset in one go, so a failed run leaves no partial file
fn write_output(bytes: &[u8], path: Option<&PathBuf>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = bytes.len(), "wrote dataset");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("writing dataset to stdout")?;
            stdout.flush().context("flushing stdout")?;
        }
    }
    Ok(())
}
