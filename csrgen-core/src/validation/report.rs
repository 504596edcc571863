//! Named pass/fail results of a validation pass

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::CsrError;

/// Individual invariants the validator can check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Check {
    /// `row_ptr` / `col_idx` / `values` layout
    Structure,
    /// Decoded CSR equals the source matrix
    DecodeEquivalence,
    /// No zero on the diagonal of the source matrix
    DiagonalNonzero,
    /// Source matrix equals its transpose
    Symmetry,
}

impl Check {
    /// All checks, in the order they run
    pub const ALL: [Check; 4] = [
        Check::Structure,
        Check::DecodeEquivalence,
        Check::DiagonalNonzero,
        Check::Symmetry,
    ];
}

impl core::fmt::Display for Check {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Check::Structure => write!(f, "structure"),
            Check::DecodeEquivalence => write!(f, "decode-equivalence"),
            Check::DiagonalNonzero => write!(f, "diagonal-nonzero"),
            Check::Symmetry => write!(f, "symmetry"),
        }
    }
}

/// Outcome of one check
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CheckStatus {
    Passed,
    Failed(CsrError),
    /// Not enabled by the options of this pass
    Skipped,
}

impl CheckStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, CheckStatus::Failed(_))
    }
}

impl From<crate::Result<()>> for CheckStatus {
    fn from(result: crate::Result<()>) -> Self {
        match result {
            Ok(()) => CheckStatus::Passed,
            Err(err) => CheckStatus::Failed(err),
        }
    }
}

/// Per-check results of [`crate::validate`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationReport {
    outcomes: Vec<(Check, CheckStatus)>,
}

impl ValidationReport {
    pub(crate) fn new() -> Self {
        Self {
            outcomes: Vec::with_capacity(Check::ALL.len()),
        }
    }

    pub(crate) fn record(&mut self, check: Check, status: CheckStatus) {
        self.outcomes.push((check, status));
    }

    /// True when no check failed
    pub fn is_ok(&self) -> bool {
        !self.outcomes.iter().any(|(_, status)| status.is_failed())
    }

    /// Status of a single check
    pub fn status(&self, check: Check) -> CheckStatus {
        self.outcomes
            .iter()
            .find(|(c, _)| *c == check)
            .map_or(CheckStatus::Skipped, |(_, status)| *status)
    }

    /// Every recorded outcome, in check order
    pub fn outcomes(&self) -> &[(Check, CheckStatus)] {
        &self.outcomes
    }

    /// Failed checks with their errors
    pub fn failures(&self) -> impl Iterator<Item = (Check, CsrError)> + '_ {
        self.outcomes.iter().filter_map(|(check, status)| match status {
            CheckStatus::Failed(err) => Some((*check, *err)),
            _ => None,
        })
    }

    /// Collapse to the first failure, for callers that abort on any error
    pub fn into_result(self) -> crate::Result<()> {
        match self.failures().next() {
            Some((_, err)) => Err(err),
            None => Ok(()),
        }
    }
}
