//! Cross-strategy agreement checks.
//!
//! The layouts differ; the arithmetic must not. After a full run, every
//! strategy's per-slot readings are compared against the first
//! strategy's. Used by the integration tests as a determinism check on
//! the whole pipeline.

use std::error::Error;
use std::fmt;

use polystore_core::SlotReading;

use crate::driver::LabeledOutcome;

/// A disagreement between two strategies' outcomes.
#[derive(Clone, Debug, PartialEq)]
pub enum MismatchError {
    /// Two strategies produced different slot counts.
    LengthMismatch {
        /// The reference strategy's label.
        baseline: &'static str,
        /// The diverging strategy's label.
        label: &'static str,
        /// Reference slot count.
        expected: usize,
        /// Diverging slot count.
        actual: usize,
    },
    /// Two strategies disagree on one slot's reading.
    SlotMismatch {
        /// The reference strategy's label.
        baseline: &'static str,
        /// The diverging strategy's label.
        label: &'static str,
        /// Index of the first diverging slot.
        index: usize,
        /// Reference reading at that slot.
        expected: SlotReading,
        /// Diverging reading at that slot.
        actual: SlotReading,
    },
}

impl fmt::Display for MismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                baseline,
                label,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "'{label}' produced {actual} slots, '{baseline}' produced {expected}"
                )
            }
            Self::SlotMismatch {
                baseline,
                label,
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "'{label}' diverges from '{baseline}' at slot {index}: \
                     expected {expected:?}, got {actual:?}"
                )
            }
        }
    }
}

impl Error for MismatchError {}

/// Check that every outcome's readings match the first outcome's.
///
/// An empty or single-element slice is trivially consistent.
pub fn verify_outcomes(outcomes: &[LabeledOutcome]) -> Result<(), MismatchError> {
    let Some((baseline, rest)) = outcomes.split_first() else {
        return Ok(());
    };

    for labeled in rest {
        if labeled.outcome.readings.len() != baseline.outcome.readings.len() {
            return Err(MismatchError::LengthMismatch {
                baseline: baseline.label,
                label: labeled.label,
                expected: baseline.outcome.readings.len(),
                actual: labeled.outcome.readings.len(),
            });
        }
        for (index, (expected, actual)) in baseline
            .outcome
            .readings
            .iter()
            .zip(labeled.outcome.readings.iter())
            .enumerate()
        {
            if expected != actual {
                return Err(MismatchError::SlotMismatch {
                    baseline: baseline.label,
                    label: labeled.label,
                    index,
                    expected: *expected,
                    actual: *actual,
                });
            }
        }
    }
    Ok(())
}
