//! The driver's result table.

use std::fmt;

use indexmap::IndexMap;
use polystore_core::TimingSample;

/// Timing rows collected by one driver run, in strategy order.
///
/// Insertion order is the report order; `Display` renders one line per
/// strategy in the form `<label>: <microseconds>us`.
#[derive(Clone, Debug, Default)]
pub struct Report {
    rows: IndexMap<&'static str, TimingSample>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one strategy's sample. Labels are unique per run; a
    /// duplicate label replaces the earlier row in place.
    pub fn record(&mut self, label: &'static str, sample: TimingSample) {
        self.rows.insert(label, sample);
    }

    /// Iterate rows in insertion (report) order.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, TimingSample)> + '_ {
        self.rows.iter().map(|(&label, &sample)| (label, sample))
    }

    /// Look up one strategy's sample by label.
    pub fn get(&self, label: &str) -> Option<TimingSample> {
        self.rows.get(label).copied()
    }

    /// Number of rows recorded.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether any rows have been recorded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, sample) in &self.rows {
            writeln!(f, "{label}: {sample}")?;
        }
        Ok(())
    }
}
