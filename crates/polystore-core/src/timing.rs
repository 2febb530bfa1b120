//! Wall-clock timing of a single traversal pass.
//!
//! One [`TimingSample`] is produced per strategy per run, taken from the
//! monotonic clock and reported as whole microseconds. The harness makes
//! no attempt at statistical rigor — no warm-up, no repeated trials —
//! it is a single-pass comparative measurement.

use std::fmt;
use std::time::{Duration, Instant};

/// Elapsed wall-clock time for one full traversal, in microseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimingSample {
    micros: u64,
}

impl TimingSample {
    /// Convert a duration to a sample, saturating at `u64::MAX` microseconds.
    pub fn from_duration(elapsed: Duration) -> Self {
        Self {
            micros: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        }
    }

    /// Elapsed microseconds.
    pub fn as_micros(&self) -> u64 {
        self.micros
    }
}

impl fmt::Display for TimingSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}us", self.micros)
    }
}

/// Run `pass` once between two monotonic timestamps and return the
/// elapsed time as a [`TimingSample`].
pub fn time_pass<F: FnOnce()>(pass: F) -> TimingSample {
    let start = Instant::now();
    pass();
    TimingSample::from_duration(start.elapsed())
}
