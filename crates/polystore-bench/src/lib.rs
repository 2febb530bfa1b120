//! Benchmark profiles for the polystore layout strategies.
//!
//! The driver binary itself is a single-pass comparative demonstration;
//! the criterion benches in this crate are where rigorous numbers come
//! from. Two profiles:
//!
//! - [`REFERENCE_LEN`]: the 10K-element reference workload
//! - [`STRESS_LEN`]: 10x the reference, for cache-pressure comparisons

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use polystore_core::{Strategy, StrategyError};
use polystore_driver::strategies;

/// Reference collection length: matches the driver's default workload.
pub const REFERENCE_LEN: usize = 10_000;

/// Stress collection length: 10x the reference.
pub const STRESS_LEN: usize = 100_000;

/// Run every strategy once at `len`, discarding outcomes.
///
/// Used as a warm sanity pass before benching, and by tests to confirm
/// the profiles complete.
pub fn run_profile(len: usize) -> Result<(), StrategyError> {
    for strategy in strategies() {
        strategy.run(len)?;
    }
    Ok(())
}
