//! Error types shared across the benchmark workspace.

use std::error::Error;
use std::fmt;

/// Errors from running a storage strategy.
///
/// There is exactly one recoverable-by-reporting failure in the system:
/// the bump arena running out of capacity. Heap exhaustion in the
/// owning-handle strategy aborts the process (Rust's global allocator
/// does not unwind on OOM) and has no variant here. There is no retry
/// policy — the driver aborts the whole run on the first error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyError {
    /// The bump arena could not satisfy a placement request.
    ArenaExhausted {
        /// Number of bytes requested.
        requested: usize,
        /// Total arena capacity in bytes.
        capacity: usize,
    },
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArenaExhausted {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena exhausted: requested {requested} bytes, capacity {capacity} bytes"
                )
            }
        }
    }
}

impl Error for StrategyError {}
