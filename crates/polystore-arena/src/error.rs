//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use polystore_core::StrategyError;

/// Errors that can occur during arena operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The buffer cannot satisfy the request — the cursor would cross
    /// capacity. Signalled before any write happens; the cursor is left
    /// unchanged, so smaller subsequent requests may still succeed.
    CapacityExceeded {
        /// Number of bytes requested (excluding alignment padding).
        requested: usize,
        /// Total buffer capacity in bytes.
        capacity: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, capacity {capacity} bytes"
                )
            }
        }
    }
}

impl Error for ArenaError {}

impl From<ArenaError> for StrategyError {
    fn from(err: ArenaError) -> Self {
        match err {
            ArenaError::CapacityExceeded {
                requested,
                capacity,
            } => StrategyError::ArenaExhausted {
                requested,
                capacity,
            },
        }
    }
}
