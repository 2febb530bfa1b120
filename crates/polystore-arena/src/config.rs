//! Arena configuration parameters.

use std::mem;

/// Configuration for the bump arena.
///
/// The capacity is fixed at construction; the arena never grows and is
/// reset only by dropping and recreating it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Total buffer capacity in bytes.
    pub capacity: usize,
}

impl ArenaConfig {
    /// Default capacity: 1 MiB, comfortably above what the reference
    /// collection length needs.
    pub const DEFAULT_CAPACITY: usize = 1 << 20;

    /// Create a config with an explicit byte capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Capacity guaranteed sufficient for `len` alternating placements
    /// of `A` and `B`, including worst-case alignment padding before
    /// every placement.
    pub fn for_slots<A, B>(len: usize) -> Self {
        let slot = mem::size_of::<A>().max(mem::size_of::<B>());
        let pad = mem::align_of::<A>().max(mem::align_of::<B>()) - 1;
        Self {
            capacity: len.saturating_mul(slot + pad),
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
