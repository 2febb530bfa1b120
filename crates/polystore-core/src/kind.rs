//! The closed set of payload kinds and the capability they share.
//!
//! Two kinds participate in the benchmark: [`Additive`] (integer
//! arithmetic) and [`Multiplicative`] (float arithmetic). They share no
//! state and no base data; the only thing they have in common is the
//! [`Apply`] capability. Both are `Copy` — this is a load-bearing
//! contract for the manual-union and arena-backed strategies, which
//! never run destructors for the payloads they overwrite or abandon.

use std::fmt;

/// Number of inner arithmetic rounds performed by one `apply()` call.
///
/// Chosen so a single call has measurable cost without dominating the
/// dispatch overhead the benchmark exists to compare.
pub const APPLY_ROUNDS: usize = 10;

/// The dispatch capability under test.
///
/// `apply()` performs a fixed amount of arithmetic purely on the
/// instance's own fields: no allocation, no I/O, no shared state, and
/// it never fails. Repeated calls recompute the same result from the
/// same inputs — there is no accumulation across calls.
///
/// `reading()` exposes the slot's observable state (tag plus result
/// field) so the driver and tests can compare storage layouts without
/// reaching into strategy internals.
pub trait Apply {
    /// Recompute this instance's result field.
    fn apply(&mut self);

    /// The instance's current observable state.
    fn reading(&self) -> SlotReading;
}

/// Integer kind: `result = a + b + round` over [`APPLY_ROUNDS`] rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Additive {
    /// First operand.
    pub a: i32,
    /// Second operand.
    pub b: i32,
    /// Result of the most recent `apply()` call; 0 before the first.
    pub result: i32,
}

impl Additive {
    /// Create an additive payload with explicit operands and a zero result.
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b, result: 0 }
    }
}

impl Default for Additive {
    fn default() -> Self {
        Self::new(1, 2)
    }
}

impl Apply for Additive {
    fn apply(&mut self) {
        for round in 0..APPLY_ROUNDS {
            self.result = self.a + self.b + round as i32;
        }
    }

    fn reading(&self) -> SlotReading {
        SlotReading::Additive(self.result)
    }
}

/// Float kind: `result = a * b * round` over [`APPLY_ROUNDS`] rounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Multiplicative {
    /// First factor.
    pub a: f32,
    /// Second factor.
    pub b: f32,
    /// Result of the most recent `apply()` call; 0.0 before the first.
    pub result: f32,
}

impl Multiplicative {
    /// Create a multiplicative payload with explicit factors and a zero result.
    pub fn new(a: f32, b: f32) -> Self {
        Self { a, b, result: 0.0 }
    }
}

impl Default for Multiplicative {
    fn default() -> Self {
        Self::new(1.0, 2.0)
    }
}

impl Apply for Multiplicative {
    fn apply(&mut self) {
        for round in 0..APPLY_ROUNDS {
            self.result = self.a * self.b * round as f32;
        }
    }

    fn reading(&self) -> SlotReading {
        SlotReading::Multiplicative(self.result)
    }
}

/// Discriminant identifying which kind occupies a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KindTag {
    /// The slot holds an [`Additive`] payload.
    Additive,
    /// The slot holds a [`Multiplicative`] payload.
    Multiplicative,
}

impl KindTag {
    /// The population rule shared by every strategy: even slots hold the
    /// additive kind, odd slots the multiplicative kind.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Additive
        } else {
            Self::Multiplicative
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Additive => write!(f, "additive"),
            Self::Multiplicative => write!(f, "multiplicative"),
        }
    }
}

/// One slot's observable state after a traversal: its kind plus the
/// value of its result field.
///
/// All strategies must produce identical readings for the same
/// collection length — the layouts differ, the arithmetic must not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlotReading {
    /// Result field of an additive slot.
    Additive(i32),
    /// Result field of a multiplicative slot.
    Multiplicative(f32),
}

impl SlotReading {
    /// The kind this reading was taken from.
    pub fn tag(&self) -> KindTag {
        match self {
            Self::Additive(_) => KindTag::Additive,
            Self::Multiplicative(_) => KindTag::Multiplicative,
        }
    }
}
