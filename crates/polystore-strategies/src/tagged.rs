//! Tagged-union layout: in-place closed-set enum storage.
//!
//! Each slot is a [`KindSlot`] — a plain Rust enum, so the discriminant
//! and payload are always written together and a mismatched tag is
//! unrepresentable. The array itself is the only allocation; traversal
//! selects the kind by `match`, with no vtable involved.

use polystore_core::{
    time_pass, Additive, Apply, KindTag, Multiplicative, RunOutcome, SlotReading, Strategy,
    StrategyError,
};

/// One in-place slot of the closed kind set.
///
/// Assigning a new value replaces the previous occupant in place,
/// discriminant and payload together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KindSlot {
    /// Slot occupied by the additive kind.
    Additive(Additive),
    /// Slot occupied by the multiplicative kind.
    Multiplicative(Multiplicative),
}

impl KindSlot {
    /// Default-construct the kind selected by the parity rule.
    pub fn for_index(index: usize) -> Self {
        match KindTag::for_index(index) {
            KindTag::Additive => Self::Additive(Additive::default()),
            KindTag::Multiplicative => Self::Multiplicative(Multiplicative::default()),
        }
    }

    /// The discriminant of the current occupant.
    pub fn tag(&self) -> KindTag {
        match self {
            Self::Additive(_) => KindTag::Additive,
            Self::Multiplicative(_) => KindTag::Multiplicative,
        }
    }

    /// Invoke the occupant's `apply()`. Statically dispatched.
    pub fn apply(&mut self) {
        match self {
            Self::Additive(kind) => kind.apply(),
            Self::Multiplicative(kind) => kind.apply(),
        }
    }

    /// The occupant's observable state.
    pub fn reading(&self) -> SlotReading {
        match self {
            Self::Additive(kind) => kind.reading(),
            Self::Multiplicative(kind) => kind.reading(),
        }
    }
}

/// Array of in-place tagged-union slots.
pub struct TaggedSlots;

impl Strategy for TaggedSlots {
    fn label(&self) -> &'static str {
        "tagged-union"
    }

    fn run(&self, len: usize) -> Result<RunOutcome, StrategyError> {
        let mut slots: Vec<KindSlot> = (0..len).map(KindSlot::for_index).collect();

        let elapsed = time_pass(|| {
            for slot in slots.iter_mut() {
                slot.apply();
            }
        });

        let readings = slots.iter().map(KindSlot::reading).collect();
        Ok(RunOutcome { elapsed, readings })
    }
}
