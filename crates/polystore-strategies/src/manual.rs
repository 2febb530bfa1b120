//! Manual-union layout: hand-rolled discriminated union storage.
//!
//! Each slot is an external [`KindTag`] discriminant next to a raw
//! `union` of the two kinds. Writing a slot zeroes the raw storage,
//! writes the selected payload, then sets the tag; the previous
//! occupant's bytes are fully overwritten or zeroed, so nothing of it
//! remains observable.
//!
//! Restriction: the payload kinds must be trivially destructible (they
//! are `Copy`). Overwriting a slot never runs the outgoing
//! alternative's destructor, which would silently leak resources for
//! richer kinds. The tagged-union strategy is the layout to reach for
//! when that restriction cannot be met.

#![allow(unsafe_code)]

use polystore_core::{
    time_pass, Additive, Apply, KindTag, Multiplicative, RunOutcome, SlotReading, Strategy,
    StrategyError,
};

/// Raw overlapping storage for the two kinds.
///
/// Both alternatives are `Copy` structs of primitive numerics, so the
/// union needs no drop handling and the all-zero bit pattern is a valid
/// value of either.
#[derive(Clone, Copy)]
union RawKind {
    additive: Additive,
    multiplicative: Multiplicative,
}

impl RawKind {
    fn zeroed() -> Self {
        // SAFETY: every bit pattern of all-zero bytes is a valid
        // `Additive` and a valid `Multiplicative`; both are plain
        // numeric structs with no niches.
        unsafe { std::mem::zeroed() }
    }
}

/// One manually tagged slot: external discriminant plus raw storage.
///
/// Invariant: `tag` always names the union field written most recently.
/// Every write path in this module updates both together.
pub struct ManualSlot {
    tag: KindTag,
    raw: RawKind,
}

impl ManualSlot {
    /// Construct the slot for `index`, populated per the parity rule.
    pub fn for_index(index: usize) -> Self {
        let mut slot = Self {
            tag: KindTag::Additive,
            raw: RawKind::zeroed(),
        };
        match KindTag::for_index(index) {
            KindTag::Additive => slot.set_additive(Additive::default()),
            KindTag::Multiplicative => slot.set_multiplicative(Multiplicative::default()),
        }
        slot
    }

    /// Overwrite the slot with an additive payload.
    ///
    /// Zeroes the raw storage first so no byte of a prior occupant
    /// survives, then writes the payload and the matching tag.
    pub fn set_additive(&mut self, value: Additive) {
        self.raw = RawKind::zeroed();
        self.raw.additive = value;
        self.tag = KindTag::Additive;
    }

    /// Overwrite the slot with a multiplicative payload.
    pub fn set_multiplicative(&mut self, value: Multiplicative) {
        self.raw = RawKind::zeroed();
        self.raw.multiplicative = value;
        self.tag = KindTag::Multiplicative;
    }

    /// The discriminant of the current occupant.
    pub fn tag(&self) -> KindTag {
        self.tag
    }

    /// Invoke the occupant's `apply()`, selected by the discriminant.
    pub fn apply(&mut self) {
        match self.tag {
            // SAFETY: `tag` is only ever set in the same statement group
            // that writes the matching union field, so the named field
            // is the active one.
            KindTag::Additive => unsafe { self.raw.additive.apply() },
            KindTag::Multiplicative => unsafe { self.raw.multiplicative.apply() },
        }
    }

    /// The occupant's observable state.
    pub fn reading(&self) -> SlotReading {
        match self.tag {
            // SAFETY: as in `apply` — the tag names the active field.
            KindTag::Additive => unsafe { self.raw.additive }.reading(),
            KindTag::Multiplicative => unsafe { self.raw.multiplicative }.reading(),
        }
    }
}

/// Array of hand-rolled discriminated-union slots.
pub struct ManualSlots;

impl Strategy for ManualSlots {
    fn label(&self) -> &'static str {
        "manual-union"
    }

    fn run(&self, len: usize) -> Result<RunOutcome, StrategyError> {
        let mut slots: Vec<ManualSlot> = (0..len).map(ManualSlot::for_index).collect();

        let elapsed = time_pass(|| {
            for slot in slots.iter_mut() {
                slot.apply();
            }
        });

        let readings = slots.iter().map(ManualSlot::reading).collect();
        Ok(RunOutcome { elapsed, readings })
    }
}
