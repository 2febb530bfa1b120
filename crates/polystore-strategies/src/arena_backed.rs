//! Arena-backed layout: borrowed handles into a bump arena.
//!
//! Mixed concrete kinds are placed one after another into a single
//! [`BumpArena`]; the handle array holds `&mut dyn Apply` borrows into
//! it. The arena never reclaims individual placements — dropping it
//! reclaims everything at once, without running destructors, which is
//! sound because both kinds are `Copy`. The handles borrow from the
//! arena, so it necessarily outlives them.
//!
//! Arena exhaustion fails the run closed: the offending placement
//! returns an error before any out-of-bounds write, and no partial
//! traversal is timed.

use polystore_arena::{ArenaConfig, BumpArena};
use polystore_core::{
    time_pass, Additive, Apply, KindTag, Multiplicative, RunOutcome, Strategy, StrategyError,
};

/// Array of non-owning polymorphic handles into bump-arena placements.
pub struct ArenaHandles;

impl ArenaHandles {
    /// Populate `len` slots out of `arena`, then time one traversal.
    ///
    /// Split out from [`Strategy::run`] so tests can force exhaustion
    /// with an undersized arena.
    fn run_in(arena: &BumpArena, len: usize) -> Result<RunOutcome, StrategyError> {
        let mut handles: Vec<&mut dyn Apply> = Vec::with_capacity(len);
        for i in 0..len {
            let handle: &mut dyn Apply = match KindTag::for_index(i) {
                KindTag::Additive => arena.place(Additive::default())?,
                KindTag::Multiplicative => arena.place(Multiplicative::default())?,
            };
            handles.push(handle);
        }

        let elapsed = time_pass(|| {
            for handle in handles.iter_mut() {
                handle.apply();
            }
        });

        let readings = handles.iter().map(|handle| handle.reading()).collect();
        Ok(RunOutcome { elapsed, readings })
    }
}

impl Strategy for ArenaHandles {
    fn label(&self) -> &'static str {
        "arena-backed"
    }

    fn run(&self, len: usize) -> Result<RunOutcome, StrategyError> {
        let arena = BumpArena::new(ArenaConfig::for_slots::<Additive, Multiplicative>(len));
        Self::run_in(&arena, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polystore_core::SlotReading;
    use proptest::prelude::*;

    #[test]
    fn population_follows_index_parity() {
        let outcome = ArenaHandles.run(10).unwrap();
        for (i, reading) in outcome.readings.iter().enumerate() {
            assert_eq!(reading.tag(), KindTag::for_index(i), "slot {i}");
        }
    }

    #[test]
    fn traversal_computes_expected_results() {
        let outcome = ArenaHandles.run(2).unwrap();
        assert_eq!(
            outcome.readings,
            vec![SlotReading::Additive(12), SlotReading::Multiplicative(18.0)]
        );
    }

    #[test]
    fn undersized_arena_fails_closed() {
        let arena = BumpArena::with_capacity(std::mem::size_of::<Additive>());
        let err = ArenaHandles::run_in(&arena, 4).unwrap_err();
        assert!(matches!(err, StrategyError::ArenaExhausted { .. }));
    }

    #[test]
    fn placements_reuse_nothing_between_runs() {
        // Each run creates a fresh arena; results must match exactly.
        let first = ArenaHandles.run(16).unwrap();
        let second = ArenaHandles.run(16).unwrap();
        assert_eq!(first.readings, second.readings);
    }

    #[test]
    fn empty_collection_runs_cleanly() {
        let outcome = ArenaHandles.run(0).unwrap();
        assert!(outcome.readings.is_empty());
    }

    proptest! {
        #[test]
        fn every_slot_populated_for_any_len(len in 0usize..200) {
            let outcome = ArenaHandles.run(len).unwrap();
            prop_assert_eq!(outcome.readings.len(), len);
            for (i, reading) in outcome.readings.iter().enumerate() {
                prop_assert_eq!(reading.tag(), KindTag::for_index(i));
            }
        }
    }
}
