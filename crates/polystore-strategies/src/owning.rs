//! Owning-handle layout: one heap allocation per element.
//!
//! The baseline everything else is compared against. Each slot is an
//! exclusively-owned `Box<dyn Apply>`; traversal dispatches through the
//! vtable. Dropping the vector drops every instance exactly once. Heap
//! exhaustion during population aborts the process — Rust's global
//! allocator does not report OOM as a recoverable error.

use polystore_core::{
    time_pass, Additive, Apply, KindTag, Multiplicative, RunOutcome, Strategy, StrategyError,
};

/// Array of exclusively-owned, heap-placed polymorphic values.
pub struct OwningHandles;

impl Strategy for OwningHandles {
    fn label(&self) -> &'static str {
        "owning-handle"
    }

    fn run(&self, len: usize) -> Result<RunOutcome, StrategyError> {
        let mut handles: Vec<Box<dyn Apply>> = Vec::with_capacity(len);
        for i in 0..len {
            match KindTag::for_index(i) {
                KindTag::Additive => handles.push(Box::new(Additive::default())),
                KindTag::Multiplicative => handles.push(Box::new(Multiplicative::default())),
            }
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

#[cfg(test)]
mod tests {
    use super::*;
    use polystore_core::SlotReading;
    use proptest::prelude::*;

    #[test]
    fn population_follows_index_parity() {
        let outcome = OwningHandles.run(7).unwrap();
        assert_eq!(outcome.readings.len(), 7);
        for (i, reading) in outcome.readings.iter().enumerate() {
            assert_eq!(reading.tag(), KindTag::for_index(i), "slot {i}");
        }
    }

    #[test]
    fn traversal_computes_expected_results() {
        let outcome = OwningHandles.run(4).unwrap();
        assert_eq!(
            outcome.readings,
            vec![
                SlotReading::Additive(12),
                SlotReading::Multiplicative(18.0),
                SlotReading::Additive(12),
                SlotReading::Multiplicative(18.0),
            ]
        );
    }

    #[test]
    fn empty_collection_runs_cleanly() {
        let outcome = OwningHandles.run(0).unwrap();
        assert!(outcome.readings.is_empty());
    }

    proptest! {
        #[test]
        fn every_slot_populated_for_any_len(len in 0usize..200) {
            let outcome = OwningHandles.run(len).unwrap();
            prop_assert_eq!(outcome.readings.len(), len);
            for (i, reading) in outcome.readings.iter().enumerate() {
                prop_assert_eq!(reading.tag(), KindTag::for_index(i));
            }
        }
    }
}
