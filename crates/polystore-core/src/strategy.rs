//! The contract every storage strategy implements.

use crate::error::StrategyError;
use crate::kind::SlotReading;
use crate::timing::TimingSample;

/// One complete strategy execution: the timed traversal plus the
/// post-traversal state of every slot, in index order.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOutcome {
    /// Wall-clock time of the single traversal pass.
    pub elapsed: TimingSample,
    /// Per-slot readings taken after the traversal, one per slot.
    pub readings: Vec<SlotReading>,
}

/// A way of laying out and dispatching over a mixed collection of kinds.
///
/// `run` performs the full lifecycle in one call: construct storage for
/// `len` slots, populate them per [`KindTag::for_index`], time exactly
/// one in-order traversal invoking `apply()` on every slot, then collect
/// readings. Population and traversal share a stack frame because the
/// reference-based strategies hold borrows into sibling storage that
/// cannot outlive it.
///
/// Strategies share no state and may run in any order; the driver runs
/// them strictly sequentially so measurements do not interfere.
///
/// [`KindTag::for_index`]: crate::kind::KindTag::for_index
pub trait Strategy {
    /// Stable display name used in the report.
    fn label(&self) -> &'static str;

    /// Populate, traverse once under the clock, and collect readings.
    fn run(&self, len: usize) -> Result<RunOutcome, StrategyError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::KindTag;

    /// Minimal in-repo strategy used to exercise the trait object surface.
    struct Degenerate;

    impl Strategy for Degenerate {
        fn label(&self) -> &'static str {
            "degenerate"
        }

        fn run(&self, len: usize) -> Result<RunOutcome, StrategyError> {
            let readings = (0..len)
                .map(|i| match KindTag::for_index(i) {
                    KindTag::Additive => SlotReading::Additive(0),
                    KindTag::Multiplicative => SlotReading::Multiplicative(0.0),
                })
                .collect();
            Ok(RunOutcome {
                elapsed: TimingSample::default(),
                readings,
            })
        }
    }

    #[test]
    fn trait_is_object_safe() {
        let strategy: Box<dyn Strategy> = Box::new(Degenerate);
        assert_eq!(strategy.label(), "degenerate");
        let outcome = strategy.run(4).unwrap();
        assert_eq!(outcome.readings.len(), 4);
        assert_eq!(outcome.readings[0].tag(), KindTag::Additive);
        assert_eq!(outcome.readings[3].tag(), KindTag::Multiplicative);
    }

    #[test]
    fn zero_length_run_is_empty() {
        let outcome = Degenerate.run(0).unwrap();
        assert!(outcome.readings.is_empty());
    }
}
