//! Sequencing and timing of the strategy runs.

use polystore_core::{RunOutcome, Strategy, StrategyError};
use polystore_strategies::{
    ArenaHandles, IndirectHandles, ManualSlots, OwningHandles, TaggedSlots,
};

use crate::report::Report;

/// Collection length used by the binary: the reference workload.
pub const DEFAULT_LEN: usize = 10_000;

/// One strategy's outcome, labelled for reporting and verification.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledOutcome {
    /// The strategy's display label.
    pub label: &'static str,
    /// Its timed run.
    pub outcome: RunOutcome,
}

/// The strategies in fixed report order.
pub fn strategies() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(OwningHandles),
        Box::new(ArenaHandles),
        Box::new(TaggedSlots),
        Box::new(IndirectHandles),
        Box::new(ManualSlots),
    ]
}

/// Run every strategy once at `len` and keep the full outcomes.
///
/// Each strategy moves through the same lifecycle inside its `run`
/// call: empty storage is created, every slot is populated by the
/// parity rule, one traversal is timed between two monotonic
/// timestamps, and the row is recorded. Strategies execute strictly
/// one after another — never concurrently — so cache and scheduler
/// effects from one measurement cannot bleed into the next. The first
/// error aborts the whole run; there are no retries and no partial
/// reports.
pub fn run_all_outcomes(len: usize) -> Result<Vec<LabeledOutcome>, StrategyError> {
    let mut outcomes = Vec::new();
    for strategy in strategies() {
        let outcome = strategy.run(len)?;
        outcomes.push(LabeledOutcome {
            label: strategy.label(),
            outcome,
        });
    }
    Ok(outcomes)
}

/// Run every strategy once at `len` and collect just the timing rows.
pub fn run_all(len: usize) -> Result<Report, StrategyError> {
    let mut report = Report::new();
    for labeled in run_all_outcomes(len)? {
        report.record(labeled.label, labeled.outcome.elapsed);
    }
    Ok(report)
}
