//! Indirect-handle layout: borrowed handles into per-kind backing arrays.
//!
//! Two backing vectors each own all instances of one kind, pre-built
//! before population. The handle array holds `&mut dyn Apply` borrows
//! interleaved by the parity rule. The borrow checker enforces the
//! lifetime invariant — handles cannot outlive the backing storage, and
//! the backing vectors cannot be resized or relocated while handles
//! exist.

use polystore_core::{
    time_pass, Additive, Apply, KindTag, Multiplicative, RunOutcome, Strategy, StrategyError,
};

/// Array of non-owning polymorphic handles into two per-kind backing arrays.
pub struct IndirectHandles;

impl Strategy for IndirectHandles {
    fn label(&self) -> &'static str {
        "indirect-handle"
    }

    fn run(&self, len: usize) -> Result<RunOutcome, StrategyError> {
        // Even indices take the additive kind, so its backing array is
        // one longer when len is odd.
        let mut additive: Vec<Additive> = vec![Additive::default(); len.div_ceil(2)];
        let mut multiplicative: Vec<Multiplicative> = vec![Multiplicative::default(); len / 2];

        let mut handles: Vec<&mut dyn Apply> = Vec::with_capacity(len);
        let mut additive_iter = additive.iter_mut();
        let mut multiplicative_iter = multiplicative.iter_mut();
        for i in 0..len {
            match KindTag::for_index(i) {
                KindTag::Additive => handles.push(
                    additive_iter
                        .next()
                        .expect("additive backing holds one instance per even index"),
                ),
                KindTag::Multiplicative => handles.push(
                    multiplicative_iter
                        .next()
                        .expect("multiplicative backing holds one instance per odd index"),
                ),
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
