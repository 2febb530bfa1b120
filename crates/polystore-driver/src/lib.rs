//! Benchmark driver for the polystore layout strategies.
//!
//! Runs each strategy through the same lifecycle — construct storage,
//! populate by index parity, time one traversal, record the sample —
//! strictly sequentially so measurements do not interfere, and returns
//! the collected rows as data. Formatting and printing live at the
//! binary boundary (`src/main.rs`), not here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod driver;
pub mod report;
pub mod verify;

pub use driver::{run_all, run_all_outcomes, strategies, LabeledOutcome, DEFAULT_LEN};
pub use report::Report;
pub use verify::{verify_outcomes, MismatchError};
