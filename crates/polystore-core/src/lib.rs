//! Core types and traits for the polystore layout benchmark.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the closed set of payload kinds, the dispatch capability they share,
//! the contract every storage strategy implements, and the timing and
//! error types the driver reports with.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod kind;
pub mod strategy;
pub mod timing;

pub use error::StrategyError;
pub use kind::{Additive, Apply, KindTag, Multiplicative, SlotReading, APPLY_ROUNDS};
pub use strategy::{RunOutcome, Strategy};
pub use timing::{time_pass, TimingSample};
