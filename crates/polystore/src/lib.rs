//! Polystore: a micro-benchmark harness comparing storage layouts for a
//! closed set of polymorphic kinds.
//!
//! Five layouts populate the same mixed collection and dispatch the same
//! per-element operation; the driver times one traversal of each and
//! reports microseconds per layout. This is the top-level facade crate
//! re-exporting the public API from the sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use polystore::prelude::*;
//!
//! let report = run_all(64).unwrap();
//! assert_eq!(report.rows().count(), 5);
//! assert!(report.get("tagged-union").is_some());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `polystore-core` | Kinds, the `Apply` capability, timing, errors |
//! | [`arena`] | `polystore-arena` | Bump-pointer arena and its config |
//! | [`strategies`] | `polystore-strategies` | The five layout strategies |
//! | [`driver`] | `polystore-driver` | Run sequencing, report, verification |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core kinds, traits, timing, and errors (`polystore-core`).
pub use polystore_core as types;

/// Bump-pointer arena (`polystore-arena`).
pub use polystore_arena as arena;

/// The five layout strategies (`polystore-strategies`).
pub use polystore_strategies as strategies;

/// Run sequencing, reporting, and verification (`polystore-driver`).
pub use polystore_driver as driver;

/// Common imports for typical usage.
///
/// ```rust
/// use polystore::prelude::*;
/// ```
pub mod prelude {
    // Kinds and the capability under test
    pub use polystore_core::{
        Additive, Apply, KindTag, Multiplicative, RunOutcome, SlotReading, Strategy,
        StrategyError, TimingSample, APPLY_ROUNDS,
    };

    // Arena
    pub use polystore_arena::{ArenaConfig, ArenaError, BumpArena};

    // Strategies
    pub use polystore_strategies::{
        ArenaHandles, IndirectHandles, ManualSlots, OwningHandles, TaggedSlots,
    };

    // Driver
    pub use polystore_driver::{
        run_all, run_all_outcomes, verify_outcomes, Report, DEFAULT_LEN,
    };
}
