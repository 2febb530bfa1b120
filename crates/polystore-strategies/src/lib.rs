//! The five storage-layout strategies compared by the benchmark.
//!
//! Each strategy implements the same contract — populate `len` slots by
//! index parity, time one full traversal, report per-slot readings —
//! over a different layout:
//!
//! 1. [`OwningHandles`] — one heap allocation per element, vtable dispatch.
//! 2. [`TaggedSlots`] — in-place closed-set enum, match dispatch.
//! 3. [`IndirectHandles`] — borrowed handles into per-kind backing arrays.
//! 4. [`ManualSlots`] — hand-rolled union with an external discriminant.
//! 5. [`ArenaHandles`] — borrowed handles into a bump arena.
//!
//! The manual-union module is the one `unsafe` exemption in this crate;
//! every union read there carries a `// SAFETY:` comment citing the tag
//! invariant.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena_backed;
pub mod indirect;
pub mod manual;
pub mod owning;
pub mod tagged;

pub use arena_backed::ArenaHandles;
pub use indirect::IndirectHandles;
pub use manual::{ManualSlot, ManualSlots};
pub use owning::OwningHandles;
pub use tagged::{KindSlot, TaggedSlots};
