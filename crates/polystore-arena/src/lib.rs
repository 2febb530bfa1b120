//! Bump-pointer arena for the arena-handle layout strategy.
//!
//! A [`BumpArena`] owns one contiguous, zero-initialised byte buffer and
//! a monotonically advancing cursor. Placements are carved from the
//! buffer front to back; nothing is ever freed or coalesced, and no
//! destructor runs for placed objects (the [`BumpArena::place`] API
//! requires `Copy` payloads for exactly this reason). The only way to
//! reclaim the memory is to drop the whole arena.
//!
//! This crate is one of two in the workspace that may contain `unsafe`
//! code, along with the manual-union module in `polystore-strategies`.
//! Here it is confined to `bump.rs`, with a `// SAFETY:` comment on
//! every block.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod bump;
pub mod config;
pub mod error;

pub use bump::BumpArena;
pub use config::ArenaConfig;
pub use error::ArenaError;
