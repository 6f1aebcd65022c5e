//! Game-state persistence seam for Fourstack.
//!
//! The rules engine never talks to storage directly. It is handed a
//! snapshot, returns a delta, and a [`GameStore`] implementation performs
//! the fetch and the atomic commit around it:
//!
//! 1. **Fetch** — read the current versioned state of a game
//! 2. **Evaluate** — (engine, not this crate)
//! 3. **Commit** — write the new state, rejecting the write if someone
//!    else committed first (optimistic versioning)
//!
//! The version check is the required second defense layer: the engine's
//! own validation catches illegal moves, but two legal-looking moves
//! evaluated against the same stale snapshot can only be told apart here.
//!
//! # How it fits in the stack
//!
//! ```text
//! Service (above)  ← fetch → engine → commit, per move
//! Store Layer (this crate)  ← owns versions and the committed event feed
//! Protocol Layer (below)  ← provides the snapshot and event shapes
//! ```

#![allow(async_fn_in_trait)]

mod error;
mod memory;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{GameRecord, GameStore, VersionedGame};
