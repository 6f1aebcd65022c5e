//! Wire protocol for Fourstack.
//!
//! This crate defines everything that crosses the host-platform boundary:
//!
//! - **Types** ([`PlayerId`], [`ColumnIndex`], [`PlayerSeat`], etc.) —
//!   identities and statuses as they appear on the wire.
//! - **Snapshot** ([`GameSnapshot`], [`BoardColumns`]) — the game state
//!   the host hands to the engine and receives back.
//! - **Events** ([`MoveRequest`], [`MoveOutcome`], [`ErrorReply`]) — the
//!   inbound move and the structured result of processing it.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how those shapes are
//!   converted to/from bytes.
//! - **Errors** ([`ProtocolError`]) — what can go wrong before the rules
//!   engine ever runs.
//!
//! # Architecture
//!
//! The protocol layer sits below everything else. It knows nothing about
//! boards or turns; it only pins the exact shapes the embedding host
//! expects, down to field names like `playerID` and `endTurn`.
//!
//! ```text
//! Host (bytes) → Protocol (snapshot + events) → Engine (rules)
//! ```

mod codec;
mod error;
mod event;
mod snapshot;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use event::{ErrorReply, MoveOutcome, MoveRequest};
pub use snapshot::{BoardColumns, GameSnapshot};
pub use types::{
    ColumnIndex, GameId, GameStatus, PlayerId, PlayerSeat, PlayerStatus,
};
