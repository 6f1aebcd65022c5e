//! Error types for the rules engine.
//!
//! Two distinct kinds, deliberately not one enum:
//!
//! - [`RuleError`] — a player tried something the rules forbid. Recoverable,
//!   user-facing, always surfaced as a 403 reply.
//! - [`SnapshotError`] — the snapshot handed in by the host violates the
//!   data contract. Fatal for the request; propagates to the caller and is
//!   never dressed up as a rule violation.

use fourstack_protocol::{ColumnIndex, ErrorReply, PlayerId};

/// A move rejected by the game rules.
///
/// These are the only two domain errors in the core. The `#[error]` texts
/// are the wire-visible reasons, so they are part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The acting player does not hold the turn (also covers moves sent
    /// after the game is over, since no seat holds the turn then).
    #[error("Not this player's turn")]
    NotYourTurn,

    /// The target column already holds six tokens.
    #[error("The column {0} is full")]
    ColumnFull(ColumnIndex),
}

impl RuleError {
    /// The `{code: 403, data}` reply this violation travels as.
    pub fn reply(&self) -> ErrorReply {
        ErrorReply::forbidden(self.to_string())
    }
}

/// A snapshot that breaks the upstream contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// The acting player is not among the snapshot's seats.
    #[error("player {0} not present in snapshot")]
    UnknownPlayer(PlayerId),

    /// A column arrived holding more than six tokens.
    #[error("column {column} holds {len} tokens, exceeding the board height")]
    OversizedColumn { column: ColumnIndex, len: usize },

    /// More than one seat claims the turn.
    #[error("multiple seats hold the turn")]
    DuplicateTurnHolder,
}
