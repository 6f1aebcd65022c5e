//! Move events: the inbound request and the outbound outcome.
//!
//! One inbound shape, three outbound shapes, one error shape. The field
//! name `row` on the inbound event is historical host vocabulary for the
//! target COLUMN (see [`MoveRequest::column`]); the outbound shapes use
//! `column` consistently.

use serde::{Deserialize, Serialize};

use crate::{ColumnIndex, PlayerId, ProtocolError};

// ---------------------------------------------------------------------------
// MoveRequest
// ---------------------------------------------------------------------------

/// An inbound move event: `{ "row": <0..6> }`.
///
/// `row` names the target column, not a horizontal line. The raw value is
/// carried as received; [`MoveRequest::column`] performs the range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Target column index (host vocabulary: "row").
    pub row: u8,
}

impl MoveRequest {
    /// Validates the raw index into a [`ColumnIndex`].
    ///
    /// # Errors
    /// [`ProtocolError::ColumnOutOfRange`] for 7 and above. Inbound events
    /// are externally validated, so this failing means the upstream layer
    /// broke its contract; it is not a game-rule violation.
    pub fn column(self) -> Result<ColumnIndex, ProtocolError> {
        ColumnIndex::try_from(self.row)
    }
}

// ---------------------------------------------------------------------------
// MoveOutcome
// ---------------------------------------------------------------------------

/// The structured result of one accepted move.
///
/// Serializes untagged into exactly one of the host's three event shapes:
///
/// ```text
/// { "column": 3, "winnerID": 7 }     — the move won the game
/// { "column": 3, "endTurn": true }   — legal move, turn passes
/// { "column": 3, "draw": true }      — 42nd token, no alignment
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoveOutcome {
    /// The acting player completed a four-token alignment.
    Win {
        column: ColumnIndex,
        #[serde(rename = "winnerID")]
        winner_id: PlayerId,
    },

    /// Legal move with no alignment; the turn passes to the next seat.
    TurnPassed {
        column: ColumnIndex,
        #[serde(rename = "endTurn")]
        end_turn: bool,
    },

    /// The board filled without an alignment; the game is over undecided.
    Draw { column: ColumnIndex, draw: bool },
}

impl MoveOutcome {
    /// A winning outcome for `winner_id` at `column`.
    pub fn win(column: ColumnIndex, winner_id: PlayerId) -> Self {
        Self::Win { column, winner_id }
    }

    /// A turn-passing outcome at `column`.
    pub fn turn_passed(column: ColumnIndex) -> Self {
        Self::TurnPassed {
            column,
            end_turn: true,
        }
    }

    /// A draw outcome at `column`.
    pub fn draw(column: ColumnIndex) -> Self {
        Self::Draw { column, draw: true }
    }

    /// The column the move targeted, whatever the outcome.
    pub fn column(self) -> ColumnIndex {
        match self {
            Self::Win { column, .. }
            | Self::TurnPassed { column, .. }
            | Self::Draw { column, .. } => column,
        }
    }

    /// The winner, if this outcome decided the game.
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Self::Win { winner_id, .. } => Some(winner_id),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ErrorReply
// ---------------------------------------------------------------------------

/// The error shape returned across the host boundary: `{ code, data }`.
///
/// Rule violations (not your turn, column full) both travel as code 403
/// with a human-readable reason. This is a reply, not an exception: the
/// host forwards it to the offending client and the game state stays
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    /// HTTP-style status code; 403 for every rule violation.
    pub code: u16,

    /// Human-readable reason.
    pub data: String,
}

impl ErrorReply {
    /// A 403 reply with the given reason.
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self {
            code: 403,
            data: reason.into(),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
