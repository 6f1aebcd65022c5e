//! Core wire types: identities, column indices, and statuses.
//!
//! These are the building blocks every other shape is made of. Their JSON
//! representations are part of the contract with the host platform, so
//! each one is pinned by a serialization test below.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a player.
///
/// Newtype over `u64` so a player id can never be confused with a game id,
/// even though both are plain numbers on the wire.
/// `#[serde(transparent)]` serializes `PlayerId(42)` as just `42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

/// A unique identifier for a game instance.
///
/// Allocated by the persistence collaborator when a game is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ColumnIndex
// ---------------------------------------------------------------------------

/// A validated column index on the 7-column board.
///
/// A `ColumnIndex` can only hold 0..=6, so code that receives one never has
/// to re-check the range. Raw input (the `row` field of a move request)
/// goes through [`TryFrom<u8>`], which rejects out-of-range values with
/// [`ProtocolError::ColumnOutOfRange`] before the rules engine runs.
///
/// Serializes as the bare number; deserialization goes through the same
/// validation (`try_from`), so a malformed snapshot cannot smuggle in an
/// eighth column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ColumnIndex(u8);

impl ColumnIndex {
    /// Number of columns on the board.
    pub const COUNT: u8 = 7;

    /// Creates a column index, returning `None` for 7 and above.
    pub fn new(index: u8) -> Option<Self> {
        (index < Self::COUNT).then_some(Self(index))
    }

    /// The index as a `usize`, for slice addressing. Always < 7.
    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }

    /// Iterates all seven columns in order, 0 through 6.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self)
    }
}

impl TryFrom<u8> for ColumnIndex {
    type Error = ProtocolError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(ProtocolError::ColumnOutOfRange(index))
    }
}

impl From<ColumnIndex> for u8 {
    fn from(column: ColumnIndex) -> u8 {
        column.0
    }
}

impl fmt::Display for ColumnIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

/// A player's turn/outcome status within a game.
///
/// Invariant (enforced by the engine, relied on here): while a game is
/// active and undecided, exactly one seat holds `HasTurn`.
///
/// Snake_case on the wire: `"has_turn"`, `"waiting_turn"`, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    /// This player is the one permitted to move.
    HasTurn,
    /// Waiting for the turn holder to move.
    WaitingTurn,
    /// This player produced a winning alignment. Terminal.
    Winner,
    /// Another player won. Terminal.
    Loser,
}

impl PlayerStatus {
    /// Returns `true` if this seat currently holds the turn.
    pub fn has_turn(self) -> bool {
        matches!(self, Self::HasTurn)
    }
}

/// The lifecycle status of a game.
///
/// Created `Active`; becomes `Over` the instant a winning alignment is
/// detected, or when the 42nd token fills the board without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Active,
    Over,
}

impl GameStatus {
    /// Returns `true` if moves can still be processed.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

// ---------------------------------------------------------------------------
// PlayerSeat
// ---------------------------------------------------------------------------

/// One entry in a game's ordered player list.
///
/// Seat order is fixed at game creation and determines turn rotation.
/// Field names follow the host's camelCase convention (`playerID`,
/// `playerColor`), pinned by tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeat {
    /// The player's opaque identity.
    #[serde(rename = "playerID")]
    pub player_id: PlayerId,

    /// Display color, opaque to the rules engine.
    #[serde(rename = "playerColor")]
    pub player_color: String,

    /// Current turn/outcome status.
    pub status: PlayerStatus,
}

impl PlayerSeat {
    /// Creates a seat in the given status.
    pub fn new(
        player_id: PlayerId,
        player_color: impl Into<String>,
        status: PlayerStatus,
    ) -> Self {
        Self {
            player_id,
            player_color: player_color.into(),
            status,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
