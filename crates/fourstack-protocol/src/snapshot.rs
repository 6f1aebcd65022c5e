//! The game snapshot: the state object exchanged with the host platform.
//!
//! The engine never owns long-lived storage. Per invocation it receives a
//! [`GameSnapshot`] (seats, game status, the caller's own identity, and the
//! board state) and returns a description of the mutation to apply. The
//! board state travels as an object keyed `column_0` through `column_6`,
//! each an ordered bottom-to-top list of player ids.

use serde::{Deserialize, Serialize};

use crate::{ColumnIndex, GameStatus, PlayerId, PlayerSeat};

// ---------------------------------------------------------------------------
// BoardColumns
// ---------------------------------------------------------------------------

/// The wire form of the board: seven ordered stacks of player ids.
///
/// `Default` is the initialization contract: seven empty lists, handed to
/// the persistence collaborator as a new game's initial state. Capacity
/// (max 6 per column) is a rule the engine enforces, not a shape this type
/// can express, so deserializing an oversized column succeeds here and is
/// rejected as a contract violation by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumns {
    pub column_0: Vec<PlayerId>,
    pub column_1: Vec<PlayerId>,
    pub column_2: Vec<PlayerId>,
    pub column_3: Vec<PlayerId>,
    pub column_4: Vec<PlayerId>,
    pub column_5: Vec<PlayerId>,
    pub column_6: Vec<PlayerId>,
}

impl BoardColumns {
    /// Borrows the stack for a column. Bottom of stack = first element.
    pub fn column(&self, index: ColumnIndex) -> &Vec<PlayerId> {
        match index.as_usize() {
            0 => &self.column_0,
            1 => &self.column_1,
            2 => &self.column_2,
            3 => &self.column_3,
            4 => &self.column_4,
            5 => &self.column_5,
            _ => &self.column_6,
        }
    }

    /// Mutably borrows the stack for a column.
    pub fn column_mut(&mut self, index: ColumnIndex) -> &mut Vec<PlayerId> {
        match index.as_usize() {
            0 => &mut self.column_0,
            1 => &mut self.column_1,
            2 => &mut self.column_2,
            3 => &mut self.column_3,
            4 => &mut self.column_4,
            5 => &mut self.column_5,
            _ => &mut self.column_6,
        }
    }

    /// Iterates the seven columns in order.
    pub fn columns(&self) -> impl Iterator<Item = &Vec<PlayerId>> {
        ColumnIndex::all().map(|c| self.column(c))
    }

    /// Total tokens placed on the board.
    pub fn token_count(&self) -> usize {
        self.columns().map(Vec::len).sum()
    }
}

// ---------------------------------------------------------------------------
// GameSnapshot
// ---------------------------------------------------------------------------

/// The full game state the engine consumes for one move evaluation.
///
/// `own_player_id` is invocation context, not stored state: it names the
/// player on whose behalf this evaluation runs (the host injects it per
/// request). The seat list is ordered; rotation follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Ordered seats; order fixes turn rotation.
    pub players: Vec<PlayerSeat>,

    /// Whether the game can still accept moves.
    pub status: GameStatus,

    /// The player this evaluation acts for.
    #[serde(rename = "ownPlayerID")]
    pub own_player_id: PlayerId,

    /// The board, as seven bottom-to-top stacks.
    pub state: BoardColumns,
}

// =========================================================================
// Tests
// =========================================================================
