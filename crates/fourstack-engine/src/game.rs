//! The game aggregate: seats, status, board, and the acting player.
//!
//! A [`Game`] is built fresh from a host snapshot for every evaluation and
//! converted back into the delta the host commits. It owns nothing beyond
//! that one invocation.

use fourstack_protocol::{
    ColumnIndex, GameSnapshot, GameStatus, PlayerId, PlayerSeat, PlayerStatus,
};

use crate::{Board, SnapshotError};

/// One game, as seen by the rules engine for one move.
#[derive(Debug, Clone)]
pub struct Game {
    players: Vec<PlayerSeat>,
    status: GameStatus,
    board: Board,
    /// Index of the acting player's seat in `players`. Validated at
    /// construction so accessors never re-check.
    own_seat: usize,
}

impl Game {
    /// Builds a game from a host snapshot, validating the data contract.
    ///
    /// # Errors
    /// - [`SnapshotError::UnknownPlayer`] if `ownPlayerID` names no seat
    /// - [`SnapshotError::DuplicateTurnHolder`] if two seats claim the turn
    /// - [`SnapshotError::OversizedColumn`] if a stack exceeds the board
    ///   height
    ///
    /// All three are upstream contract violations and must propagate; they
    /// are never reported as rule violations.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        let board = Board::from_columns(&snapshot.state)?;

        let own_seat = snapshot
            .players
            .iter()
            .position(|seat| seat.player_id == snapshot.own_player_id)
            .ok_or(SnapshotError::UnknownPlayer(snapshot.own_player_id))?;

        let turn_holders = snapshot
            .players
            .iter()
            .filter(|seat| seat.status.has_turn())
            .count();
        if turn_holders > 1 {
            return Err(SnapshotError::DuplicateTurnHolder);
        }

        Ok(Self {
            players: snapshot.players,
            status: snapshot.status,
            board,
            own_seat,
        })
    }

    /// Converts back into the snapshot shape the host commits.
    pub fn into_snapshot(self) -> GameSnapshot {
        let state = self.board.to_columns();
        let own_player_id = self.players[self.own_seat].player_id;
        GameSnapshot {
            players: self.players,
            status: self.status,
            own_player_id,
            state,
        }
    }

    /// The board as it currently stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The ordered seat list.
    pub fn players(&self) -> &[PlayerSeat] {
        &self.players
    }

    /// The game lifecycle status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns `true` once the game has been decided.
    pub fn is_over(&self) -> bool {
        !self.status.is_active()
    }

    /// Looks up a seat by player identity.
    pub fn player(&self, id: PlayerId) -> Option<&PlayerSeat> {
        self.players.iter().find(|seat| seat.player_id == id)
    }

    /// The seat this evaluation acts for.
    pub fn own_player(&self) -> &PlayerSeat {
        &self.players[self.own_seat]
    }

    /// The unique seat holding the turn, or `None` once the game is
    /// decided.
    pub fn player_with_turn(&self) -> Option<&PlayerSeat> {
        self.players.iter().find(|seat| seat.status.has_turn())
    }

    /// Returns `true` if the acting player currently holds the turn.
    pub fn has_turn(&self) -> bool {
        self.own_player().status.has_turn()
    }

    /// Returns `true` iff the acting player holds the turn AND the column
    /// has room. Fails closed: a full column yields `false`, never an
    /// error.
    pub fn can_place(&self, column: ColumnIndex) -> bool {
        self.has_turn() && self.board.has_room(column)
    }

    // -- internals used by the move processor -----------------------------

    pub(crate) fn own_player_id(&self) -> PlayerId {
        self.players[self.own_seat].player_id
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Moves the turn from the acting player to the next seat in order.
    pub(crate) fn pass_turn(&mut self) {
        let next = (self.own_seat + 1) % self.players.len();
        self.players[self.own_seat].status = PlayerStatus::WaitingTurn;
        self.players[next].status = PlayerStatus::HasTurn;
    }

    /// Terminal transition for a win: mover becomes the winner, every other
    /// seat the loser, game over.
    pub(crate) fn finish_won(&mut self, winner: PlayerId) {
        for seat in &mut self.players {
            seat.status = if seat.player_id == winner {
                PlayerStatus::Winner
            } else {
                PlayerStatus::Loser
            };
        }
        self.status = GameStatus::Over;
    }

    /// Terminal transition for a full board with no alignment: nobody holds
    /// the turn, nobody won.
    pub(crate) fn finish_drawn(&mut self) {
        for seat in &mut self.players {
            seat.status = PlayerStatus::WaitingTurn;
        }
        self.status = GameStatus::Over;
    }
}

// =========================================================================
// Tests
// =========================================================================
