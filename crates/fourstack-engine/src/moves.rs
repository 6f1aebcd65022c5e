//! The move processor: one inbound move evaluated to completion.
//!
//! State machine per game:
//!
//! ```text
//! active/has_turn(P) ──legal, no win──→ active/has_turn(next)
//!                    ──legal, win────→ over/winner(P)
//!                    ──legal, 42nd──→ over (drawn)
//! ```
//!
//! Rejections ([`RuleError`]) leave the game untouched; side effects are
//! confined to the mutated [`Game`], which the caller hands to the
//! persistence collaborator as a delta.

use fourstack_protocol::{ColumnIndex, MoveOutcome};

use crate::{Game, RuleError, win};

impl Game {
    /// Processes one move for the acting player at `column`.
    ///
    /// Steps: turn check, capacity check, append, win evaluation, then the
    /// matching terminal or rotation transition.
    ///
    /// # Errors
    /// - [`RuleError::NotYourTurn`] if the acting player does not hold the
    ///   turn (including any move against a decided game)
    /// - [`RuleError::ColumnFull`] if the column already holds six tokens
    ///
    /// On error the game state is exactly as it was.
    pub fn play(&mut self, column: ColumnIndex) -> Result<MoveOutcome, RuleError> {
        if !self.has_turn() {
            return Err(RuleError::NotYourTurn);
        }

        let mover = self.own_player_id();
        let row = self.board_mut().drop_token(column, mover)?;
        tracing::debug!(player = %mover, %column, row, "token placed");

        if win::is_winning_board(self.board(), mover) {
            self.finish_won(mover);
            tracing::info!(winner = %mover, %column, "game over: alignment");
            return Ok(MoveOutcome::win(column, mover));
        }

        if self.board().is_full() {
            self.finish_drawn();
            tracing::info!(%column, "game over: board full, drawn");
            return Ok(MoveOutcome::draw(column));
        }

        self.pass_turn();
        Ok(MoveOutcome::turn_passed(column))
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fourstack_protocol::{
        BoardColumns, GameSnapshot, GameStatus, PlayerId, PlayerSeat,
        PlayerStatus,
    };

    fn pid(id: u64) -> PlayerId {
        PlayerId(id)
    }

    fn col(index: u8) -> ColumnIndex {
        ColumnIndex::new(index).unwrap()
    }

    fn snapshot_for(own: u64, turn_holder: u64) -> GameSnapshot {
        let status_of = |id: u64| {
            if id == turn_holder {
                PlayerStatus::HasTurn
            } else {
                PlayerStatus::WaitingTurn
            }
        };
        GameSnapshot {
            players: vec![
                PlayerSeat::new(pid(1), "red", status_of(1)),
                PlayerSeat::new(pid(2), "yellow", status_of(2)),
            ],
            status: GameStatus::Active,
            own_player_id: pid(own),
            state: BoardColumns::default(),
        }
    }

    #[test]
    fn test_play_without_turn_rejected_and_board_unchanged() {
        let mut game = Game::from_snapshot(snapshot_for(2, 1)).unwrap();

        let result = game.play(col(3));

        assert_eq!(result, Err(RuleError::NotYourTurn));
        assert_eq!(game.board().token_count(), 0);
        assert_eq!(game.player_with_turn().unwrap().player_id, pid(1));
    }

    #[test]
    fn test_play_into_full_column_rejected_and_board_unchanged() {
        let mut snap = snapshot_for(1, 1);
        for i in 0..6u64 {
            snap.state.column_mut(col(2)).push(pid(1 + (i % 2)));
        }
        let mut game = Game::from_snapshot(snap).unwrap();

        let result = game.play(col(2));

        assert_eq!(result, Err(RuleError::ColumnFull(col(2))));
        assert_eq!(game.board().token_count(), 6);
        assert!(game.has_turn(), "turn not consumed by a rejected move");
    }

    #[test]
    fn test_legal_move_passes_turn_to_next_seat() {
        let mut game = Game::from_snapshot(snapshot_for(1, 1)).unwrap();

        let outcome = game.play(col(0)).unwrap();

        assert_eq!(outcome, MoveOutcome::turn_passed(col(0)));
        assert_eq!(game.player_with_turn().unwrap().player_id, pid(2));
        assert_eq!(game.board().column(col(0)), &[pid(1)]);
        assert!(!game.is_over());
    }

    #[test]
    fn test_fourth_vertical_token_wins() {
        // Simulates alternating-rule bypass: the engine re-reads turn
        // status from the snapshot, so keep re-granting the turn to the
        // same player between moves.
        let mut snap = snapshot_for(1, 1);
        for placed in 0..3 {
            let mut game = Game::from_snapshot(snap.clone()).unwrap();
            let outcome = game.play(col(3)).unwrap();
            assert_eq!(
                outcome,
                MoveOutcome::turn_passed(col(3)),
                "no win after {} tokens",
                placed + 1
            );
            snap = game.into_snapshot();
            snap.players[0].status = PlayerStatus::HasTurn;
            snap.players[1].status = PlayerStatus::WaitingTurn;
        }

        let mut game = Game::from_snapshot(snap).unwrap();
        let outcome = game.play(col(3)).unwrap();

        assert_eq!(outcome, MoveOutcome::win(col(3), pid(1)));
        assert!(game.is_over());
        assert_eq!(game.player(pid(1)).unwrap().status, PlayerStatus::Winner);
        assert_eq!(game.player(pid(2)).unwrap().status, PlayerStatus::Loser);
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut game = Game::from_snapshot(snapshot_for(1, 1)).unwrap();
        game.finish_won(pid(2));

        let result = game.play(col(0));

        assert_eq!(result, Err(RuleError::NotYourTurn));
    }

    #[test]
    fn test_forty_second_token_without_alignment_draws() {
        // Full-board pattern with no four-in-a-row anywhere: columns in
        // {0,1,4,5} stack red/yellow alternating from red; columns in
        // {2,3,6} from yellow. Leave the very top of column 6 open.
        let mut snap = snapshot_for(1, 1);
        for c in 0..7u8 {
            let base_red = matches!(c, 0 | 1 | 4 | 5);
            let height = if c == 6 { 5 } else { 6 };
            for r in 0..height {
                let red_cell = base_red == (r % 2 == 0);
                let owner = if red_cell { pid(1) } else { pid(2) };
                snap.state.column_mut(col(c)).push(owner);
            }
        }
        // Top of column 6 belongs to red by the pattern; red is to move.
        let mut game = Game::from_snapshot(snap).unwrap();

        let outcome = game.play(col(6)).unwrap();

        assert_eq!(outcome, MoveOutcome::draw(col(6)));
        assert!(game.is_over());
        assert!(game.player_with_turn().is_none());
        assert_eq!(game.board().token_count(), 42);
    }
}
