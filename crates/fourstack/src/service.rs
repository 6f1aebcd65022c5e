//! The move service: one request-response evaluation per inbound event.
//!
//! The flow per move mirrors the host platform's server-function contract:
//!
//!   1. Fetch the current versioned snapshot from the store
//!   2. Bind the caller's identity as the acting player
//!   3. Validate the raw column index (contract check, not a rule check)
//!   4. Run the rules engine
//!   5. Commit the delta plus the outcome event at the fetched version
//!
//! The service holds no lock across the fetch-commit gap; the store's
//! version check closes the race where two valid-looking moves were
//! evaluated against the same stale snapshot. Commit failures surface
//! unchanged, with no retry.

use fourstack_engine::Game;
use fourstack_protocol::{
    GameId, MoveOutcome, MoveRequest, PlayerId, PlayerSeat, ProtocolError,
};
use fourstack_store::{GameRecord, GameStore};

use crate::FourstackError;

/// Processes moves against a [`GameStore`].
///
/// Generic over the store so hosts inject their own backend; tests and
/// embedded use pair it with
/// [`MemoryStore`](fourstack_store::MemoryStore).
#[derive(Debug)]
pub struct MoveService<S> {
    store: S,
}

impl<S: GameStore> MoveService<S> {
    /// Creates a service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrows the underlying store (event feeds, host-side queries).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Initializes a new game: the given seats over seven empty columns.
    ///
    /// Seat assignment and color allocation happen upstream (lobby); this
    /// checks only what the engine later relies on.
    ///
    /// # Errors
    /// [`ProtocolError::InvalidMessage`] if fewer than two seats arrive or
    /// the seats do not name exactly one turn holder.
    pub async fn create_game(
        &self,
        seats: Vec<PlayerSeat>,
    ) -> Result<GameId, FourstackError> {
        if seats.len() < 2 {
            return Err(ProtocolError::InvalidMessage(
                "a game needs at least two seats".into(),
            )
            .into());
        }
        let turn_holders =
            seats.iter().filter(|seat| seat.status.has_turn()).count();
        if turn_holders != 1 {
            return Err(ProtocolError::InvalidMessage(format!(
                "expected exactly one turn holder, got {turn_holders}"
            ))
            .into());
        }

        let game_id = self.store.create(GameRecord::new_game(seats)).await?;
        tracing::info!(%game_id, "game initialized");
        Ok(game_id)
    }

    /// Processes one move event on behalf of `player_id`.
    ///
    /// Returns the outcome event exactly as committed. Rule violations come
    /// back as [`FourstackError::Rule`] (a 403 reply via
    /// [`FourstackError::reply`]); everything else is a contract or
    /// infrastructure failure for the host to handle.
    pub async fn handle_move(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        request: MoveRequest,
    ) -> Result<MoveOutcome, FourstackError> {
        let column = request.column()?;

        let fetched = self.store.fetch(game_id).await?;
        let mut game = Game::from_snapshot(fetched.snapshot_for(player_id))?;

        let outcome = match game.play(column) {
            Ok(outcome) => outcome,
            Err(rule) => {
                tracing::debug!(
                    %game_id,
                    player = %player_id,
                    %column,
                    reason = %rule,
                    "move rejected"
                );
                return Err(rule.into());
            }
        };

        let version = self
            .store
            .commit(
                game_id,
                fetched.version,
                game.into_snapshot().into(),
                outcome,
            )
            .await?;

        tracing::info!(
            %game_id,
            player = %player_id,
            %column,
            version,
            "move committed"
        );
        Ok(outcome)
    }
}
