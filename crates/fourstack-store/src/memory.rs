//! In-memory reference implementation of [`GameStore`].
//!
//! Backs tests and embedded hosts. A plain `HashMap` behind a single
//! `tokio::sync::Mutex`: every store operation is short and allocation-
//! light, so one lock is simpler than sharding and still serializes
//! commits per process, which is exactly what the version check needs.

use std::collections::HashMap;

use fourstack_protocol::{GameId, MoveOutcome};
use rand::Rng;
use tokio::sync::Mutex;

use crate::{GameRecord, GameStore, StoreError, VersionedGame};

/// One stored game: versioned state plus the ordered feed of committed
/// outcome events (what the host would fan out to clients).
#[derive(Debug, Clone)]
struct StoredGame {
    version: u64,
    record: GameRecord,
    events: Vec<MoveOutcome>,
}

/// An in-memory, process-local [`GameStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: Mutex<HashMap<GameId, StoredGame>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed outcome events for a game, oldest first.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if no game exists under `game_id`.
    pub async fn events(
        &self,
        game_id: GameId,
    ) -> Result<Vec<MoveOutcome>, StoreError> {
        let games = self.games.lock().await;
        games
            .get(&game_id)
            .map(|stored| stored.events.clone())
            .ok_or(StoreError::NotFound(game_id))
    }

    /// Number of games currently stored.
    pub async fn len(&self) -> usize {
        self.games.lock().await.len()
    }

    /// Returns `true` if no games are stored.
    pub async fn is_empty(&self) -> bool {
        self.games.lock().await.is_empty()
    }
}

impl GameStore for MemoryStore {
    async fn create(&self, record: GameRecord) -> Result<GameId, StoreError> {
        let mut games = self.games.lock().await;

        // Random ids, re-rolled on the (vanishingly rare) collision.
        let mut rng = rand::rng();
        let game_id = loop {
            let candidate = GameId(rng.random());
            if !games.contains_key(&candidate) {
                break candidate;
            }
        };

        games.insert(
            game_id,
            StoredGame {
                version: 0,
                record,
                events: Vec::new(),
            },
        );
        tracing::info!(%game_id, "game created");
        Ok(game_id)
    }

    async fn fetch(&self, game_id: GameId) -> Result<VersionedGame, StoreError> {
        let games = self.games.lock().await;
        let stored = games
            .get(&game_id)
            .ok_or(StoreError::NotFound(game_id))?;
        Ok(VersionedGame {
            version: stored.version,
            record: stored.record.clone(),
        })
    }

    async fn commit(
        &self,
        game_id: GameId,
        expected_version: u64,
        record: GameRecord,
        outcome: MoveOutcome,
    ) -> Result<u64, StoreError> {
        let mut games = self.games.lock().await;
        let stored = games
            .get_mut(&game_id)
            .ok_or(StoreError::NotFound(game_id))?;

        if stored.version != expected_version {
            tracing::debug!(
                %game_id,
                expected = expected_version,
                actual = stored.version,
                "commit rejected: stale snapshot"
            );
            return Err(StoreError::VersionConflict {
                game_id,
                expected: expected_version,
                actual: stored.version,
            });
        }

        stored.version += 1;
        stored.record = record;
        stored.events.push(outcome);
        tracing::info!(%game_id, version = stored.version, "state committed");
        Ok(stored.version)
    }
}

// =========================================================================
// Tests
// =========================================================================
