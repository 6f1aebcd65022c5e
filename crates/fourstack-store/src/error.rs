//! Error types for the store layer.

use fourstack_protocol::GameId;

/// Errors that can occur during store operations.
///
/// None of these are game-rule errors; they propagate to the original
/// caller unchanged and are never retried by the core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No game exists under this id.
    #[error("game {0} not found")]
    NotFound(GameId),

    /// The commit was evaluated against a stale snapshot: another commit
    /// landed between this caller's fetch and its commit.
    #[error("version conflict on game {game_id}: expected {expected}, found {actual}")]
    VersionConflict {
        game_id: GameId,
        expected: u64,
        actual: u64,
    },
}
