//! The `GameStore` trait and the records it traffics in.
//!
//! `GameStore` is the dependency-injection point for persistence: the
//! service takes any implementation and never knows whether it is the
//! in-memory reference store or a real backend on the host platform.

use fourstack_protocol::{
    BoardColumns, GameId, GameSnapshot, GameStatus, MoveOutcome, PlayerId,
    PlayerSeat,
};

use crate::StoreError;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// The stored shape of one game: everything in a snapshot except the
/// acting player, which is per-invocation context rather than state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Ordered seats; order fixes turn rotation.
    pub players: Vec<PlayerSeat>,

    /// Whether the game can still accept moves.
    pub status: GameStatus,

    /// The board, as seven bottom-to-top stacks.
    pub state: BoardColumns,
}

impl GameRecord {
    /// A freshly initialized game: the given seats over seven empty
    /// columns.
    pub fn new_game(players: Vec<PlayerSeat>) -> Self {
        Self {
            players,
            status: GameStatus::Active,
            state: BoardColumns::default(),
        }
    }
}

/// Dropping the acting-player context turns a committed snapshot back into
/// stored state.
impl From<GameSnapshot> for GameRecord {
    fn from(snapshot: GameSnapshot) -> Self {
        Self {
            players: snapshot.players,
            status: snapshot.status,
            state: snapshot.state,
        }
    }
}

/// A fetched game: the stored record plus the version the commit must
/// name to succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedGame {
    /// Monotonically increasing; bumped by one on every commit.
    pub version: u64,

    /// The stored game state.
    pub record: GameRecord,
}

impl VersionedGame {
    /// Binds the acting player into a snapshot for one engine invocation.
    pub fn snapshot_for(&self, own_player_id: PlayerId) -> GameSnapshot {
        GameSnapshot {
            players: self.record.players.clone(),
            status: self.record.status,
            own_player_id,
            state: self.record.state.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// GameStore
// ---------------------------------------------------------------------------

/// Atomic fetch/commit of authoritative game state.
///
/// Implementations decide where state lives; they MUST provide the
/// all-or-nothing commit with version conflict detection, because the core
/// holds no lock across the fetch-evaluate-commit gap.
pub trait GameStore: Send + Sync + 'static {
    /// Persists a new game and returns its allocated id.
    fn create(
        &self,
        record: GameRecord,
    ) -> impl Future<Output = Result<GameId, StoreError>> + Send;

    /// Reads the current versioned state of a game.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if no game exists under `game_id`.
    fn fetch(
        &self,
        game_id: GameId,
    ) -> impl Future<Output = Result<VersionedGame, StoreError>> + Send;

    /// Writes `record` and appends `outcome` to the game's event feed,
    /// provided the stored version still equals `expected_version`.
    /// Returns the new version.
    ///
    /// # Errors
    /// - [`StoreError::NotFound`] if the game vanished
    /// - [`StoreError::VersionConflict`] if another commit landed first;
    ///   the stored state is untouched in that case
    fn commit(
        &self,
        game_id: GameId,
        expected_version: u64,
        record: GameRecord,
        outcome: MoveOutcome,
    ) -> impl Future<Output = Result<u64, StoreError>> + Send;
}
