//! # Fourstack
//!
//! Server-authoritative Connect Four rules engine.
//!
//! One move event in, one outcome event out: the [`MoveService`] fetches
//! the authoritative snapshot from a [`GameStore`](fourstack_store::GameStore),
//! runs the rules engine, and commits the resulting delta atomically.
//! Transport, lobbies, and real storage backends belong to the embedding
//! host; the service is the piece that must run where clients cannot
//! tamper with it.
//!
//! ## Quick start
//!
//! ```rust
//! use fourstack::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), FourstackError> {
//! let service = MoveService::new(MemoryStore::new());
//!
//! let game_id = service
//!     .create_game(vec![
//!         PlayerSeat::new(PlayerId(1), "red", PlayerStatus::HasTurn),
//!         PlayerSeat::new(PlayerId(2), "yellow", PlayerStatus::WaitingTurn),
//!     ])
//!     .await?;
//!
//! let outcome = service
//!     .handle_move(game_id, PlayerId(1), MoveRequest { row: 3 })
//!     .await?;
//! assert_eq!(outcome, MoveOutcome::turn_passed(ColumnIndex::new(3).unwrap()));
//! # Ok(())
//! # }
//! ```

mod error;
mod service;

pub use error::FourstackError;
pub use service::MoveService;

/// Everything an embedding host typically needs.
pub mod prelude {
    pub use fourstack_engine::{Game, RuleError, SnapshotError, is_winning_board};
    pub use fourstack_protocol::{
        BoardColumns, ColumnIndex, ErrorReply, GameId, GameSnapshot,
        GameStatus, MoveOutcome, MoveRequest, PlayerId, PlayerSeat,
        PlayerStatus, ProtocolError,
    };
    pub use fourstack_store::{
        GameRecord, GameStore, MemoryStore, StoreError, VersionedGame,
    };

    pub use crate::{FourstackError, MoveService};
}
