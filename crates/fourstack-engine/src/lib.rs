//! The Fourstack rules engine.
//!
//! This crate is the authoritative core: given a game snapshot and one move
//! event, it decides legality, applies the move, detects a win, and
//! produces the outcome. It is pure and synchronous; persistence and
//! distribution belong to the layers above.
//!
//! # Key types
//!
//! - [`Board`] — seven bottom-to-top column stacks, max height six
//! - [`Game`] — the aggregate evaluated per move: seats, status, board,
//!   and the acting player's identity
//! - [`Game::play`] — the move state machine (validate, place, evaluate,
//!   rotate or finish)
//! - [`is_winning_board`] — the four-direction alignment check
//! - [`RuleError`] / [`SnapshotError`] — rule violations vs. upstream
//!   contract violations
//!
//! # Boundary
//!
//! The engine is handed a read-only [`GameSnapshot`](fourstack_protocol::GameSnapshot)
//! and returns the mutation to apply. It must run somewhere clients cannot
//! tamper with it: these checks ARE the anti-cheat layer.

mod board;
mod error;
mod game;
mod moves;
mod win;

pub use board::{Board, COLUMNS, ROWS};
pub use error::{RuleError, SnapshotError};
pub use game::Game;
pub use win::is_winning_board;
