//! Unified error type for the Fourstack meta-crate.

use fourstack_engine::{RuleError, SnapshotError};
use fourstack_protocol::{ErrorReply, ProtocolError};
use fourstack_store::StoreError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so `?` converts sub-crate errors automatically. Only the `Rule` variant
/// is user-facing; everything else is a contract or infrastructure failure
/// that must reach the host unchanged.
#[derive(Debug, thiserror::Error)]
pub enum FourstackError {
    /// A protocol-level error (malformed request or payload).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A game-rule violation (not your turn, column full).
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// A snapshot that broke the upstream data contract.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// A store-level failure (missing game, version conflict).
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl FourstackError {
    /// The `{code: 403, data}` reply for rule violations.
    ///
    /// Returns `None` for every other kind: contract violations and store
    /// failures propagate as errors, never as player-facing replies.
    pub fn reply(&self) -> Option<ErrorReply> {
        match self {
            Self::Rule(rule) => Some(rule.reply()),
            _ => None,
        }
    }
}
