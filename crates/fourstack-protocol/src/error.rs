//! Error types for the protocol layer.
//!
//! Each crate in Fourstack defines its own error enum; a `ProtocolError`
//! always means a problem with the shapes crossing the host boundary,
//! never with the game rules. Rule violations have their own type in the
//! engine crate and their own wire shape ([`ErrorReply`](crate::ErrorReply)).

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed: malformed JSON, missing fields, or a
    /// truncated payload.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// A column index outside 0..=6.
    ///
    /// Inbound events are validated upstream, so hitting this means the
    /// caller layer broke its contract. It must propagate; it is never
    /// reported to a player as a 403 rule violation.
    #[error("column index {0} out of range (expected 0..=6)")]
    ColumnOutOfRange(u8),

    /// The payload parsed but violates the protocol contract in some
    /// other way.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
