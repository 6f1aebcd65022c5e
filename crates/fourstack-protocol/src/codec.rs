//! Codec trait and implementations for host-boundary serialization.
//!
//! The engine and store never commit to a serialization format; anything
//! that crosses the host boundary goes through a [`Codec`]. [`JsonCodec`]
//! is what the reference host speaks. A binary codec can be added without
//! touching any other crate.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Converts values to and from bytes.
///
/// `Send + Sync + 'static` because codecs are shared across async tasks
/// at the service layer.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Encode`] if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Decode`] if the bytes are malformed or do
    /// not match the expected shape.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] backed by `serde_json`.
///
/// Behind the default `json` feature. JSON is the format the host's wire
/// contract is specified in, so the shape tests throughout this crate pin
/// JSON field names directly.
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}
