//! Error types for valuewire.

use thiserror::Error;

/// Main error type for all codec operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value being encoded contains itself (ancestor-descendant cycle).
    #[error("Argument is a circular structure")]
    CircularStructure,

    /// The injected classifier failed; propagated unchanged to the caller.
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// A `{h: index}` tag referenced past the end of the handle table.
    #[error("Handle index {index} out of range (table has {len} entries)")]
    HandleOutOfRange {
        /// Index carried by the wire value.
        index: usize,
        /// Number of entries in the handle table.
        len: usize,
    },

    /// A `{d: ...}` tag carried a string that is not a valid ISO-8601 instant.
    #[error("Invalid date string: {0}")]
    InvalidDate(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// MsgPack serialization error.
    #[error("MsgPack encode error: {0}")]
    MsgPackEncode(#[from] rmp_serde::encode::Error),

    /// MsgPack deserialization error.
    #[error("MsgPack decode error: {0}")]
    MsgPackDecode(#[from] rmp_serde::decode::Error),
}

/// Result type alias using CodecError.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error raised by a property getter during encoding.
///
/// The encoder swallows this error and omits the property from the output
/// record; it never reaches the encode caller.
#[derive(Debug, Clone, Error)]
#[error("Property read failed: {0}")]
pub struct PropertyError(pub String);
