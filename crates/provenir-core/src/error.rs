//! # Error Types — Decode and Encode Failures
//!
//! The typed failure taxonomy for the annotation wire codec. All errors are
//! synchronous and returned at the point of failure; this layer performs no
//! recovery and never returns a partially decoded record.

use thiserror::Error;

/// Failure while encoding or decoding an annotation document.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Unrecognized annotation-kind wire code.
    #[error("unknown annotation kind code: {0:?}")]
    InvalidKind(String),

    /// Unrecognized hash-algorithm wire code.
    #[error("invalid hash tag: {0}")]
    InvalidHashTag(#[from] provenir_hash::InvalidHashTag),

    /// Malformed annotation identifier (not a valid 26-character sortable id).
    #[error("invalid annotation identifier: {0}")]
    InvalidIdentifier(String),

    /// Timestamp text is not valid offset-bearing RFC 3339.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A required key is absent from the JSON object.
    #[error("missing required field: {0:?}")]
    MissingField(&'static str),

    /// A key is present but holds the wrong JSON type.
    #[error("field {field:?} is not a JSON {expected}")]
    UnexpectedType {
        /// The offending key.
        field: &'static str,
        /// The JSON type the codec requires there.
        expected: &'static str,
    },

    /// Input is not valid JSON at all.
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// JSON emission failed.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}
