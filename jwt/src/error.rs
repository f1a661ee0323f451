//! JWT error types

use std::fmt;
use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// One of the three dot-separated parts of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// First segment, the encoded header object
    Header,
    /// Second segment, the encoded payload object
    Payload,
    /// Third segment, the encoded signature bytes
    Signature,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Header => f.write_str("header"),
            Segment::Payload => f.write_str("payload"),
            Segment::Signature => f.write_str("signature"),
        }
    }
}

/// JWT error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Token does not consist of exactly three dot-separated segments
    #[error("Malformed token: expected 3 dot-separated segments, found {segments}")]
    MalformedToken {
        /// Number of segments found
        segments: usize,
    },

    /// A segment is not valid unpadded base64url
    #[error("Invalid base64url in {segment} segment: {source}")]
    Decode {
        /// Which segment failed to decode
        segment: Segment,
        /// Underlying decoder error
        #[source]
        source: base64::DecodeError,
    },

    /// Header segment is not a JSON object
    #[error("Invalid header JSON: {0}")]
    InvalidHeaderJson(String),

    /// Payload segment is not a JSON object
    #[error("Invalid payload JSON: {0}")]
    InvalidPayloadJson(String),

    /// Header `typ` is missing or not `"JWT"`
    #[error("Wrong token type: header `typ` must be \"JWT\"")]
    WrongTokenType,

    /// Header `alg` is missing or not a string
    #[error("Missing or invalid `alg` header")]
    MissingOrInvalidAlgorithm,

    /// Algorithm identifier is not in the registry
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Algorithm resolved but is not accepted by the verifier configuration
    #[error("Algorithm {0} is not allowed by the verifier")]
    AlgorithmNotAllowed(&'static str),

    /// Token is longer than the configured limit
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge {
        /// Actual token length in bytes
        size: usize,
        /// Configured maximum
        max: usize,
    },

    /// Recomputed signature does not match the token's signature
    #[error("Bad signature")]
    BadSignature,

    /// Requested key is absent from the payload
    #[error("Key not found in payload: {0}")]
    KeyNotFound(String),

    /// Payload value has a different type than requested
    #[error("Wrong type for `{key}`: expected {expected}")]
    WrongType {
        /// Payload key that was read
        key: String,
        /// Requested kind of value
        expected: &'static str,
    },

    /// Header or payload could not be encoded as JSON
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The MAC rejected the key material
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl JwtError {
    /// Create a decode error for the given segment
    #[inline]
    #[must_use]
    pub fn decode(segment: Segment, source: base64::DecodeError) -> Self {
        JwtError::Decode { segment, source }
    }

    /// Create a key not found error
    #[inline]
    #[must_use]
    pub fn key_not_found(key: &str) -> Self {
        JwtError::KeyNotFound(key.to_string())
    }

    /// Create a wrong type error
    #[inline]
    #[must_use]
    pub fn wrong_type(key: &str, expected: &'static str) -> Self {
        JwtError::WrongType {
            key: key.to_string(),
            expected,
        }
    }

    /// Create an encoding error
    #[inline]
    #[must_use]
    pub fn encoding(msg: impl fmt::Display) -> Self {
        JwtError::Encoding(msg.to_string())
    }

    /// Short, stable name of the variant, used as a log field
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            JwtError::MalformedToken { .. } => "malformed_token",
            JwtError::Decode { .. } => "decode",
            JwtError::InvalidHeaderJson(_) => "invalid_header_json",
            JwtError::InvalidPayloadJson(_) => "invalid_payload_json",
            JwtError::WrongTokenType => "wrong_token_type",
            JwtError::MissingOrInvalidAlgorithm => "missing_or_invalid_algorithm",
            JwtError::UnknownAlgorithm(_) => "unknown_algorithm",
            JwtError::AlgorithmNotAllowed(_) => "algorithm_not_allowed",
            JwtError::TokenTooLarge { .. } => "token_too_large",
            JwtError::BadSignature => "bad_signature",
            JwtError::KeyNotFound(_) => "key_not_found",
            JwtError::WrongType { .. } => "wrong_type",
            JwtError::Encoding(_) => "encoding",
            JwtError::InvalidKey(_) => "invalid_key",
        }
    }
}
