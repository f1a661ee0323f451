//! Base64 URL-safe encoding without padding (RFC 7515)
//!
//! Thin wrapper over the `base64` crate's `URL_SAFE_NO_PAD` engine. The engine
//! rejects padding, characters outside the URL-safe alphabet, impossible
//! lengths and non-zero trailing bits, so every accepted string decodes to
//! exactly one byte sequence.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

pub use base64::DecodeError;

/// Encode bytes as unpadded base64url text
#[inline]
#[must_use]
pub fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode unpadded base64url text
///
/// # Errors
///
/// Returns [`DecodeError`] when the input is not canonical unpadded base64url.
#[inline]
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}
