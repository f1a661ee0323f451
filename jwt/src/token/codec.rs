//! Token wire format: `b64u(header).b64u(payload).b64u(signature)`

use super::json;
use crate::algorithms::Algorithm;
use crate::base64url;
use crate::crypto;
use crate::error::{JwtError, JwtResult, Segment};
use crate::types::{ALG_KEY, Header, Payload, TYP_KEY, TYP_VALUE};
use serde_json::Value;

const SEPARATOR: u8 = b'.';

/// A token split into its three still-encoded segments
///
/// Borrowing the input keeps the exact bytes the signature was computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedToken<'a> {
    raw: &'a [u8],
    header: &'a [u8],
    payload: &'a [u8],
    signature: &'a [u8],
}

impl<'a> EncodedToken<'a> {
    /// Split a token on `.` into exactly three segments
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::MalformedToken`] for any other segment count.
    pub fn split(token: &'a [u8]) -> JwtResult<Self> {
        let segments = token.split(|b| *b == SEPARATOR).count();
        if segments != 3 {
            return Err(JwtError::MalformedToken { segments });
        }

        let mut parts = token.splitn(3, |b| *b == SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(payload), Some(signature)) => Ok(Self {
                raw: token,
                header,
                payload,
                signature,
            }),
            _ => Err(JwtError::MalformedToken { segments }),
        }
    }

    /// Encoded header segment
    #[must_use]
    pub fn header(&self) -> &'a [u8] {
        self.header
    }

    /// Encoded payload segment
    #[must_use]
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Encoded signature segment
    #[must_use]
    pub fn signature(&self) -> &'a [u8] {
        self.signature
    }

    /// The `header.payload` bytes covered by the signature
    #[must_use]
    pub fn signing_input(&self) -> &'a [u8] {
        &self.raw[..self.header.len() + 1 + self.payload.len()]
    }

    /// Decode the header segment
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::Decode`] for invalid base64url.
    pub fn decode_header(&self) -> JwtResult<Vec<u8>> {
        decode_segment(self.header, Segment::Header)
    }

    /// Decode the payload segment
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::Decode`] for invalid base64url.
    pub fn decode_payload(&self) -> JwtResult<Vec<u8>> {
        decode_segment(self.payload, Segment::Payload)
    }

    /// Decode the signature segment
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::Decode`] for invalid base64url.
    pub fn decode_signature(&self) -> JwtResult<Vec<u8>> {
        decode_segment(self.signature, Segment::Signature)
    }

    /// Decode all three segments, header first
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::Decode`] naming the first segment that fails.
    pub fn decode(&self) -> JwtResult<DecodedSegments> {
        Ok(DecodedSegments {
            header: self.decode_header()?,
            payload: self.decode_payload()?,
            signature: self.decode_signature()?,
        })
    }
}

/// Raw bytes of the three decoded segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSegments {
    /// Header JSON bytes
    pub header: Vec<u8>,
    /// Payload JSON bytes
    pub payload: Vec<u8>,
    /// Signature bytes
    pub signature: Vec<u8>,
}

fn decode_segment(segment: &[u8], which: Segment) -> JwtResult<Vec<u8>> {
    base64url::decode(segment).map_err(|e| JwtError::decode(which, e))
}

/// Encode header and payload as `b64u(header).b64u(payload)`
///
/// # Errors
///
/// Returns [`JwtError::Encoding`] if either object fails to encode.
pub fn encode_signing_input(header: &Header, payload: &Payload) -> JwtResult<String> {
    let header_json = json::to_vec(header)?;
    let payload_json = json::to_vec(payload)?;

    let mut out = base64url::encode(header_json);
    out.push(char::from(SEPARATOR));
    out.push_str(&base64url::encode(payload_json));
    Ok(out)
}

/// Produce the complete signed token
///
/// # Errors
///
/// Returns [`JwtError::Encoding`] if either object fails to encode; nothing
/// is signed in that case. Returns [`JwtError::InvalidKey`] if the MAC
/// rejects the secret.
pub fn serialize(
    algorithm: Algorithm,
    secret: &[u8],
    header: &Header,
    payload: &Payload,
) -> JwtResult<String> {
    let mut token = encode_signing_input(header, payload)?;
    let signature = crypto::sign(algorithm, secret, token.as_bytes())?;
    token.push(char::from(SEPARATOR));
    token.push_str(&base64url::encode(signature));
    Ok(token)
}

/// Parse decoded header bytes into an object
///
/// # Errors
///
/// Returns [`JwtError::InvalidHeaderJson`] unless the bytes are a JSON object.
pub fn parse_header(bytes: &[u8]) -> JwtResult<Header> {
    json::parse_object(bytes).map_err(|e| JwtError::InvalidHeaderJson(e.to_string()))
}

/// Parse decoded payload bytes into an object
///
/// # Errors
///
/// Returns [`JwtError::InvalidPayloadJson`] unless the bytes are a JSON object.
pub fn parse_payload(bytes: &[u8]) -> JwtResult<Payload> {
    json::parse_object(bytes).map_err(|e| JwtError::InvalidPayloadJson(e.to_string()))
}

/// Check `typ` and return the `alg` identifier
///
/// # Errors
///
/// Returns [`JwtError::WrongTokenType`] unless `typ` is `"JWT"`, then
/// [`JwtError::MissingOrInvalidAlgorithm`] unless `alg` is a string.
pub fn validate_header(header: &Header) -> JwtResult<&str> {
    match header.get(TYP_KEY) {
        Some(Value::String(typ)) if typ == TYP_VALUE => {}
        _ => return Err(JwtError::WrongTokenType),
    }
    header_algorithm(header)
}

/// Read the `alg` identifier without checking `typ`
///
/// # Errors
///
/// Returns [`JwtError::MissingOrInvalidAlgorithm`] unless `alg` is a string.
pub fn header_algorithm(header: &Header) -> JwtResult<&str> {
    match header.get(ALG_KEY) {
        Some(Value::String(alg)) => Ok(alg),
        _ => Err(JwtError::MissingOrInvalidAlgorithm),
    }
}
