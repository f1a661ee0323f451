//! Verified token: read-only view of a parsed header and payload

use super::{TokenBuilder, json};
use crate::algorithms::Algorithm;
use crate::error::{JwtError, JwtResult};
use crate::traits::PayloadAccess;
use crate::types::{Header, Payload, Secret};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A token whose signature has been checked
///
/// Only produced by the verifier; the header and payload are exactly what
/// the signed segments decoded to.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedToken {
    algorithm: Algorithm,
    header: Header,
    payload: Payload,
}

impl VerifiedToken {
    pub(crate) fn new(algorithm: Algorithm, header: Header, payload: Payload) -> Self {
        Self {
            algorithm,
            header,
            payload,
        }
    }

    /// Algorithm the signature was verified with
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Decoded header object, including any extra keys
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Raw header value for `key`
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::KeyNotFound`] if the header has no such key.
    pub fn header_value(&self, key: &str) -> JwtResult<&Value> {
        self.header.get(key).ok_or_else(|| JwtError::key_not_found(key))
    }

    /// Deserialize the whole payload into a caller type
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::InvalidPayloadJson`] if the payload does not match `T`.
    pub fn deserialize_payload<T: DeserializeOwned>(&self) -> JwtResult<T> {
        json::from_object(&self.payload).map_err(|e| JwtError::InvalidPayloadJson(e.to_string()))
    }

    /// Split into algorithm, header and payload
    #[must_use]
    pub fn into_parts(self) -> (Algorithm, Header, Payload) {
        (self.algorithm, self.header, self.payload)
    }

    /// Reopen the token for editing and re-signing under `secret`
    ///
    /// The header is kept as received, extra keys included.
    #[must_use]
    pub fn into_builder(self, secret: impl Into<Secret>) -> TokenBuilder {
        TokenBuilder::from_parts(self.algorithm, secret.into(), self.header, self.payload)
    }
}

impl PayloadAccess for VerifiedToken {
    fn payload(&self) -> &Payload {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    fn sample() -> VerifiedToken {
        let Value::Object(header) = json!({"alg": "HS256", "typ": "JWT", "kid": "k1"}) else {
            unreachable!()
        };
        let Value::Object(payload) = json!({"sub": "alice", "n": 3}) else {
            unreachable!()
        };
        VerifiedToken::new(Algorithm::HS256, header, payload)
    }

    #[test]
    fn test_header_value() {
        let token = sample();
        assert_eq!(token.header_value("kid").unwrap(), &json!("k1"));
        assert_eq!(
            token.header_value("x5u"),
            Err(JwtError::KeyNotFound("x5u".to_string()))
        );
    }

    #[test]
    fn test_deserialize_payload() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Claims {
            sub: String,
            n: u32,
        }

        let token = sample();
        assert_eq!(
            token.deserialize_payload::<Claims>().unwrap(),
            Claims {
                sub: "alice".to_string(),
                n: 3
            }
        );

        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Other {
            missing: bool,
        }
        assert!(matches!(
            token.deserialize_payload::<Other>(),
            Err(JwtError::InvalidPayloadJson(_))
        ));
    }

    #[test]
    fn test_into_builder_keeps_header() {
        let builder = sample().into_builder(b"new-key");
        assert_eq!(builder.algorithm(), Algorithm::HS256);
        assert_eq!(builder.header().get("kid"), Some(&json!("k1")));
        assert_eq!(builder.get_string("sub").unwrap(), "alice");
    }
}
