//! Token builder: header, payload and secret for issuance

use super::{codec, json};
use crate::algorithms::Algorithm;
use crate::error::JwtResult;
use crate::traits::PayloadAccess;
use crate::types::{ALG_KEY, Header, Payload, Secret, TYP_KEY, TYP_VALUE};
use serde::Serialize;
use serde_json::Value;

/// Mutable token under construction
///
/// The header starts as `{"alg": <algorithm>, "typ": "JWT"}` and the payload
/// starts empty. Setters overwrite existing keys. The signature is always
/// computed with the builder's algorithm, even if `alg` is overwritten.
#[derive(Debug, Clone)]
pub struct TokenBuilder {
    algorithm: Algorithm,
    secret: Secret,
    header: Header,
    payload: Payload,
}

impl TokenBuilder {
    /// Start a token signed with `algorithm` and `secret`
    #[must_use]
    pub fn new(algorithm: Algorithm, secret: impl Into<Secret>) -> Self {
        let mut header = Header::new();
        header.insert(TYP_KEY.to_string(), Value::from(TYP_VALUE));
        header.insert(ALG_KEY.to_string(), Value::from(algorithm.as_str()));
        Self::from_parts(algorithm, secret.into(), header, Payload::new())
    }

    pub(crate) fn from_parts(
        algorithm: Algorithm,
        secret: Secret,
        header: Header,
        payload: Payload,
    ) -> Self {
        Self {
            algorithm,
            secret,
            header,
            payload,
        }
    }

    /// Signing algorithm
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Current header object
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Set a header value
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.header.insert(key.into(), value.into());
        self
    }

    /// Set a payload value
    pub fn set_payload(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Set a header value from any serializable type
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::Encoding`](crate::JwtError::Encoding) if the value
    /// has no JSON representation; the header is left unchanged.
    pub fn try_set_header<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> JwtResult<&mut Self> {
        let value = json::to_value(value)?;
        Ok(self.set_header(key, value))
    }

    /// Set a payload value from any serializable type
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::Encoding`](crate::JwtError::Encoding) if the value
    /// has no JSON representation; the payload is left unchanged.
    pub fn try_set_payload<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> JwtResult<&mut Self> {
        let value = json::to_value(value)?;
        Ok(self.set_payload(key, value))
    }

    /// Chainable form of [`set_header`](Self::set_header)
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_header(key, value);
        self
    }

    /// Chainable form of [`set_payload`](Self::set_payload)
    #[must_use]
    pub fn with_payload(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_payload(key, value);
        self
    }

    /// Merge the fields of a serializable struct or map into the payload
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::Encoding`](crate::JwtError::Encoding) if `claims`
    /// does not serialize to a JSON object.
    pub fn with_claims<T: Serialize + ?Sized>(mut self, claims: &T) -> JwtResult<Self> {
        let claims = json::to_object(claims)?;
        self.payload.extend(claims);
        Ok(self)
    }

    /// Encode and sign the token
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::Encoding`](crate::JwtError::Encoding) if the header
    /// or payload cannot be encoded. No partial token is produced.
    pub fn serialize(&self) -> JwtResult<String> {
        let token = codec::serialize(
            self.algorithm,
            self.secret.expose(),
            &self.header,
            &self.payload,
        )?;
        tracing::trace!(algorithm = %self.algorithm, length = token.len(), "token serialized");
        Ok(token)
    }

    /// Encode and sign the token as bytes
    ///
    /// # Errors
    ///
    /// Same as [`serialize`](Self::serialize).
    pub fn to_bytes(&self) -> JwtResult<Vec<u8>> {
        self.serialize().map(String::into_bytes)
    }
}

impl PayloadAccess for TokenBuilder {
    fn payload(&self) -> &Payload {
        &self.payload
    }
}
