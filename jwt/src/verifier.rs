//! Token verification in explicit-algorithm and header-algorithm modes

use crate::algorithms::{self, Algorithm};
use crate::crypto;
use crate::error::{JwtError, JwtResult};
use crate::token::{EncodedToken, VerifiedToken, codec};
use crate::validation::VerifyOptions;

/// Reusable token verifier
///
/// Check order is fixed. The length limit is applied first, then the token
/// is split and all three segments are decoded. With a pinned algorithm the
/// signature is checked before the header is interpreted, and the header's
/// `alg` must still name a registered algorithm. Otherwise the
/// header's `alg` selects the hash and must pass `typ`/`alg` validation
/// before any MAC is computed. The payload is parsed last, only after the
/// signature has matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verifier {
    options: VerifyOptions,
}

impl Verifier {
    /// Create a verifier with the given options
    #[must_use]
    pub fn new(options: VerifyOptions) -> Self {
        Self { options }
    }

    /// Verifier pinned to `algorithm`, or reading it from the header when `None`
    #[must_use]
    pub fn for_algorithm(algorithm: Option<Algorithm>) -> Self {
        match algorithm {
            Some(algorithm) => Self::new(VerifyOptions::explicit(algorithm)),
            None => Self::default(),
        }
    }

    /// Active options
    #[must_use]
    pub fn options(&self) -> &VerifyOptions {
        &self.options
    }

    /// Verify a token and return its decoded header and payload
    ///
    /// # Errors
    ///
    /// Any [`JwtError`] variant of the verification taxonomy; the token is
    /// only returned if the signature matched and both segments are JSON
    /// objects.
    pub fn verify(&self, token: impl AsRef<[u8]>, secret: &[u8]) -> JwtResult<VerifiedToken> {
        let result = self.verify_token(token.as_ref(), secret);
        match &result {
            Ok(verified) => {
                tracing::debug!(algorithm = %verified.algorithm(), "token accepted");
            }
            Err(e) => self.log_rejection(e),
        }
        result
    }

    /// Verify only the signature segment
    ///
    /// `typ` is not checked and the payload is not parsed. In header mode
    /// the header must still be a JSON object with a string `alg`.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`verify`](Self::verify), minus `WrongTokenType` and
    /// `InvalidPayloadJson`.
    pub fn verify_signature(&self, token: impl AsRef<[u8]>, secret: &[u8]) -> JwtResult<Algorithm> {
        let result = self.check_signature_only(token.as_ref(), secret);
        match &result {
            Ok(algorithm) => tracing::debug!(%algorithm, "signature accepted"),
            Err(e) => self.log_rejection(e),
        }
        result
    }

    fn verify_token(&self, token: &[u8], secret: &[u8]) -> JwtResult<VerifiedToken> {
        let encoded = self.split(token)?;
        let segments = encoded.decode()?;

        let (algorithm, header) = match self.options.algorithm {
            Some(algorithm) => {
                self.check_allowed(algorithm)?;
                check_signature(algorithm, secret, &encoded, &segments.signature)?;
                let header = codec::parse_header(&segments.header)?;
                // the declared `alg` must still be registered, even though it
                // does not pick the hash here
                algorithms::resolve(codec::validate_header(&header)?)?;
                (algorithm, header)
            }
            None => {
                let header = codec::parse_header(&segments.header)?;
                let algorithm = algorithms::resolve(codec::validate_header(&header)?)?;
                self.check_allowed(algorithm)?;
                check_signature(algorithm, secret, &encoded, &segments.signature)?;
                (algorithm, header)
            }
        };

        let payload = codec::parse_payload(&segments.payload)?;
        Ok(VerifiedToken::new(algorithm, header, payload))
    }

    fn check_signature_only(&self, token: &[u8], secret: &[u8]) -> JwtResult<Algorithm> {
        let encoded = self.split(token)?;
        let segments = encoded.decode()?;

        let algorithm = match self.options.algorithm {
            Some(algorithm) => algorithm,
            None => {
                let header = codec::parse_header(&segments.header)?;
                algorithms::resolve(codec::header_algorithm(&header)?)?
            }
        };
        self.check_allowed(algorithm)?;
        check_signature(algorithm, secret, &encoded, &segments.signature)?;
        Ok(algorithm)
    }

    fn split<'a>(&self, token: &'a [u8]) -> JwtResult<EncodedToken<'a>> {
        if let Some(max) = self.options.max_token_length {
            if token.len() > max {
                return Err(JwtError::TokenTooLarge {
                    size: token.len(),
                    max,
                });
            }
        }
        EncodedToken::split(token)
    }

    fn check_allowed(&self, algorithm: Algorithm) -> JwtResult<()> {
        if self.options.is_allowed(algorithm) {
            Ok(())
        } else {
            Err(JwtError::AlgorithmNotAllowed(algorithm.as_str()))
        }
    }

    fn log_rejection(&self, error: &JwtError) {
        match self.options.algorithm {
            Some(algorithm) => {
                tracing::debug!(%algorithm, error = error.kind(), "token rejected");
            }
            None => tracing::debug!(error = error.kind(), "token rejected"),
        }
    }
}

fn check_signature(
    algorithm: Algorithm,
    secret: &[u8],
    encoded: &EncodedToken<'_>,
    signature: &[u8],
) -> JwtResult<()> {
    if crypto::verify(algorithm, secret, encoded.signing_input(), signature)? {
        Ok(())
    } else {
        Err(JwtError::BadSignature)
    }
}

/// Verify a token string
///
/// With `Some(algorithm)` the hash is fixed by the caller; with `None` it is
/// taken from the header's `alg`.
///
/// # Errors
///
/// See [`Verifier::verify`].
pub fn parse_and_verify(
    token: &str,
    secret: &[u8],
    algorithm: Option<Algorithm>,
) -> JwtResult<VerifiedToken> {
    Verifier::for_algorithm(algorithm).verify(token, secret)
}

/// Verify a token given as raw bytes
///
/// # Errors
///
/// See [`Verifier::verify`]. Non-ASCII bytes inside a segment are a
/// [`JwtError::Decode`].
pub fn parse_and_verify_bytes(
    token: &[u8],
    secret: &[u8],
    algorithm: Option<Algorithm>,
) -> JwtResult<VerifiedToken> {
    Verifier::for_algorithm(algorithm).verify(token, secret)
}

/// Check only the signature of a token
///
/// # Errors
///
/// See [`Verifier::verify_signature`].
pub fn verify_signature(
    token: &str,
    secret: &[u8],
    algorithm: Option<Algorithm>,
) -> JwtResult<Algorithm> {
    Verifier::for_algorithm(algorithm).verify_signature(token, secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenBuilder;
    use crate::traits::PayloadAccess;

    const KEY: &[u8] = b"verifier-key";

    fn issue(algorithm: Algorithm) -> String {
        TokenBuilder::new(algorithm, KEY)
            .with_payload("sub", "alice")
            .serialize()
            .unwrap()
    }

    #[test]
    fn test_both_modes_accept() {
        for algorithm in Algorithm::ALL {
            let token = issue(algorithm);
            let explicit = parse_and_verify(&token, KEY, Some(algorithm)).unwrap();
            let header = parse_and_verify(&token, KEY, None).unwrap();
            assert_eq!(explicit, header);
            assert_eq!(header.algorithm(), algorithm);
            assert_eq!(header.get_string("sub").unwrap(), "alice");
        }
    }

    #[test]
    fn test_explicit_algorithm_mismatch_is_bad_signature() {
        let token = issue(Algorithm::HS256);
        assert_eq!(
            parse_and_verify(&token, KEY, Some(Algorithm::HS512)),
            Err(JwtError::BadSignature)
        );
    }

    #[test]
    fn test_length_limit_checked_first() {
        let verifier = Verifier::new(VerifyOptions::default().max_token_length(4));
        assert_eq!(
            verifier.verify("a.b", KEY),
            Err(JwtError::MalformedToken { segments: 2 })
        );
        assert_eq!(
            verifier.verify("a.b.c.d", KEY),
            Err(JwtError::TokenTooLarge { size: 7, max: 4 })
        );
    }

    #[test]
    fn test_allow_list() {
        let token = issue(Algorithm::HS512);
        let verifier = Verifier::new(VerifyOptions::default().allowed_algorithms([Algorithm::HS256]));
        assert_eq!(
            verifier.verify(&token, KEY),
            Err(JwtError::AlgorithmNotAllowed("HS512"))
        );
        assert_eq!(
            Verifier::new(VerifyOptions::strict(Algorithm::HS256)).verify(&token, KEY),
            Err(JwtError::BadSignature)
        );
    }

    #[test]
    fn test_verify_signature_skips_typ_and_payload() {
        let token = TokenBuilder::new(Algorithm::HS256, KEY)
            .with_header("typ", "at+jwt")
            .serialize()
            .unwrap();
        assert_eq!(
            parse_and_verify(&token, KEY, None),
            Err(JwtError::WrongTokenType)
        );
        assert_eq!(verify_signature(&token, KEY, None), Ok(Algorithm::HS256));
        assert_eq!(
            verify_signature(&token, b"other", None),
            Err(JwtError::BadSignature)
        );
    }
}
