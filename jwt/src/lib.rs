//! Compact HMAC-signed JSON Web Tokens
//!
//! This crate issues and verifies tokens of the form
//! `b64u(header).b64u(payload).b64u(signature)` signed with HS256 or HS512:
//! - canonical JSON encoding, so equal maps always produce equal tokens
//! - explicit-algorithm and header-algorithm verification
//! - constant-time signature comparison
//! - typed payload access
//!
//! ```
//! use hsjwt::{Algorithm, Jwt, PayloadAccess};
//!
//! let token = Jwt::hs256(b"secret")
//!     .with_payload("sub", "alice")
//!     .serialize()?;
//! let verified = hsjwt::parse_and_verify(&token, b"secret", Some(Algorithm::HS256))?;
//! assert_eq!(verified.get_string("sub")?, "alice");
//! # Ok::<(), hsjwt::JwtError>(())
//! ```

#![forbid(unsafe_code)]

pub mod algorithms;
pub mod base64url;
pub mod crypto;
mod error;
pub mod token;
mod traits;
mod types;
mod validation;
mod verifier;

pub use algorithms::{Algorithm, resolve};
pub use error::*;
pub use token::{DecodedSegments, EncodedToken, TokenBuilder, VerifiedToken};
pub use traits::PayloadAccess;
pub use types::*;
pub use validation::{STRICT_MAX_TOKEN_LENGTH, VerifyOptions};
pub use verifier::{Verifier, parse_and_verify, parse_and_verify_bytes, verify_signature};

pub use serde_json::{Map, Value, json};

/// Start a new token for `algorithm` signed with `secret`
#[must_use]
pub fn create(algorithm: Algorithm, secret: impl Into<Secret>) -> TokenBuilder {
    TokenBuilder::new(algorithm, secret)
}

/// Main entry point
pub struct Jwt;

impl Jwt {
    /// Token builder for any registered algorithm
    #[must_use]
    pub fn create(algorithm: Algorithm, secret: impl Into<Secret>) -> TokenBuilder {
        create(algorithm, secret)
    }

    /// HS256 token builder
    #[must_use]
    pub fn hs256(secret: impl Into<Secret>) -> TokenBuilder {
        create(Algorithm::HS256, secret)
    }

    /// HS512 token builder
    #[must_use]
    pub fn hs512(secret: impl Into<Secret>) -> TokenBuilder {
        create(Algorithm::HS512, secret)
    }

    /// Verifier configured with `options`
    #[must_use]
    pub fn verifier(options: VerifyOptions) -> Verifier {
        Verifier::new(options)
    }
}
