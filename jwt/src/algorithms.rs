//! JWT algorithm registry
//!
//! The set of accepted `alg` identifiers is fixed at compile time. Each
//! identifier maps to exactly one HMAC hash primitive; adding an algorithm
//! means adding a variant and a [`REGISTRY`] entry.

use crate::error::{JwtError, JwtResult};
use std::fmt;
use std::str::FromStr;

/// Symmetric signing algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum Algorithm {
    /// HMAC using SHA-256
    HS256,
    /// HMAC using SHA-512
    HS512,
}

/// Identifier table, read-only for the life of the process
pub static REGISTRY: [(&str, Algorithm); 2] =
    [("HS256", Algorithm::HS256), ("HS512", Algorithm::HS512)];

/// Resolve an `alg` identifier to its algorithm
///
/// Matching is exact and case-sensitive.
///
/// # Errors
///
/// Returns [`JwtError::UnknownAlgorithm`] if the identifier is not registered.
pub fn resolve(identifier: &str) -> JwtResult<Algorithm> {
    REGISTRY
        .iter()
        .find(|(name, _)| *name == identifier)
        .map(|(_, algorithm)| *algorithm)
        .ok_or_else(|| JwtError::UnknownAlgorithm(identifier.to_string()))
}

impl Algorithm {
    /// Every registered algorithm, narrowest digest first
    pub const ALL: [Algorithm; 2] = [Algorithm::HS256, Algorithm::HS512];

    /// Header `alg` value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS512 => "HS512",
        }
    }

    /// Signature length in bytes
    #[must_use]
    pub const fn digest_len(&self) -> usize {
        match self {
            Algorithm::HS256 => 32,
            Algorithm::HS512 => 64,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}
