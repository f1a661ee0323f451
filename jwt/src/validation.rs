//! Verification options and configuration.

use crate::algorithms::Algorithm;

/// Length limit applied by [`VerifyOptions::strict`]
pub const STRICT_MAX_TOKEN_LENGTH: usize = 8 * 1024;

/// Verification options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Pinned algorithm; `None` reads it from the header.
    pub algorithm: Option<Algorithm>,
    /// Algorithms accepted after resolution.
    pub allowed_algorithms: Vec<Algorithm>,
    /// Maximum token length in bytes.
    pub max_token_length: Option<usize>,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            algorithm: None,
            allowed_algorithms: Algorithm::ALL.to_vec(),
            max_token_length: None,
        }
    }
}

impl VerifyOptions {
    /// Verify with a caller-chosen algorithm, ignoring the header's `alg`
    /// when picking the hash.
    #[must_use]
    pub fn explicit(algorithm: Algorithm) -> Self {
        Self::default().with_algorithm(algorithm)
    }

    /// Explicit algorithm, allow only that algorithm, and cap the token
    /// length at [`STRICT_MAX_TOKEN_LENGTH`].
    #[must_use]
    pub fn strict(algorithm: Algorithm) -> Self {
        Self {
            algorithm: Some(algorithm),
            allowed_algorithms: vec![algorithm],
            max_token_length: Some(STRICT_MAX_TOKEN_LENGTH),
        }
    }

    /// Pin the algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Read the algorithm from the token header.
    #[must_use]
    pub fn header_algorithm(mut self) -> Self {
        self.algorithm = None;
        self
    }

    /// Set allowed algorithms.
    #[must_use]
    pub fn allowed_algorithms(mut self, algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        self.allowed_algorithms = algorithms.into_iter().collect();
        self
    }

    /// Set the maximum token length in bytes.
    #[must_use]
    pub fn max_token_length(mut self, max: usize) -> Self {
        self.max_token_length = Some(max);
        self
    }

    /// Remove the token length limit.
    #[must_use]
    pub fn unlimited_length(mut self) -> Self {
        self.max_token_length = None;
        self
    }

    /// Whether `algorithm` passes the allow-list.
    #[must_use]
    pub fn is_allowed(&self, algorithm: Algorithm) -> bool {
        self.allowed_algorithms.contains(&algorithm)
    }
}
