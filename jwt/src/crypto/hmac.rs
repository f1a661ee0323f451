//! HMAC-SHA signing and fixed-time signature comparison

use crate::algorithms::Algorithm;
use crate::error::{JwtError, JwtResult};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

/// Compute the HMAC of `message` keyed with `secret`
///
/// The output length is [`Algorithm::digest_len`]. Keys of any length are
/// accepted, including the empty key.
///
/// # Errors
///
/// Returns [`JwtError::InvalidKey`] if the MAC rejects the key.
pub fn sign(algorithm: Algorithm, secret: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    match algorithm {
        Algorithm::HS256 => mac::<HmacSha256>(secret, message),
        Algorithm::HS512 => mac::<HmacSha512>(secret, message),
    }
}

/// Recompute the HMAC of `message` and compare it against `signature`
///
/// The comparison runs over the full digest regardless of where the first
/// differing byte is. A length mismatch is rejected without comparing bytes.
///
/// # Errors
///
/// Same as [`sign`].
pub fn verify(
    algorithm: Algorithm,
    secret: &[u8],
    message: &[u8],
    signature: &[u8],
) -> JwtResult<bool> {
    let expected = sign(algorithm, secret, message)?;
    Ok(constant_time_eq(&expected, signature))
}

/// Constant-time byte equality
#[inline]
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

fn mac<M: Mac + KeyInit>(secret: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = <M as KeyInit>::new_from_slice(secret)
        .map_err(|_| JwtError::InvalidKey("Invalid HMAC key".to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
