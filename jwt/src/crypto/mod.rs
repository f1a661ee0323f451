//! JWT cryptographic operations

pub mod hmac;

pub use self::hmac::{constant_time_eq, sign, verify};
