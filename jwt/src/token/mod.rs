//! Token construction, wire format and verified views

mod builder;
pub mod codec;
pub mod json;
mod verified;

pub use builder::TokenBuilder;
pub use codec::{DecodedSegments, EncodedToken};
pub use verified::VerifiedToken;
