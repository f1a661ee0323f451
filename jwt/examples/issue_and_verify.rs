//! Issue an HS256 token, print it, then verify it and read the claim back
//!
//! Run with `RUST_LOG=hsjwt=trace` to see the library's events.

use hsjwt::{Algorithm, Jwt, JwtResult, PayloadAccess, parse_and_verify};
use tracing_subscriber::EnvFilter;

const SECRET: [u8; 4] = [1, 2, 3, 4];

fn main() -> JwtResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let token = Jwt::hs256(SECRET).with_payload("test", 123.45).serialize()?;
    println!("{token}");

    let verified = parse_and_verify(&token, &SECRET, Some(Algorithm::HS256))?;
    println!("test = {}", verified.get_number("test")?);
    Ok(())
}
