//! Opaque session tokens.
//!
//! The plaintext only ever lives in the client's cookie. Sessions are
//! stored under its SHA-256 digest, so reading the table does not yield
//! usable cookies.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// A freshly minted token and the digest it is stored under.
#[derive(Debug)]
pub struct NewToken {
    pub plaintext: String,
    pub digest: String,
}

impl NewToken {
    /// 256 random bits from two v4 UUIDs, hex-encoded.
    pub fn generate() -> Self {
        let plaintext = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
        let digest = token_digest(&plaintext);
        Self { plaintext, digest }
    }
}

/// Lowercase hex SHA-256 of a cookie value.
pub fn token_digest(token: &str) -> String {
    hex_lower(&Sha256::digest(token.as_bytes()))
}

fn hex_lower(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
