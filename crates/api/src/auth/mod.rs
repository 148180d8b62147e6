//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`token`] -- opaque session tokens and their stored hashes.
//! - [`credentials`] -- the administrator credential rows.

pub mod credentials;
pub mod password;
pub mod token;
