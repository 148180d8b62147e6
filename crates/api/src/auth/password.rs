//! Admin password hashing.
//!
//! Stored credentials are Argon2id PHC strings, so parameters and salt
//! travel with the hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use kansai_core::error::CoreError;

/// Hash `plain` with a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String, CoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CoreError::Internal(format!("Password hashing failed: {e}")))
}

/// Reject anything that is not a PHC string, so a bad configured hash
/// fails at startup instead of on the first login.
pub fn check_phc(hash: &str) -> Result<(), CoreError> {
    PasswordHash::new(hash)
        .map(|_| ())
        .map_err(|e| CoreError::Validation(format!("Not a PHC password hash: {e}")))
}

/// `Ok(false)` on a wrong password; `Err` only if `hash` is unusable.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, CoreError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| CoreError::Internal(format!("Stored password hash is invalid: {e}")))?;

    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CoreError::Internal(format!(
            "Password verification failed: {e}"
        ))),
    }
}
