//! Admin session model and DTOs.

use kansai_core::types::Timestamp;
use sqlx::FromRow;

/// A live row from the `admin_sessions` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct AdminSession {
    pub username: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

impl AdminSession {
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }
}

/// DTO for creating a new admin session.
#[derive(Debug, Clone)]
pub struct CreateSession {
    /// SHA-256 hex digest of the opaque cookie token.
    pub token_hash: String,
    pub username: String,
    pub expires_at: Timestamp,
}
