//! Repository for the `admin_sessions` table.

use sqlx::PgPool;

use crate::models::session::{AdminSession, CreateSession};

/// Provides persistence for admin sessions keyed by token hash.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<AdminSession, sqlx::Error> {
        sqlx::query_as::<_, AdminSession>(
            "INSERT INTO admin_sessions (token_hash, username, expires_at)
             VALUES ($1, $2, $3)
             RETURNING username, expires_at, created_at",
        )
        .bind(&input.token_hash)
        .bind(&input.username)
        .bind(input.expires_at)
        .fetch_one(pool)
        .await
    }

    /// Find a session by its token hash.
    ///
    /// Only returns sessions that have not expired.
    pub async fn find_active(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<AdminSession>, sqlx::Error> {
        sqlx::query_as::<_, AdminSession>(
            "SELECT username, expires_at, created_at FROM admin_sessions
             WHERE token_hash = $1
               AND expires_at > NOW()",
        )
        .bind(token_hash)
        .fetch_optional(pool)
        .await
    }

    /// Delete a single session. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, token_hash: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete expired sessions. Returns the count of deleted rows.
    pub async fn cleanup_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= NOW()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
