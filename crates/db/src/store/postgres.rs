//! Postgres-backed stores, delegating to the repositories.

use async_trait::async_trait;
use kansai_core::error::CoreError;
use kansai_core::types::DbId;
use kansai_core::validation::WordFields;

use super::{duplicate_word, SessionStore, WordStore, WORD_ENTITY};
use crate::models::session::{AdminSession, CreateSession};
use crate::models::word::WordEntry;
use crate::repositories::{SessionRepo, WordRepo};
use crate::DbPool;

/// PostgreSQL unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Dictionary entries in the `words` table.
#[derive(Clone)]
pub struct PgWordStore {
    pool: DbPool,
}

impl PgWordStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WordStore for PgWordStore {
    async fn insert(&self, fields: &WordFields) -> Result<WordEntry, CoreError> {
        WordRepo::create(&self.pool, fields)
            .await
            .map_err(|e| classify(e, fields.word()))
    }

    async fn list_all(&self) -> Result<Vec<WordEntry>, CoreError> {
        WordRepo::list_all(&self.pool).await.map_err(internal)
    }

    async fn find_by_word(&self, word: &str) -> Result<WordEntry, CoreError> {
        WordRepo::find_by_word(&self.pool, word)
            .await
            .map_err(internal)?
            .ok_or_else(|| CoreError::not_found(WORD_ENTITY, word))
    }

    async fn update(&self, id: DbId, fields: &WordFields) -> Result<WordEntry, CoreError> {
        WordRepo::update(&self.pool, id, fields)
            .await
            .map_err(|e| classify(e, fields.word()))?
            .ok_or_else(|| CoreError::not_found(WORD_ENTITY, id))
    }

    async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        if WordRepo::delete(&self.pool, id).await.map_err(internal)? {
            Ok(())
        } else {
            Err(CoreError::not_found(WORD_ENTITY, id))
        }
    }

    async fn count(&self) -> Result<u64, CoreError> {
        let count = WordRepo::count(&self.pool).await.map_err(internal)?;
        Ok(count.max(0) as u64)
    }
}

/// Admin sessions in the `admin_sessions` table.
#[derive(Clone)]
pub struct PgSessionStore {
    pool: DbPool,
}

impl PgSessionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn create(&self, input: CreateSession) -> Result<AdminSession, CoreError> {
        SessionRepo::create(&self.pool, &input).await.map_err(internal)
    }

    async fn find(&self, token_hash: &str) -> Result<Option<AdminSession>, CoreError> {
        SessionRepo::find_active(&self.pool, token_hash)
            .await
            .map_err(internal)
    }

    async fn destroy(&self, token_hash: &str) -> Result<bool, CoreError> {
        SessionRepo::delete(&self.pool, token_hash)
            .await
            .map_err(internal)
    }

    async fn purge_expired(&self) -> Result<u64, CoreError> {
        SessionRepo::cleanup_expired(&self.pool)
            .await
            .map_err(internal)
    }
}

/// Map a write error, turning a unique violation on the headword into
/// `Conflict`.
fn classify(err: sqlx::Error, word: &str) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return duplicate_word(word);
        }
    }
    internal(err)
}

fn internal(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::Internal(err.to_string())
}
