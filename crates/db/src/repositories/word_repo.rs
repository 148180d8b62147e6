//! Repository for the `words` table.

use kansai_core::types::DbId;
use kansai_core::validation::WordFields;
use sqlx::PgPool;

use crate::models::word::WordEntry;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, word, accent, pronunciation, example, created_at";

/// Provides CRUD operations for dictionary entries.
pub struct WordRepo;

impl WordRepo {
    /// Insert a new entry, returning the created row.
    ///
    /// A duplicate `word` fails with a unique violation on `uq_words_word`.
    pub async fn create(pool: &PgPool, fields: &WordFields) -> Result<WordEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO words (word, accent, pronunciation, example)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WordEntry>(&query)
            .bind(fields.word())
            .bind(fields.accent())
            .bind(fields.pronunciation())
            .bind(fields.example())
            .fetch_one(pool)
            .await
    }

    /// List every entry ordered by headword.
    ///
    /// `COLLATE "C"` keeps the order byte-wise (code point order for UTF-8)
    /// regardless of the database locale.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<WordEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM words ORDER BY word COLLATE \"C\"");
        sqlx::query_as::<_, WordEntry>(&query).fetch_all(pool).await
    }

    /// Find an entry by exact headword.
    pub async fn find_by_word(pool: &PgPool, word: &str) -> Result<Option<WordEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM words WHERE word = $1");
        sqlx::query_as::<_, WordEntry>(&query)
            .bind(word)
            .fetch_optional(pool)
            .await
    }

    /// Replace the four text fields of an entry. `created_at` is untouched.
    ///
    /// Returns `None` if no entry with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &WordFields,
    ) -> Result<Option<WordEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE words SET word = $2, accent = $3, pronunciation = $4, example = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WordEntry>(&query)
            .bind(id)
            .bind(fields.word())
            .bind(fields.accent())
            .bind(fields.pronunciation())
            .bind(fields.example())
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM words WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of entries.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM words")
            .fetch_one(pool)
            .await
    }
}
