//! In-process stores used when no `DATABASE_URL` is configured, and by tests.
//!
//! They follow the same contract as the Postgres stores: ids come from a
//! monotonically increasing counter and are never reused, and `word` is
//! unique across rows.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use kansai_core::error::CoreError;
use kansai_core::types::DbId;
use kansai_core::validation::WordFields;
use tokio::sync::RwLock;

use super::{duplicate_word, SessionStore, WordStore, WORD_ENTITY};
use crate::models::session::{AdminSession, CreateSession};
use crate::models::word::WordEntry;

#[derive(Default)]
struct WordTable {
    rows: BTreeMap<DbId, WordEntry>,
    last_id: DbId,
}

impl WordTable {
    fn id_of(&self, word: &str) -> Option<DbId> {
        self.rows.values().find(|r| r.word == word).map(|r| r.id)
    }
}

/// Dictionary entries held in memory.
#[derive(Default)]
pub struct MemoryWordStore {
    table: RwLock<WordTable>,
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WordStore for MemoryWordStore {
    async fn insert(&self, fields: &WordFields) -> Result<WordEntry, CoreError> {
        let mut table = self.table.write().await;
        if table.id_of(fields.word()).is_some() {
            return Err(duplicate_word(fields.word()));
        }

        table.last_id += 1;
        let entry = WordEntry {
            id: table.last_id,
            word: fields.word().to_string(),
            accent: fields.accent().to_string(),
            pronunciation: fields.pronunciation().to_string(),
            example: fields.example().to_string(),
            created_at: Utc::now(),
        };
        table.rows.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<WordEntry>, CoreError> {
        let table = self.table.read().await;
        let mut rows: Vec<WordEntry> = table.rows.values().cloned().collect();
        rows.sort_by(|a, b| a.word.cmp(&b.word));
        Ok(rows)
    }

    async fn find_by_word(&self, word: &str) -> Result<WordEntry, CoreError> {
        let table = self.table.read().await;
        table
            .rows
            .values()
            .find(|r| r.word == word)
            .cloned()
            .ok_or_else(|| CoreError::not_found(WORD_ENTITY, word))
    }

    async fn update(&self, id: DbId, fields: &WordFields) -> Result<WordEntry, CoreError> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&id) {
            return Err(CoreError::not_found(WORD_ENTITY, id));
        }
        if matches!(table.id_of(fields.word()), Some(other) if other != id) {
            return Err(duplicate_word(fields.word()));
        }

        let row = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| CoreError::not_found(WORD_ENTITY, id))?;
        row.word = fields.word().to_string();
        row.accent = fields.accent().to_string();
        row.pronunciation = fields.pronunciation().to_string();
        row.example = fields.example().to_string();
        Ok(row.clone())
    }

    async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| CoreError::not_found(WORD_ENTITY, id))
    }

    async fn count(&self) -> Result<u64, CoreError> {
        Ok(self.table.read().await.rows.len() as u64)
    }
}

/// Admin sessions held in memory, keyed by token hash.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, AdminSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, input: CreateSession) -> Result<AdminSession, CoreError> {
        let session = AdminSession {
            username: input.username,
            expires_at: input.expires_at,
            created_at: Utc::now(),
        };
        self.sessions
            .write()
            .await
            .insert(input.token_hash, session.clone());
        Ok(session)
    }

    async fn find(&self, token_hash: &str) -> Result<Option<AdminSession>, CoreError> {
        let now = Utc::now();
        Ok(self
            .sessions
            .read()
            .await
            .get(token_hash)
            .filter(|s| !s.is_expired_at(now))
            .cloned())
    }

    async fn destroy(&self, token_hash: &str) -> Result<bool, CoreError> {
        Ok(self.sessions.write().await.remove(token_hash).is_some())
    }

    async fn purge_expired(&self) -> Result<u64, CoreError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired_at(now));
        Ok((before - sessions.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Duration;

    use super::*;

    fn fields(word: &str) -> WordFields {
        WordFields::new(word, "あ↗い", "ア↗イ", "「例文」").unwrap()
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryWordStore::new();
        let first = store.insert(&fields("あ")).await.unwrap();
        store.delete(first.id).await.unwrap();
        let second = store.insert(&fields("あ")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn list_is_ordered_by_word() {
        let store = MemoryWordStore::new();
        for w in ["やばい", "おおきに", "すごい"] {
            store.insert(&fields(w)).await.unwrap();
        }
        let words: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.word)
            .collect();
        assert_eq!(words, vec!["おおきに", "すごい", "やばい"]);
    }

    #[tokio::test]
    async fn duplicate_insert_conflicts() {
        let store = MemoryWordStore::new();
        store.insert(&fields("すごい")).await.unwrap();
        let result = store.insert(&fields("すごい")).await;
        assert_matches!(result, Err(CoreError::Conflict(_)));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn update_to_another_rows_word_conflicts() {
        let store = MemoryWordStore::new();
        store.insert(&fields("すごい")).await.unwrap();
        let other = store.insert(&fields("やばい")).await.unwrap();

        let result = store.update(other.id, &fields("すごい")).await;
        assert_matches!(result, Err(CoreError::Conflict(_)));

        // Keeping its own word is fine.
        let same = store.update(other.id, &fields("やばい")).await.unwrap();
        assert_eq!(same.created_at, other.created_at);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let store = MemoryWordStore::new();
        assert_matches!(
            store.update(7, &fields("x")).await,
            Err(CoreError::NotFound { .. })
        );
        assert_matches!(store.delete(7).await, Err(CoreError::NotFound { .. }));
        assert_matches!(
            store.find_by_word("x").await,
            Err(CoreError::NotFound { .. })
        );
    }

    #[tokio::test]
    async fn expired_sessions_are_invisible_and_purged() {
        let store = MemorySessionStore::new();
        store
            .create(CreateSession {
                token_hash: "live".into(),
                username: "admin".into(),
                expires_at: Utc::now() + Duration::hours(24),
            })
            .await
            .unwrap();
        store
            .create(CreateSession {
                token_hash: "stale".into(),
                username: "admin".into(),
                expires_at: Utc::now() - Duration::minutes(1),
            })
            .await
            .unwrap();

        assert!(store.find("live").await.unwrap().is_some());
        assert!(store.find("stale").await.unwrap().is_none());
        assert_eq!(store.purge_expired().await.unwrap(), 1);
        assert!(store.destroy("live").await.unwrap());
        assert!(!store.destroy("live").await.unwrap());
    }
}
