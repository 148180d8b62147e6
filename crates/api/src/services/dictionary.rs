//! CRUD over the word store.
//!
//! Every mutating call validates the payload first, so a blank field never
//! reaches the store.

use std::sync::Arc;

use kansai_core::error::CoreError;
use kansai_core::types::DbId;
use kansai_core::validation::normalize_headword;
use kansai_db::models::word::{WordEntry, WordPayload};
use kansai_db::store::{WordStore, WORD_ENTITY};

#[derive(Clone)]
pub struct DictionaryService {
    store: Arc<dyn WordStore>,
}

impl DictionaryService {
    pub fn new(store: Arc<dyn WordStore>) -> Self {
        Self { store }
    }

    /// Every entry ordered by headword; empty when the store is empty.
    pub async fn list_all(&self) -> Result<Vec<WordEntry>, CoreError> {
        self.store.list_all().await
    }

    /// Exact lookup after trimming the key.
    pub async fn find(&self, word: &str) -> Result<WordEntry, CoreError> {
        let key = normalize_headword(word).ok_or_else(|| CoreError::not_found(WORD_ENTITY, word))?;
        self.store.find_by_word(key).await
    }

    pub async fn create(&self, payload: &WordPayload) -> Result<WordEntry, CoreError> {
        let fields = payload.validate()?;
        self.store.insert(&fields).await
    }

    /// Replace entry `id`. The new headword must not belong to another entry.
    pub async fn update(&self, id: DbId, payload: &WordPayload) -> Result<WordEntry, CoreError> {
        let fields = payload.validate()?;
        self.store.update(id, &fields).await
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use kansai_db::store::MemoryWordStore;

    use super::*;

    fn service() -> DictionaryService {
        DictionaryService::new(Arc::new(MemoryWordStore::new()))
    }

    fn payload(word: &str) -> WordPayload {
        WordPayload {
            word: word.into(),
            accent: "て↗す↘と".into(),
            pronunciation: "テ↗ス↘ト".into(),
            example: "「テストやで」".into(),
        }
    }

    #[tokio::test]
    async fn create_then_list_contains_exactly_one_entry() {
        let svc = service();
        let created = svc.create(&payload("テスト")).await.unwrap();

        let all = svc.list_all().await.unwrap();
        let matching: Vec<_> = all.iter().filter(|e| e.word == "テスト").collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].id, created.id);
    }

    #[tokio::test]
    async fn duplicate_create_leaves_store_unchanged() {
        let svc = service();
        svc.create(&payload("テスト")).await.unwrap();
        let before = svc.list_all().await.unwrap();

        assert_matches!(
            svc.create(&payload("テスト")).await,
            Err(CoreError::Conflict(_))
        );
        assert_eq!(svc.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn blank_fields_fail_before_any_mutation() {
        let svc = service();
        let existing = svc.create(&payload("テスト")).await.unwrap();

        let mut blank = payload("新しい");
        blank.example = "   ".into();
        assert_matches!(svc.create(&blank).await, Err(CoreError::Validation(_)));

        // Validation wins even for an unknown id.
        assert_matches!(svc.update(999, &blank).await, Err(CoreError::Validation(_)));

        let mut blank_update = payload("テスト");
        blank_update.accent = String::new();
        assert_matches!(
            svc.update(existing.id, &blank_update).await,
            Err(CoreError::Validation(_))
        );
        assert_eq!(svc.list_all().await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found_and_changes_nothing() {
        let svc = service();
        let existing = svc.create(&payload("テスト")).await.unwrap();

        assert_matches!(
            svc.update(existing.id + 1, &payload("別")).await,
            Err(CoreError::NotFound { .. })
        );
        assert_eq!(svc.list_all().await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let svc = service();
        let keep = svc.create(&payload("すごい")).await.unwrap();
        let gone = svc.create(&payload("やばい")).await.unwrap();

        assert_matches!(svc.delete(gone.id + 100).await, Err(CoreError::NotFound { .. }));
        svc.delete(gone.id).await.unwrap();
        assert_eq!(svc.list_all().await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn find_trims_the_key() {
        let svc = service();
        svc.create(&payload("テスト")).await.unwrap();
        let found = svc.find(" テスト ").await.unwrap();
        assert_eq!(found.pronunciation, "テ↗ス↘ト");
        assert_matches!(svc.find("  ").await, Err(CoreError::NotFound { .. }));
    }
}
