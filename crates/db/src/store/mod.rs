//! Store traits the services are written against.
//!
//! The services hold `Arc<dyn WordStore>` / `Arc<dyn SessionStore>` so the
//! same code runs on Postgres ([`postgres`]) or on process memory
//! ([`memory`]). Implementations report failures as [`CoreError`]:
//! duplicate headwords as `Conflict`, unknown ids as `NotFound`, anything
//! else as `Internal`.

use async_trait::async_trait;
use kansai_core::error::CoreError;
use kansai_core::types::DbId;
use kansai_core::validation::WordFields;

use crate::models::session::{AdminSession, CreateSession};
use crate::models::word::WordEntry;

pub mod memory;
pub mod postgres;

pub use memory::{MemorySessionStore, MemoryWordStore};
pub use postgres::{PgSessionStore, PgWordStore};

/// Entity name used in not-found errors for dictionary entries.
pub const WORD_ENTITY: &str = "Word";

/// Durable table of dictionary entries, unique on `word`.
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Insert a new entry. `Conflict` if the headword exists.
    async fn insert(&self, fields: &WordFields) -> Result<WordEntry, CoreError>;

    /// Every entry, ordered by headword.
    async fn list_all(&self) -> Result<Vec<WordEntry>, CoreError>;

    /// Exact headword lookup. `NotFound` if absent.
    async fn find_by_word(&self, word: &str) -> Result<WordEntry, CoreError>;

    /// Replace the text fields of entry `id`. `NotFound` if absent,
    /// `Conflict` if the new headword belongs to another entry.
    async fn update(&self, id: DbId, fields: &WordFields) -> Result<WordEntry, CoreError>;

    /// Permanently remove entry `id`. `NotFound` if absent.
    async fn delete(&self, id: DbId) -> Result<(), CoreError>;

    async fn count(&self) -> Result<u64, CoreError>;
}

/// Server-side session records keyed by the hash of an opaque token.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, input: CreateSession) -> Result<AdminSession, CoreError>;

    /// The session for `token_hash`, or `None` if unknown or expired.
    async fn find(&self, token_hash: &str) -> Result<Option<AdminSession>, CoreError>;

    /// Remove the session. Returns `false` if there was nothing to remove.
    async fn destroy(&self, token_hash: &str) -> Result<bool, CoreError>;

    /// Drop every expired session, returning how many were removed.
    async fn purge_expired(&self) -> Result<u64, CoreError>;
}

pub(crate) fn duplicate_word(word: &str) -> CoreError {
    CoreError::Conflict(format!("Word '{word}' already exists"))
}
