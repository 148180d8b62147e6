//! Dictionary entry model and request DTO.

use kansai_core::error::CoreError;
use kansai_core::types::{DbId, Timestamp};
use kansai_core::validation::WordFields;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `words` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct WordEntry {
    pub id: DbId,
    pub word: String,
    pub accent: String,
    pub pronunciation: String,
    pub example: String,
    pub created_at: Timestamp,
}

/// Request body for creating or replacing an entry.
///
/// Missing fields deserialize as empty strings so they are reported by
/// [`WordPayload::validate`] rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WordPayload {
    pub word: String,
    pub accent: String,
    pub pronunciation: String,
    pub example: String,
}

impl WordPayload {
    pub fn validate(&self) -> Result<WordFields, CoreError> {
        WordFields::new(&self.word, &self.accent, &self.pronunciation, &self.example)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_blank() {
        let payload: WordPayload = serde_json::from_str(r#"{"word": "すごい"}"#).unwrap();
        assert_eq!(payload.word, "すごい");
        assert!(payload.accent.is_empty());
        assert!(payload.validate().is_err());
    }
}
