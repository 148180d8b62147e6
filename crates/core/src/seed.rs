//! The bundled dictionary file.
//!
//! A JSON object mapping headword to `{accent, pronunciation, example}`. The
//! server uses it to seed an empty store; the client falls back to it when
//! the API is unreachable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::WordFields;

/// The value side of one bundled dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundledEntry {
    pub accent: String,
    pub pronunciation: String,
    pub example: String,
}

/// Headword → entry, ordered by headword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BundledDictionary {
    pub entries: BTreeMap<String, BundledEntry>,
}

impl BundledDictionary {
    /// Parse the bundled JSON document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid dictionary file: {e}")))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate each entry into [`WordFields`].
    ///
    /// Entries that fail validation are returned separately with their
    /// error instead of aborting the whole file.
    pub fn validated(&self) -> (Vec<WordFields>, Vec<(String, CoreError)>) {
        let mut valid = Vec::with_capacity(self.entries.len());
        let mut rejected = Vec::new();

        for (word, entry) in &self.entries {
            match WordFields::new(word, &entry.accent, &entry.pronunciation, &entry.example) {
                Ok(fields) => valid.push(fields),
                Err(e) => rejected.push((word.clone(), e)),
            }
        }
        (valid, rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "すごい": {"accent": "す↗ご↘い", "pronunciation": "ス↗ゴ↘イ", "example": "「すごいなあ！」"},
        "おおきに": {"accent": "お↗おき↘に", "pronunciation": "オ↗オキ↘ニ", "example": "「おおきに」"},
        "から": {"accent": " ", "pronunciation": "カラ", "example": "「から」"}
    }"#;

    #[test]
    fn parses_object_keyed_by_headword() {
        let dict = BundledDictionary::from_json(SAMPLE).expect("valid json");
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.entries["すごい"].pronunciation, "ス↗ゴ↘イ");
    }

    #[test]
    fn blank_entries_are_rejected_individually() {
        let dict = BundledDictionary::from_json(SAMPLE).unwrap();
        let (valid, rejected) = dict.validated();
        assert_eq!(valid.len(), 2);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].0, "から");
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        let err = BundledDictionary::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
