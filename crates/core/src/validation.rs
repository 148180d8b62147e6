//! Validation for dictionary entry fields.
//!
//! Every create and update goes through [`WordFields::new`] before the store
//! is touched, so a [`WordFields`] value is proof that all four fields are
//! non-blank.

use serde::Serialize;

use crate::error::CoreError;

/// Field names in the order they are reported in validation messages.
pub const WORD_FIELD_NAMES: [&str; 4] = ["word", "accent", "pronunciation", "example"];

/// The four user-editable text fields of a dictionary entry, trimmed and
/// known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFields {
    word: String,
    accent: String,
    pronunciation: String,
    example: String,
}

impl WordFields {
    /// Trim every field and reject the set if any of them ends up empty.
    ///
    /// The error message names each blank field.
    pub fn new(
        word: &str,
        accent: &str,
        pronunciation: &str,
        example: &str,
    ) -> Result<Self, CoreError> {
        let values = [word.trim(), accent.trim(), pronunciation.trim(), example.trim()];

        let missing: Vec<&str> = WORD_FIELD_NAMES
            .iter()
            .zip(values.iter())
            .filter(|(_, v)| v.is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(CoreError::Validation(format!(
                "All fields are required (missing: {})",
                missing.join(", ")
            )));
        }

        let [word, accent, pronunciation, example] = values;
        Ok(Self {
            word: word.to_string(),
            accent: accent.to_string(),
            pronunciation: pronunciation.to_string(),
            example: example.to_string(),
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn accent(&self) -> &str {
        &self.accent
    }

    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    pub fn example(&self) -> &str {
        &self.example
    }
}

/// Normalize a headword used as a lookup key.
///
/// Lookups are exact after trimming surrounding whitespace; `None` means the
/// key is blank.
pub fn normalize_headword(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
