//! Client-side state: the cached word list, auth, and what is on screen.

use std::collections::BTreeMap;

use kansai_core::validation::normalize_headword;

use crate::api::{AuthStatusBody, WordRecord};

/// The three views of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Search,
    Register,
    Admin,
}

/// Whether the client holds a live admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    Anonymous,
    Authenticated(String),
}

impl From<AuthStatusBody> for Auth {
    fn from(body: AuthStatusBody) -> Self {
        match (body.is_authenticated, body.username) {
            (true, Some(username)) => Auth::Authenticated(username),
            _ => Auth::Anonymous,
        }
    }
}

/// The search result pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Display {
    /// Neither the result nor the no-result pane is shown.
    Idle,
    Found(WordRecord),
    NotFound,
}

#[derive(Debug, Clone)]
pub struct ClientState {
    words: BTreeMap<String, WordRecord>,
    pub auth: Auth,
    pub tab: Tab,
    pub display: Display,
    /// Set when the word list came from the bundled file instead of the
    /// server. Writes are refused while degraded.
    pub degraded: bool,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            words: BTreeMap::new(),
            auth: Auth::Anonymous,
            tab: Tab::Search,
            display: Display::Idle,
            degraded: false,
        }
    }
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole cache. Later duplicates of a headword win.
    pub fn replace_words(&mut self, words: impl IntoIterator<Item = WordRecord>) {
        self.words = words
            .into_iter()
            .map(|record| (record.word.clone(), record))
            .collect();
    }

    /// Exact lookup of the trimmed query.
    pub fn lookup(&self, query: &str) -> Option<&WordRecord> {
        normalize_headword(query).and_then(|key| self.words.get(key))
    }

    /// Cached entries in headword order.
    pub fn words(&self) -> impl Iterator<Item = &WordRecord> {
        self.words.values()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth, Auth::Authenticated(_))
    }
}
