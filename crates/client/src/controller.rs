//! The UI controller.
//!
//! Each public method handles one user action. Searches are answered from
//! the cached word list without a network call; every successful write is
//! followed by a full re-fetch of the list. Failed calls are logged, shown
//! to the user through the [`Notifier`], and never retried.

use kansai_core::seed::BundledDictionary;
use kansai_core::validation::WordFields;

use crate::api::{ClientError, DictionaryApi, WordInput, WordRecord};
use crate::state::{Auth, ClientState, Display, Tab};

/// The bundled dictionary, used when the server cannot be reached.
pub const BUNDLED_DICTIONARY: &str = include_str!("../../../data/dictionary.json");

pub const MSG_EMPTY_QUERY: &str = "単語を入力してください。";
pub const MSG_LOAD_FAILED: &str =
    "単語リストを取得できませんでした。内蔵の辞書で表示します（閲覧のみ）。";
pub const MSG_LOGIN_REQUIRED: &str = "ログインしてください。";
pub const MSG_READ_ONLY: &str = "オフラインのため編集できません。";
pub const MSG_MISSING_CREDENTIALS: &str = "ユーザー名とパスワードを入力してください。";
pub const MSG_MISSING_FIELDS: &str = "すべての項目を入力してください。";
pub const MSG_UNKNOWN_WORD: &str = "その単語は登録されていません。";

/// Blocking user-facing alerts.
pub trait Notifier {
    fn alert(&self, message: &str);
}

pub struct UiController<A, N> {
    api: A,
    notifier: N,
    state: ClientState,
}

impl<A: DictionaryApi, N: Notifier> UiController<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self::with_state(api, notifier, ClientState::new())
    }

    pub fn with_state(api: A, notifier: N, state: ClientState) -> Self {
        Self {
            api,
            notifier,
            state,
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// Fetch the word list, falling back to the bundled dictionary, then
    /// fetch auth status.
    pub async fn load(&mut self) {
        match self.api.list_words().await {
            Ok(words) => {
                tracing::info!(count = words.len(), "Loaded word list");
                self.state.replace_words(words);
                self.state.degraded = false;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load word list, using bundled dictionary");
                self.notifier.alert(MSG_LOAD_FAILED);
                self.state.replace_words(bundled_words());
                self.state.degraded = true;
                self.state.auth = Auth::Anonymous;
                return;
            }
        }

        self.refresh_auth().await;
    }

    /// Re-fetch both the word list and auth status.
    pub async fn refresh(&mut self) {
        self.load().await;
    }

    /// Look up `query` in the cached list and show the result.
    ///
    /// A blank query raises an alert and leaves the display as it was.
    pub fn search(&mut self, query: &str) -> &Display {
        let query = query.trim();
        if query.is_empty() {
            self.notifier.alert(MSG_EMPTY_QUERY);
            return &self.state.display;
        }

        self.state.display = match self.state.lookup(query) {
            Some(record) => Display::Found(record.clone()),
            None => Display::NotFound,
        };
        &self.state.display
    }

    /// Called on every edit of the search input. Clearing it hides both
    /// result panes.
    pub fn input_changed(&mut self, input: &str) {
        if input.trim().is_empty() {
            self.state.display = Display::Idle;
        }
    }

    /// Switch views, returning the view actually shown.
    ///
    /// The displayed result is reset. Opening the register view while
    /// anonymous lands on the admin (login) view instead.
    pub fn switch_tab(&mut self, tab: Tab) -> Tab {
        self.state.display = Display::Idle;
        self.state.tab = match tab {
            Tab::Register if !self.state.is_authenticated() => Tab::Admin,
            other => other,
        };
        self.state.tab
    }

    pub async fn login(&mut self, username: &str, password: &str) -> bool {
        if username.trim().is_empty() || password.is_empty() {
            self.notifier.alert(MSG_MISSING_CREDENTIALS);
            return false;
        }

        match self.api.login(username.trim(), password).await {
            Ok(body) if body.success => {
                let username = body.username.unwrap_or_else(|| username.trim().to_string());
                tracing::info!(%username, "Logged in");
                self.state.auth = Auth::Authenticated(username);
                true
            }
            Ok(_) => {
                self.notifier.alert("ログインに失敗しました。");
                false
            }
            Err(e) => {
                self.report("Login failed", &e);
                false
            }
        }
    }

    pub async fn logout(&mut self) {
        match self.api.logout().await {
            Ok(()) => {
                tracing::info!("Logged out");
                self.state.auth = Auth::Anonymous;
                if self.state.tab == Tab::Register {
                    self.state.tab = Tab::Admin;
                }
            }
            Err(e) => self.report("Logout failed", &e),
        }
    }

    /// Create an entry, then re-fetch the list.
    pub async fn register(&mut self, input: WordInput) -> bool {
        if !self.ensure_writable() || !self.ensure_complete(&input) {
            return false;
        }

        match self.api.create_word(&input).await {
            Ok(record) => {
                tracing::info!(word = %record.word, "Registered word");
                self.reload_words().await;
                true
            }
            Err(e) => {
                self.report("Register failed", &e);
                false
            }
        }
    }

    /// Replace the entry currently filed under `headword`, then re-fetch.
    pub async fn edit(&mut self, headword: &str, input: WordInput) -> bool {
        if !self.ensure_writable() || !self.ensure_complete(&input) {
            return false;
        }
        let Some(id) = self.cached_id(headword) else {
            return false;
        };

        match self.api.update_word(id, &input).await {
            Ok(record) => {
                tracing::info!(word_id = id, word = %record.word, "Updated word");
                self.reload_words().await;
                true
            }
            Err(e) => {
                self.report("Update failed", &e);
                false
            }
        }
    }

    /// Delete the entry filed under `headword`, then re-fetch.
    pub async fn delete(&mut self, headword: &str) -> bool {
        if !self.ensure_writable() {
            return false;
        }
        let Some(id) = self.cached_id(headword) else {
            return false;
        };

        match self.api.delete_word(id).await {
            Ok(()) => {
                tracing::info!(word_id = id, "Deleted word");
                self.reload_words().await;
                true
            }
            Err(e) => {
                self.report("Delete failed", &e);
                false
            }
        }
    }

    // ---- private helpers ----

    async fn refresh_auth(&mut self) {
        match self.api.auth_status().await {
            Ok(body) => self.state.auth = Auth::from(body),
            Err(e) => {
                self.report("Failed to fetch auth status", &e);
                self.state.auth = Auth::Anonymous;
            }
        }
    }

    /// Replace the cache with the server's list. On failure the previous
    /// cache is kept.
    async fn reload_words(&mut self) {
        match self.api.list_words().await {
            Ok(words) => self.state.replace_words(words),
            Err(e) => self.report("Failed to reload word list", &e),
        }
        self.state.display = Display::Idle;
    }

    fn ensure_writable(&self) -> bool {
        if self.state.degraded {
            self.notifier.alert(MSG_READ_ONLY);
            return false;
        }
        if !self.state.is_authenticated() {
            self.notifier.alert(MSG_LOGIN_REQUIRED);
            return false;
        }
        true
    }

    fn ensure_complete(&self, input: &WordInput) -> bool {
        let complete = WordFields::new(
            &input.word,
            &input.accent,
            &input.pronunciation,
            &input.example,
        )
        .is_ok();
        if !complete {
            self.notifier.alert(MSG_MISSING_FIELDS);
        }
        complete
    }

    fn cached_id(&self, headword: &str) -> Option<i64> {
        let id = self.state.lookup(headword).and_then(|record| record.id);
        if id.is_none() {
            self.notifier.alert(MSG_UNKNOWN_WORD);
        }
        id
    }

    fn report(&self, context: &str, error: &ClientError) {
        tracing::error!(error = %error, "{context}");
        self.notifier.alert(&error.user_message());
    }
}

/// Entries of the bundled dictionary, without ids.
pub fn bundled_words() -> Vec<WordRecord> {
    match BundledDictionary::from_json(BUNDLED_DICTIONARY) {
        Ok(dictionary) => dictionary
            .entries
            .into_iter()
            .map(|(word, entry)| WordRecord {
                id: None,
                word,
                accent: entry.accent,
                pronunciation: entry.pronunciation,
                example: entry.example,
            })
            .collect(),
        Err(e) => {
            tracing::error!(error = %e, "Bundled dictionary is invalid");
            Vec::new()
        }
    }
}
