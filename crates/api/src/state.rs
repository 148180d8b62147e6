use std::sync::Arc;

use kansai_db::store::{SessionStore, WordStore};

use crate::auth::credentials::StaticCredentials;
use crate::config::ServerConfig;
use crate::services::{AuthService, DictionaryService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (cookie flags, session lifetime).
    pub config: Arc<ServerConfig>,
    /// Word CRUD.
    pub dictionary: DictionaryService,
    /// Admin login and sessions.
    pub auth: AuthService,
}

impl AppState {
    /// Wire the services to the given stores. The credential row comes from
    /// `config.admin`.
    pub fn new(
        config: ServerConfig,
        words: Arc<dyn WordStore>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        let credentials = Arc::new(StaticCredentials::from(&config.admin));
        let ttl = chrono::Duration::hours(config.session.ttl_hours);

        Self {
            dictionary: DictionaryService::new(words),
            auth: AuthService::new(credentials, sessions, ttl),
            config: Arc::new(config),
        }
    }
}
