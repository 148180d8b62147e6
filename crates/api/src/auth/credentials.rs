//! Administrator credentials.
//!
//! There is a single admin today, but lookups go through
//! [`CredentialStore`] so further rows can be added without touching the
//! auth service.

use crate::config::AdminConfig;

/// One credential row: a username and its Argon2id PHC hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredential {
    pub username: String,
    pub password_hash: String,
}

/// Read-only source of admin credentials.
pub trait CredentialStore: Send + Sync {
    fn find_by_username(&self, username: &str) -> Option<AdminCredential>;
}

/// Credentials fixed at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    rows: Vec<AdminCredential>,
}

impl StaticCredentials {
    pub fn new(rows: Vec<AdminCredential>) -> Self {
        Self { rows }
    }
}

impl From<&AdminConfig> for StaticCredentials {
    fn from(config: &AdminConfig) -> Self {
        Self::new(vec![AdminCredential {
            username: config.username.clone(),
            password_hash: config.password_hash.clone(),
        }])
    }
}

impl CredentialStore for StaticCredentials {
    fn find_by_username(&self, username: &str) -> Option<AdminCredential> {
        self.rows.iter().find(|c| c.username == username).cloned()
    }
}
