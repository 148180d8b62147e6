//! Admin login, logout, and session status.
//!
//! A client is `Authenticated(username)` exactly when it presents a token
//! whose hash maps to an unexpired session; anything else is `Anonymous`.
//! Sessions have an absolute lifetime from login.

use std::sync::Arc;

use chrono::{Duration, Utc};
use kansai_core::error::CoreError;
use kansai_core::types::Timestamp;
use kansai_db::models::session::{AdminSession, CreateSession};
use kansai_db::store::SessionStore;
use serde::Serialize;

use crate::auth::credentials::CredentialStore;
use crate::auth::password::verify_password;
use crate::auth::token::{token_digest, NewToken};

/// A freshly issued session. `token` goes into the cookie and nowhere else.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub username: String,
    pub expires_at: Timestamp,
}

/// Read-only projection of the caller's auth state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub is_authenticated: bool,
    pub username: Option<String>,
}

impl AuthStatus {
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            username: None,
        }
    }
}

#[derive(Clone)]
pub struct AuthService {
    credentials: Arc<dyn CredentialStore>,
    sessions: Arc<dyn SessionStore>,
    ttl: Duration,
}

impl AuthService {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        sessions: Arc<dyn SessionStore>,
        ttl: Duration,
    ) -> Self {
        Self {
            credentials,
            sessions,
            ttl,
        }
    }

    /// Session lifetime, also used as the cookie `Max-Age`.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Check the credential and start a session.
    ///
    /// Unknown usernames and wrong passwords fail identically with
    /// `Unauthorized`; no session is created.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedSession, CoreError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(CoreError::Validation(
                "Username and password are required".into(),
            ));
        }

        let credential = self
            .credentials
            .find_by_username(username)
            .ok_or_else(invalid_credentials)?;

        if !verify_password(password, &credential.password_hash)? {
            return Err(invalid_credentials());
        }

        let token = NewToken::generate();
        let session = self
            .sessions
            .create(CreateSession {
                token_hash: token.digest,
                username: credential.username,
                expires_at: Utc::now() + self.ttl,
            })
            .await?;

        Ok(IssuedSession {
            token: token.plaintext,
            username: session.username,
            expires_at: session.expires_at,
        })
    }

    /// [`login`](Self::login), then destroy the caller's previous session.
    ///
    /// A failed login leaves `previous` alive. Failing to destroy it is
    /// logged and does not fail the login.
    pub async fn login_replacing(
        &self,
        previous: Option<&str>,
        username: &str,
        password: &str,
    ) -> Result<IssuedSession, CoreError> {
        let issued = self.login(username, password).await?;

        match self.logout(previous).await {
            Ok(true) => tracing::debug!("Replaced previous admin session"),
            Ok(false) => {}
            Err(e) => tracing::warn!(error = %e, "Could not remove previous admin session"),
        }
        Ok(issued)
    }

    /// Resolve a token to its live session, or fail with `Unauthorized`.
    pub async fn authenticate(&self, token: Option<&str>) -> Result<AdminSession, CoreError> {
        let token = token.ok_or_else(unauthenticated)?;
        self.sessions
            .find(&token_digest(token))
            .await?
            .ok_or_else(unauthenticated)
    }

    pub async fn status(&self, token: Option<&str>) -> Result<AuthStatus, CoreError> {
        match self.authenticate(token).await {
            Ok(session) => Ok(AuthStatus {
                is_authenticated: true,
                username: Some(session.username),
            }),
            Err(CoreError::Unauthorized(_)) => Ok(AuthStatus::anonymous()),
            Err(e) => Err(e),
        }
    }

    /// Destroy the session behind `token`. Succeeds when already anonymous.
    ///
    /// Returns whether a session was actually removed.
    pub async fn logout(&self, token: Option<&str>) -> Result<bool, CoreError> {
        match token {
            Some(token) => self.sessions.destroy(&token_digest(token)).await,
            None => Ok(false),
        }
    }

    pub async fn purge_expired(&self) -> Result<u64, CoreError> {
        self.sessions.purge_expired().await
    }
}

fn invalid_credentials() -> CoreError {
    CoreError::Unauthorized("Invalid username or password".into())
}

fn unauthenticated() -> CoreError {
    CoreError::Unauthorized("Authentication required".into())
}
