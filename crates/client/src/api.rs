//! REST client for the dictionary API.
//!
//! [`DictionaryApi`] is the seam the controller is written against;
//! [`HttpApi`] implements it over [`reqwest`] with a cookie jar so the
//! session cookie set by `/api/login` rides along on later calls.

use std::future::Future;

use kansai_core::types::DbId;
use serde::{Deserialize, Serialize};

/// Default server base URL when `KANSAI_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// A dictionary entry as the client sees it.
///
/// Entries loaded from the bundled fallback file have no `id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordRecord {
    #[serde(default)]
    pub id: Option<DbId>,
    pub word: String,
    pub accent: String,
    pub pronunciation: String,
    pub example: String,
}

/// Body for create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordInput {
    pub word: String,
    pub accent: String,
    pub pronunciation: String,
    pub example: String,
}

/// Response of `GET /api/auth/status`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatusBody {
    pub is_authenticated: bool,
    #[serde(default)]
    pub username: Option<String>,
}

/// Response of `POST /api/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginBody {
    pub success: bool,
    #[serde(default)]
    pub username: Option<String>,
}

/// Errors from the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never got a response (connection refused, DNS, TLS, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// The message worth showing to a user.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(_) => "サーバーに接続できませんでした。".to_string(),
            ClientError::Api { message, .. } => message.clone(),
        }
    }
}

/// Server operations the client performs.
pub trait DictionaryApi: Send + Sync {
    fn list_words(&self) -> impl Future<Output = Result<Vec<WordRecord>, ClientError>> + Send;

    fn auth_status(&self) -> impl Future<Output = Result<AuthStatusBody, ClientError>> + Send;

    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<LoginBody, ClientError>> + Send;

    fn logout(&self) -> impl Future<Output = Result<(), ClientError>> + Send;

    fn create_word(
        &self,
        input: &WordInput,
    ) -> impl Future<Output = Result<WordRecord, ClientError>> + Send;

    fn update_word(
        &self,
        id: DbId,
        input: &WordInput,
    ) -> impl Future<Output = Result<WordRecord, ClientError>> + Send;

    fn delete_word(&self, id: DbId) -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// HTTP client for one dictionary server.
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpApi {
    /// Create a client for `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client for `KANSAI_API_URL`, or [`DEFAULT_API_URL`].
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = std::env::var("KANSAI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.base_url)
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or an
    /// [`ClientError::Api`] carrying the server's `error` message.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

impl DictionaryApi for HttpApi {
    async fn list_words(&self) -> Result<Vec<WordRecord>, ClientError> {
        let response = self.client.get(self.url("/words")).send().await?;
        Self::parse_response(response).await
    }

    async fn auth_status(&self) -> Result<AuthStatusBody, ClientError> {
        let response = self.client.get(self.url("/auth/status")).send().await?;
        Self::parse_response(response).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginBody, ClientError> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });
        let response = self
            .client
            .post(self.url("/login"))
            .json(&body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn logout(&self) -> Result<(), ClientError> {
        let response = self.client.post(self.url("/logout")).send().await?;
        Self::check_status(response).await
    }

    async fn create_word(&self, input: &WordInput) -> Result<WordRecord, ClientError> {
        let response = self
            .client
            .post(self.url("/words"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update_word(&self, id: DbId, input: &WordInput) -> Result<WordRecord, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/words/{id}")))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn delete_word(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/words/{id}")))
            .send()
            .await?;
        Self::check_status(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_entry_deserializes_and_ignores_created_at() {
        let json = r#"{
            "id": 7,
            "word": "すごい",
            "accent": "す↗ご↘い",
            "pronunciation": "ス↗ゴ↘イ",
            "example": "「すごいなあ」",
            "created_at": "2026-01-01T00:00:00Z"
        }"#;
        let record: WordRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(7));
        assert_eq!(record.word, "すごい");
    }

    #[test]
    fn auth_status_uses_camel_case() {
        let body: AuthStatusBody =
            serde_json::from_str(r#"{"isAuthenticated": true, "username": "admin"}"#).unwrap();
        assert!(body.is_authenticated);
        assert_eq!(body.username.as_deref(), Some("admin"));
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let api = HttpApi::new("http://localhost:3000/").unwrap();
        assert_eq!(api.base_url(), "http://localhost:3000");
        assert_eq!(api.url("/words"), "http://localhost:3000/api/words");
    }
}
