//! Cookie-based session extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::error::AppError;
use crate::state::AppState;

/// Name of the cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "kansai_session";

/// The session token from the request's cookies, if present.
///
/// Never rejects; handlers that work for anonymous callers (status, logout)
/// take this instead of [`RequireAuth`].
#[derive(Debug, Clone, Default)]
pub struct SessionToken(pub Option<String>);

impl SessionToken {
    pub fn from_jar(jar: &CookieJar) -> Self {
        SessionToken(
            jar.get(SESSION_COOKIE)
                .map(|cookie| cookie.value().to_owned())
                .filter(|value| !value.is_empty()),
        )
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for SessionToken {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state).await?;
        Ok(SessionToken::from_jar(&jar))
    }
}

/// The authenticated administrator.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub username: String,
}

/// Requires a live admin session. Rejects with 401 otherwise, before any
/// body extractor or service call runs.
///
/// ```ignore
/// async fn protected(RequireAuth(admin): RequireAuth) -> AppResult<Json<()>> {
///     tracing::info!(username = %admin.username, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AdminUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let SessionToken(token) = SessionToken::from_request_parts(parts, state)
            .await
            .unwrap_or_default();
        let session = state.auth.authenticate(token.as_deref()).await?;

        Ok(RequireAuth(AdminUser {
            username: session.username,
        }))
    }
}

/// Session cookie holding `token` for `max_age_secs`.
pub fn session_cookie(token: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::seconds(max_age_secs))
        .build()
}

/// Cookie that makes the browser drop the session cookie.
pub fn expired_session_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), 0, secure);
    cookie.make_removal();
    cookie
}
