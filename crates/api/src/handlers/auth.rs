//! Handlers for login, logout, and auth status.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::{expired_session_cookie, session_cookie, SessionToken};
use crate::middleware::json::JsonBody;
use crate::response::SuccessResponse;
use crate::services::AuthStatus;
use crate::state::AppState;

/// Request body for `POST /login`.
///
/// Missing fields default to empty so they are reported as 400 by the
/// auth service.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/login
///
/// Verify the admin credential, start a session, and set the session cookie.
/// A session already attached to the request is replaced; failing to
/// remove it does not fail the login.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(input): JsonBody<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let previous = SessionToken::from_jar(&jar);
    let issued = state
        .auth
        .login_replacing(previous.as_deref(), &input.username, &input.password)
        .await?;

    tracing::info!(
        username = %issued.username,
        expires_at = %issued.expires_at,
        "Admin logged in",
    );

    let cookie = session_cookie(
        issued.token,
        state.auth.ttl().num_seconds(),
        state.config.session.cookie_secure,
    );

    Ok((
        jar.add(cookie),
        Json(SuccessResponse::for_user(issued.username)),
    ))
}

/// POST /api/logout
///
/// Destroy the caller's session, if any, and clear the cookie. Always 200.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> AppResult<impl IntoResponse> {
    let token = SessionToken::from_jar(&jar);
    if state.auth.logout(token.as_deref()).await? {
        tracing::info!("Admin logged out");
    }

    let jar = jar.add(expired_session_cookie(state.config.session.cookie_secure));
    Ok((jar, Json(SuccessResponse::ok())))
}

/// GET /api/auth/status
pub async fn status(
    State(state): State<AppState>,
    token: SessionToken,
) -> AppResult<Json<AuthStatus>> {
    let status = state.auth.status(token.as_deref()).await?;
    Ok(Json(status))
}
