//! Route definitions for login, logout, and auth status.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes, merged directly under `/api`.
///
/// ```text
/// POST /login        -> login
/// POST /logout       -> logout
/// GET  /auth/status  -> status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/auth/status", get(auth::status))
}
