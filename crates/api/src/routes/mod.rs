pub mod auth;
pub mod health;
pub mod words;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /words                 list (public), create (requires auth)
/// /words/{word}          get by headword (public)
/// /words/{id}            update, delete (requires auth)
///
/// /login                 login (public)
/// /logout                logout (public, idempotent)
/// /auth/status           current auth state (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/words", words::router())
        .merge(auth::router())
}
