//! Route definitions for the `/words` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::words;
use crate::state::AppState;

/// Routes mounted at `/words`.
///
/// The single `{key}` segment is a headword for GET and a numeric id for
/// PUT and DELETE.
///
/// ```text
/// GET    /        -> list_words
/// POST   /        -> create_word
/// GET    /{key}   -> get_word
/// PUT    /{key}   -> update_word
/// DELETE /{key}   -> delete_word
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(words::list_words).post(words::create_word))
        .route(
            "/{key}",
            get(words::get_word)
                .put(words::update_word)
                .delete(words::delete_word),
        )
}
