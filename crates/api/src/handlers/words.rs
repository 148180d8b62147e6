//! Handlers for the `/words` resource.
//!
//! Reads are public; create, update, and delete require an admin session.

use axum::extract::{Path, State};
use axum::Json;
use kansai_core::types::DbId;
use kansai_db::models::word::{WordEntry, WordPayload};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAuth;
use crate::middleware::json::JsonBody;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/words
///
/// List every entry ordered by headword.
pub async fn list_words(State(state): State<AppState>) -> AppResult<Json<Vec<WordEntry>>> {
    let words = state.dictionary.list_all().await?;
    Ok(Json(words))
}

/// GET /api/words/{word}
///
/// Exact headword lookup.
pub async fn get_word(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> AppResult<Json<WordEntry>> {
    let entry = state.dictionary.find(&word).await?;
    Ok(Json(entry))
}

/// POST /api/words
pub async fn create_word(
    RequireAuth(admin): RequireAuth,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<WordPayload>,
) -> AppResult<Json<WordEntry>> {
    let entry = state.dictionary.create(&input).await?;

    tracing::info!(
        word_id = entry.id,
        word = %entry.word,
        username = %admin.username,
        "Word created",
    );

    Ok(Json(entry))
}

/// PUT /api/words/{id}
///
/// Replace all four fields of an entry.
pub async fn update_word(
    RequireAuth(admin): RequireAuth,
    State(state): State<AppState>,
    Path(key): Path<String>,
    JsonBody(input): JsonBody<WordPayload>,
) -> AppResult<Json<WordEntry>> {
    let id = parse_word_id(&key)?;
    let entry = state.dictionary.update(id, &input).await?;

    tracing::info!(
        word_id = id,
        word = %entry.word,
        username = %admin.username,
        "Word updated",
    );

    Ok(Json(entry))
}

/// DELETE /api/words/{id}
pub async fn delete_word(
    RequireAuth(admin): RequireAuth,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_word_id(&key)?;
    state.dictionary.delete(id).await?;

    tracing::info!(word_id = id, username = %admin.username, "Word deleted");

    Ok(Json(MessageResponse::new("Word deleted successfully")))
}

/// The `{key}` segment is shared with the headword lookup route, so ids
/// arrive as strings.
fn parse_word_id(key: &str) -> AppResult<DbId> {
    key.trim()
        .parse::<DbId>()
        .map_err(|_| AppError::BadRequest(format!("Invalid word id '{key}'")))
}
