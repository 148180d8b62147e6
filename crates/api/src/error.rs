use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kansai_core::error::CoreError;
use serde::Serialize;

/// Error returned by handlers and extractors.
///
/// Domain failures arrive as [`CoreError`]; the other variants come from
/// the HTTP layer itself. Every variant renders as
/// `{"error": "...", "code": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Malformed request that never reached a service (bad JSON, bad id).
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Core(CoreError::Validation(_)) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Core(CoreError::Conflict(_)) => StatusCode::CONFLICT,
            AppError::Core(CoreError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
            AppError::Core(CoreError::Internal(_)) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Machine-readable code for the `code` field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => "NOT_FOUND",
            AppError::Core(CoreError::Validation(_)) => "VALIDATION_ERROR",
            AppError::Core(CoreError::Conflict(_)) => "CONFLICT",
            AppError::Core(CoreError::Unauthorized(_)) => "UNAUTHORIZED",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Core(CoreError::Internal(_)) | AppError::InternalError(_) => {
                "INTERNAL_ERROR"
            }
        }
    }

    /// Message safe to send to the client. Internal details are replaced.
    fn public_message(&self) -> String {
        match self {
            AppError::Core(CoreError::NotFound { entity, key }) => {
                format!("{entity} '{key}' not found")
            }
            AppError::Core(
                CoreError::Validation(msg) | CoreError::Conflict(msg) | CoreError::Unauthorized(msg),
            )
            | AppError::BadRequest(msg) => msg.clone(),
            AppError::Core(CoreError::Internal(_)) | AppError::InternalError(_) => {
                INTERNAL_MESSAGE.to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed with internal error");
        }

        let body = ErrorBody {
            error: self.public_message(),
            code: self.code(),
        };
        (status, Json(body)).into_response()
    }
}
